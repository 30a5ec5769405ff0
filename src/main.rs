//! rSaveTracker main entrypoint.

use rsavetracker::run;
use rsavetracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
