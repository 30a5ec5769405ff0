pub mod date;
pub mod money;
pub mod path;
pub mod table;

pub use money::format_currency;
