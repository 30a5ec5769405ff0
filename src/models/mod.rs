pub mod input_defaults;
pub mod session_state;
pub mod time_units;
pub mod tracker_config;
pub mod treat;
