pub mod log_entry;
pub mod log_level;
