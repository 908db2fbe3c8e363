pub mod file_name;
pub mod file_pattern;
