pub mod file_source;
pub mod records;
