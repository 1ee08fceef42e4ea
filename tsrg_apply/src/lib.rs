pub mod cli;
pub mod config;
pub mod errors;
pub mod logger;
pub mod mapping;
pub mod source_file;
pub mod substitution;
