use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("{0}")]
    Mapping(#[from] crate::mapping::MappingError),
    #[error("the first argument \"{}\" should be a valid path to the project directory", .0.display())]
    ProjectDir(PathBuf),
    #[error("the second argument \"{}\" should be a valid path to the source file", .0.display())]
    SourceFile(PathBuf),
    #[error("{} is not valid UTF-8 text; source files must be UTF-8", .0.display())]
    SourceEncoding(PathBuf),
    #[error("could not read {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    WriteSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}
