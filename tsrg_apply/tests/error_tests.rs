use std::path::PathBuf;
use tsrg_apply::errors::AppError;
use tsrg_apply::mapping::{LineIssue, MappingError};

#[test]
fn app_error_from_bad_mapping_line() {
    let err: AppError = MappingError::BadLine {
        line: 7,
        issue: LineIssue::MemberTokenCount(1),
    }
    .into();
    assert!(matches!(err, AppError::Mapping(MappingError::BadLine { line: 7, .. })));
    assert_eq!(
        err.to_string(),
        "found an issue on line 7. Description: expected strictly 2 or 3 tokens on a member line, found 1"
    );
}

#[test]
fn app_error_from_console_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "stdin closed");
    let app: AppError = io_err.into();
    assert!(matches!(app, AppError::Console(_)));
}

#[test]
fn argument_errors_name_the_path() {
    let err = AppError::SourceFile(PathBuf::from("Missing.java"));
    assert!(err.to_string().contains("\"Missing.java\""));
}
