use std::fs;
use tempfile::tempdir;
use tsrg_apply::mapping::{mapping_path, LineIssue, MappingError, Mappings, DEFAULT_MAPPING_PATH};

#[test]
fn loads_field_from_minimal_file() {
    let m = Mappings::parse("tsrg2 left right\nA A\n\tx field_100\n").unwrap();
    assert_eq!(m.field("field_100"), Some("x"));
    assert_eq!(m.field_count(), 1);
    assert_eq!(m.function_count(), 0);
}

#[test]
fn repeated_function_is_tolerated_until_it_conflicts() {
    let ok = "tsrg2 left right\nA A\n\ty unused func_5\n\ty unused2 func_5\n";
    let m = Mappings::parse(ok).unwrap();
    assert_eq!(m.function("func_5"), Some("y"));

    let conflicting = format!("{ok}\tz unused func_5\n");
    let err = Mappings::parse(&conflicting).unwrap_err();
    match err {
        MappingError::BadLine { line, issue } => {
            assert_eq!(line, 5);
            assert!(matches!(issue, LineIssue::FunctionReregistered { .. }));
            assert!(issue.to_string().contains("re-registered"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn loads_from_the_project_layout() {
    let dir = tempdir().unwrap();
    let path = mapping_path(dir.path(), DEFAULT_MAPPING_PATH);
    assert!(path.ends_with("build/createMcpToSrg/output.tsrg"));

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "tsrg2 left right\n\
         net/minecraft/block/Block net/minecraft/block/Block\n\
         \tlightValue field_149784_t\n\
         \tgetLightValue (Lnet/minecraft/block/BlockState;)I func_149750_m\n\
         \ttoString ()Ljava/lang/String; toString\n",
    )
    .unwrap();

    let m = Mappings::load(&path).unwrap();
    assert_eq!(m.field("field_149784_t"), Some("lightValue"));
    assert_eq!(m.function("func_149750_m"), Some("getLightValue"));
    assert_eq!(m.function_count(), 1);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = Mappings::load(&dir.path().join("output.tsrg")).unwrap_err();
    assert!(matches!(err, MappingError::NotFound(_)));
}

#[test]
fn loading_is_deterministic() {
    let text = "tsrg2 left right\nA A\n\ta field_1\n\tb field_2\n\tc d func_1\n\tc e func_1\n";
    assert_eq!(Mappings::parse(text).unwrap(), Mappings::parse(text).unwrap());
}
