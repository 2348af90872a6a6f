use std::path::Path;

use super::*;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(&exts(&["c", "h"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("src/egg.c")));
    assert!(filter.should_include(Path::new("include/egg.h")));
    assert!(!filter.should_include(Path::new("src/egg.cpp")));
    assert!(!filter.should_include(Path::new("Makefile")));
}

#[test]
fn extensions_accept_leading_dot_and_any_case() {
    let filter = GlobFilter::new(&exts(&[".C"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("egg.c")));
    assert!(filter.should_include(Path::new("EGG.C")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        &exts(&["c"]),
        &["**/third_party/**".to_string(), "**/*_gen.c".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/egg.c")));
    assert!(!filter.should_include(Path::new("third_party/zlib/inflate.c")));
    assert!(!filter.should_include(Path::new("src/table_gen.c")));
}

#[test]
fn invalid_pattern_is_rejected() {
    let result = GlobFilter::new(&exts(&["c"]), &["[invalid".to_string()]);
    assert!(matches!(result, Err(DocGuardError::InvalidPattern { .. })));
}
