use super::*;

fn signature(return_type: &str, params: &[(&str, &str)]) -> FunctionSignature {
    FunctionSignature {
        name: "fry".to_string(),
        location: Location::new("egg.c", 10),
        returns: ParameterDescriptor::returning(return_type),
        params: params
            .iter()
            .map(|(ty, name)| ParameterDescriptor::typed(*ty, *name))
            .collect(),
    }
}

#[test]
fn direction_parses_common_spellings() {
    assert_eq!(Direction::parse("in"), Some(Direction::In));
    assert_eq!(Direction::parse("OUT"), Some(Direction::Out));
    assert_eq!(Direction::parse("in,out"), Some(Direction::InOut));
    assert_eq!(Direction::parse("INOUT"), Some(Direction::InOut));
    assert_eq!(Direction::parse("sideways"), None);
}

#[test]
fn return_descriptor_uses_sentinel_name() {
    let ret = ParameterDescriptor::returning("int");
    assert!(ret.is_return());
    assert!(!ParameterDescriptor::named("x").is_return());
}

#[test]
fn void_detection_ignores_surrounding_space() {
    assert!(signature(" void ", &[]).returns_void());
    assert!(!signature("void *", &[]).returns_void());
    assert!(!signature("int", &[]).returns_void());
}

#[test]
fn push_comment_joins_lines() {
    let mut param = ParameterDescriptor::named("style");
    param.push_comment("Type of");
    param.push_comment("   ");
    param.push_comment("egg.");
    assert_eq!(param.comment.as_deref(), Some("Type of egg."));
}

#[test]
fn from_signature_skips_void_return_and_defaults_direction() {
    let record = DocRecord::from_signature(&signature("void", &[("int", "count")]));
    assert!(record.returns.is_none());
    assert_eq!(record.name.as_deref(), Some("fry"));
    assert_eq!(record.params[0].direction, Some(Direction::In));
    assert!(!record.opaque);
}

#[test]
fn from_signature_names_unnamed_parameters() {
    let record = DocRecord::from_signature(&signature("int", &[("int", ""), ("char *", "buf")]));
    assert_eq!(
        record.param_names().collect::<Vec<_>>(),
        vec![UNNAMED_PARAMETER, "buf"]
    );
}

#[test]
fn from_signature_keeps_non_void_return() {
    let record = DocRecord::from_signature(&signature("cerrno", &[]));
    assert_eq!(
        record.returns.and_then(|r| r.typename).as_deref(),
        Some("cerrno")
    );
}

#[test]
fn verbatim_comment_line_numbers_are_offsets_from_start() {
    let comment = VerbatimComment {
        start_line: 5,
        end_line: 7,
        lines: vec!["/**".into(), " * x".into(), " */".into()],
    };
    assert_eq!(comment.line_number(0), 5);
    assert_eq!(comment.line_number(2), 7);
}
