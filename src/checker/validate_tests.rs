use super::*;
use crate::model::{Direction, Location};

fn signature(return_type: &str, params: &[&str]) -> FunctionSignature {
    FunctionSignature {
        name: "fry".to_string(),
        location: Location::new("egg.c", 12),
        returns: ParameterDescriptor::returning(return_type),
        params: params
            .iter()
            .map(|name| ParameterDescriptor::typed("int", *name))
            .collect(),
    }
}

fn record(params: &[&str], has_return: bool) -> DocRecord {
    DocRecord {
        params: params.iter().map(|n| ParameterDescriptor::named(*n)).collect(),
        returns: has_return.then(|| ParameterDescriptor::named(crate::model::RETURN_SENTINEL)),
        ..DocRecord::default()
    }
}

#[test]
fn matching_documentation_is_clean() {
    let kinds = validate(&signature("int", &["a", "b"]), Some(&record(&["a", "b"], true)));
    assert!(kinds.is_empty());
}

#[test]
fn absent_record_is_missing_documentation() {
    let kinds = validate(&signature("int", &["a"]), None);
    assert_eq!(kinds, vec![DiagnosticKind::MissingDocumentation]);
}

#[test]
fn opaque_record_is_never_validated() {
    let kinds = validate(&signature("int", &["a"]), Some(&DocRecord::opaque(None)));
    assert!(kinds.is_empty());
}

#[test]
fn undocumented_parameter_is_missing() {
    let kinds = validate(&signature("void", &["a", "b", "c"]), Some(&record(&["a", "b"], false)));
    assert_eq!(kinds, vec![DiagnosticKind::MissingParameter("c".to_string())]);
}

#[test]
fn extra_documented_parameter() {
    let kinds = validate(&signature("void", &["a"]), Some(&record(&["a", "ghost"], false)));
    assert_eq!(kinds, vec![DiagnosticKind::ExtraParameter("ghost".to_string())]);
}

#[test]
fn cardinality_mismatch_reports_both_directions() {
    let kinds = validate(&signature("void", &["a", "b"]), Some(&record(&["x"], false)));
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::MissingParameter("a".to_string()),
            DiagnosticKind::MissingParameter("b".to_string()),
            DiagnosticKind::ExtraParameter("x".to_string()),
        ]
    );
}

#[test]
fn positional_mismatch_names_the_declared_parameter() {
    let kinds = validate(&signature("void", &["a", "b"]), Some(&record(&["b", "a"], false)));
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::MismatchedParameter("a".to_string()),
            DiagnosticKind::MismatchedParameter("b".to_string()),
        ]
    );
}

#[test]
fn documented_type_must_agree_ignoring_spaces() {
    let sig = FunctionSignature {
        params: vec![ParameterDescriptor::typed("char *", "buf")],
        ..signature("void", &[])
    };
    let mut doc = record(&["buf"], false);
    doc.params[0].typename = Some("char*".to_string());
    assert!(validate(&sig, Some(&doc)).is_empty());

    doc.params[0].typename = Some("int".to_string());
    assert_eq!(
        validate(&sig, Some(&doc)),
        vec![DiagnosticKind::MismatchedParameter("buf".to_string())]
    );
}

#[test]
fn direction_only_compared_when_both_sides_state_it() {
    let mut doc = record(&["a"], false);
    doc.params[0].direction = Some(Direction::Out);
    assert!(validate(&signature("void", &["a"]), Some(&doc)).is_empty());

    let mut sig = signature("void", &["a"]);
    sig.params[0].direction = Some(Direction::In);
    assert_eq!(
        validate(&sig, Some(&doc)),
        vec![DiagnosticKind::MismatchedParameter("a".to_string())]
    );
}

#[test]
fn unnamed_declared_parameters_do_not_mismatch() {
    let kinds = validate(&signature("void", &[""]), Some(&record(&["len"], false)));
    assert!(kinds.is_empty());
}

#[test]
fn void_function_needs_no_return_documentation() {
    let kinds = validate(&signature("void", &[]), Some(&record(&[], false)));
    assert!(kinds.is_empty());
}

#[test]
fn non_void_function_needs_return_documentation() {
    let kinds = validate(&signature("void *", &[]), Some(&record(&[], false)));
    assert_eq!(kinds, vec![DiagnosticKind::MissingReturnDocumentation]);
}

#[test]
fn bindings_produce_located_diagnostics() {
    let bindings = vec![
        Binding {
            signature: signature("int", &["a"]),
            record: None,
        },
        Binding {
            signature: signature("void", &["a"]),
            record: Some(record(&["a"], false)),
        },
    ];
    let diagnostics = validate_bindings(&bindings);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "egg.c:12 in function fry - Is missing documentation!"
    );
}
