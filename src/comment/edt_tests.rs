use super::*;
use crate::comment::locate_comments;

const REFERENCE_TEXT: &str = "edt: * function fry

Fry some eggs.

Return: cerrno
  Whether we fried the eggs. This line is very, very, very, very, very, very, very, very long.

Argument: frying
  IN:     How many to fry.

Argument: style
  INOUT:  Type of egg.
";

const REFERENCE_BLOCK: &str = "/*
 * edt: * function fry
 *
 * Fry some eggs.
 *
 * Return: cerrno
 *   Whether we fried the eggs. This line is very, very, very, very, very, very,
 *       very, very long.
 *
 * Argument: frying
 *   IN:     How many to fry.
 *
 * Argument: style
 *   INOUT:  Type of egg.
 */";

fn comment(start_line: usize, lines: &[&str]) -> VerbatimComment {
    VerbatimComment {
        start_line,
        end_line: start_line + lines.len() - 1,
        lines: lines.iter().map(ToString::to_string).collect(),
    }
}

fn fry_record() -> DocRecord {
    DocRecord {
        name: Some("fry".to_string()),
        description: "Fry some eggs.".to_string(),
        returns: Some(ParameterDescriptor::returning("cerrno").with_comment(
            "Whether we fried the eggs. This line is very, very, very, very, very, very, very, very long.",
        )),
        params: vec![
            ParameterDescriptor::typed("int", "frying")
                .with_direction(Direction::In)
                .with_comment("How many to fry."),
            ParameterDescriptor::typed("char *", "style")
                .with_direction(Direction::InOut)
                .with_comment("Type of egg."),
        ],
        opaque: false,
    }
}

#[test]
fn renders_reference_text() {
    assert_eq!(render_edt_text(&fry_record()), REFERENCE_TEXT);
}

#[test]
fn renders_reference_block() {
    assert_eq!(render_edt(&fry_record(), WrapOptions::default()), REFERENCE_BLOCK);
}

#[test]
fn parses_reference_block() {
    let lines: Vec<&str> = REFERENCE_BLOCK.lines().collect();
    let located = locate_comments(&lines, Dialect::Edt);
    let record = EdtParser::new().parse(&located[0]).unwrap().unwrap();

    assert_eq!(record.name.as_deref(), Some("fry"));
    assert_eq!(record.description, "Fry some eggs.");
    assert_eq!(
        record.returns.as_ref().and_then(|r| r.typename.as_deref()),
        Some("cerrno")
    );
    assert_eq!(
        record.returns.as_ref().and_then(|r| r.comment.as_deref()),
        Some("Whether we fried the eggs. This line is very, very, very, very, very, very, very, very long.")
    );
    assert_eq!(record.param_names().collect::<Vec<_>>(), vec!["frying", "style"]);
    assert_eq!(record.params[0].direction, Some(Direction::In));
    assert_eq!(record.params[0].comment.as_deref(), Some("How many to fry."));
    assert_eq!(record.params[1].direction, Some(Direction::InOut));
}

#[test]
fn comment_without_definition_is_not_edt() {
    let parsed = EdtParser::new()
        .parse(&comment(1, &["/*", " * Just a note.", " */"]))
        .unwrap();
    assert!(parsed.is_none());
}

#[test]
fn license_header_without_stars_is_ignored() {
    let parsed = EdtParser::new()
        .parse(&comment(1, &["/*", "   Copyright 2016", "   All rights reserved.", " */"]))
        .unwrap();
    assert!(parsed.is_none());
}

#[test]
fn malformed_block_with_definition_is_an_error() {
    let err = EdtParser::new()
        .parse(&comment(5, &["/*", " * edt: * function f", "   oops", " */"]))
        .unwrap_err();
    assert_eq!(err.line, 7);
}

#[test]
fn definition_needs_three_fields() {
    let err = EdtParser::new()
        .parse(&comment(1, &["/*", " * edt: function fry", " */"]))
        .unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn second_definition_is_an_error() {
    let err = EdtParser::new()
        .parse(&comment(
            1,
            &["/*", " * edt: * function a", " *", " * edt: * function b", " */"],
        ))
        .unwrap_err();
    assert_eq!(err.line, 4);
}

#[test]
fn second_return_is_an_error() {
    let err = EdtParser::new()
        .parse(&comment(
            1,
            &["/*", " * edt: * function a", " * Return: int", " * Return: int", " */"],
        ))
        .unwrap_err();
    assert_eq!(err.line, 4);
}

#[test]
fn argument_line_token_count() {
    let parser = EdtParser::new();
    let typed = parser
        .parse(&comment(1, &["/*", " * edt: * function a", " * Argument: int count", " */"]))
        .unwrap()
        .unwrap();
    assert_eq!(typed.params[0].name, "count");
    assert_eq!(typed.params[0].typename.as_deref(), Some("int"));

    let err = parser
        .parse(&comment(1, &["/*", " * edt: * function a", " * Argument: a b c", " */"]))
        .unwrap_err();
    assert_eq!(err.line, 3);

    let err = parser
        .parse(&comment(1, &["/*", " * edt: * function a", " * Argument:", " */"]))
        .unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn text_before_definition_is_not_description() {
    let record = EdtParser::new()
        .parse(&comment(
            1,
            &["/*", " * Preamble.", " * edt: * function a", " *", " * Real text.", " */"],
        ))
        .unwrap()
        .unwrap();
    assert_eq!(record.description, "Real text.");
}

#[test]
fn reference_block_keeps_best_effort_name() {
    let record = EdtParser::new()
        .parse(&comment(
            1,
            &["/*", " * edt: * function fry", " *", " * EDT in egg.h", " */"],
        ))
        .unwrap()
        .unwrap();
    assert!(record.opaque);
    assert_eq!(record.name.as_deref(), Some("fry"));
}

#[test]
fn reference_block_without_definition_is_opaque_and_nameless() {
    let record = EdtParser::new()
        .parse(&comment(1, &["/*", " * Implements egg_fry_cb.", " */"]))
        .unwrap()
        .unwrap();
    assert!(record.opaque);
    assert!(record.name.is_none());
}

#[test]
fn out_direction_label_is_aligned() {
    let record = DocRecord {
        name: Some("read".to_string()),
        params: vec![ParameterDescriptor::named("buf")
            .with_direction(Direction::Out)
            .with_comment("Filled in.")],
        ..DocRecord::default()
    };
    let text = render_edt_text(&record);
    assert!(text.contains("Argument: buf\n  OUT:    Filled in.\n"));
    assert!(text.contains("<Description>"));
    assert!(!text.contains("Return:"));
}
