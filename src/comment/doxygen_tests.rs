use super::*;
use crate::comment::locate_comments;

fn comment(lines: &[&str]) -> VerbatimComment {
    VerbatimComment {
        start_line: 1,
        end_line: lines.len(),
        lines: lines.iter().map(ToString::to_string).collect(),
    }
}

fn node_status_comment() -> VerbatimComment {
    comment(&[
        "/**",
        " * Gets the node status from an instance derived from Base:Node",
        " *",
        " * @param[in] clips_env",
        " *              Clips environment pointer",
        " *",
        " * @param[in] inst_ptr",
        " *              A generic pointer to the data node instance",
        " *",
        " * @param[out] status",
        " *              Enumeration of the possible node status's",
        " *",
        " * @return SUCCESS or",
        " *         INVALID_ARG (if instance passed is not a ...",
        " */",
    ])
}

#[test]
fn parses_params_in_order() {
    let record = DoxygenParser::new().parse(&node_status_comment()).unwrap();
    assert!(!record.opaque);
    assert_eq!(
        record.param_names().collect::<Vec<_>>(),
        vec!["clips_env", "inst_ptr", "status"]
    );
    assert_eq!(
        record.description,
        "Gets the node status from an instance derived from Base:Node"
    );
    assert_eq!(record.params[2].direction, Some(Direction::Out));
    assert_eq!(
        record.params[0].comment.as_deref(),
        Some("Clips environment pointer")
    );
}

#[test]
fn return_marker_records_presence_and_comment() {
    let record = DoxygenParser::new().parse(&node_status_comment()).unwrap();
    let ret = record.returns.unwrap();
    assert!(ret.is_return());
    assert!(ret.typename.is_none());
    assert_eq!(
        ret.comment.as_deref(),
        Some("SUCCESS or INVALID_ARG (if instance passed is not a ...")
    );
}

#[test]
fn missing_return_marker_means_no_return() {
    let record = DoxygenParser::new()
        .parse(&comment(&["/**", " * Reset.", " */"]))
        .unwrap();
    assert!(record.returns.is_none());
    assert!(record.params.is_empty());
    assert_eq!(record.description, "Reset.");
}

#[test]
fn description_keeps_paragraphs_but_is_trimmed() {
    let record = DoxygenParser::new()
        .parse(&comment(&["/**", " *", " * One.", " *", " * Two.", " *", " */"]))
        .unwrap();
    assert_eq!(record.description, "One.\n\nTwo.");
}

#[test]
fn backslash_markers_keep_bracketed_type_as_comment() {
    let record = DoxygenParser::new()
        .parse(&comment(&[
            "/**",
            " * \\param[in,out] buf (char *) Buffer to fill.",
            " * \\returns Bytes written.",
            " */",
        ]))
        .unwrap();
    let param = &record.params[0];
    assert_eq!(param.name, "buf");
    assert_eq!(param.direction, Some(Direction::InOut));
    assert!(param.typename.is_none());
    assert_eq!(param.comment.as_deref(), Some("(char *) Buffer to fill."));
    assert!(record.returns.is_some());
}

#[test]
fn parenthesised_prose_is_comment_not_type() {
    let record = DoxygenParser::new()
        .parse(&comment(&[
            "/**",
            " * @param[in] len (in bytes) how much to copy",
            " * @param[in] cb (int (*)(int))",
            " */",
        ]))
        .unwrap();
    assert!(record.params.iter().all(|p| p.typename.is_none()));
    assert_eq!(
        record.params[0].comment.as_deref(),
        Some("(in bytes) how much to copy")
    );
    assert_eq!(record.params[1].comment.as_deref(), Some("(int (*)(int))"));
}

#[test]
fn second_return_is_structural_error() {
    let err = DoxygenParser::new()
        .parse(&comment(&["/**", " * @return a", " * @return b", " */"]))
        .unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn param_without_name_is_structural_error() {
    let err = DoxygenParser::new()
        .parse(&comment(&["/**", " * @param", " */"]))
        .unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn reference_comment_is_opaque() {
    let record = DoxygenParser::new()
        .parse(&comment(&[
            "/**",
            " * See egg.h for the function description.",
            " * @param unused",
            " */",
        ]))
        .unwrap();
    assert!(record.opaque);
    assert!(record.params.is_empty());
}

#[test]
fn rendered_template_parses_back() {
    let record = DocRecord {
        name: Some("fry".to_string()),
        description: String::new(),
        returns: Some(ParameterDescriptor::returning("cerrno")),
        params: vec![
            ParameterDescriptor::typed("int", "frying").with_direction(Direction::In),
            ParameterDescriptor::typed("char *", "style").with_direction(Direction::InOut),
        ],
        opaque: false,
    };
    let block = render_doxygen(&record, WrapOptions::default());
    assert!(block.starts_with("/**\n * fry\n *\n * <Description>\n *\n * @param[in] frying (int)\n"));
    assert!(block.contains(" * @param[in,out] style (char *)\n *              <Comment>\n"));
    assert!(block.ends_with(" * @return cerrno\n *              <Comment>\n */"));

    let lines: Vec<&str> = block.lines().collect();
    let located = locate_comments(&lines, Dialect::Doxygen);
    assert_eq!(located.len(), 1);
    let parsed = DoxygenParser::new().parse(&located[0]).unwrap();
    assert_eq!(parsed.param_names().collect::<Vec<_>>(), vec!["frying", "style"]);
    assert!(parsed.returns.is_some());
}

#[test]
fn rendered_template_fits_width() {
    let record = DocRecord {
        name: Some("fry".to_string()),
        description: "Fry ".repeat(40),
        returns: Some(ParameterDescriptor::returning("int").with_comment("ok ".repeat(40))),
        params: vec![ParameterDescriptor::typed("int", "n").with_comment("count ".repeat(30))],
        opaque: false,
    };
    let options = WrapOptions {
        width: 60,
        indent: 4,
    };
    let block = render_doxygen(&record, options);
    assert!(block.lines().all(|l| l.chars().count() <= 60));
}

#[test]
fn void_template_has_no_return_section() {
    let record = DocRecord {
        name: Some("reset".to_string()),
        ..DocRecord::default()
    };
    let block = render_doxygen(&record, WrapOptions::default());
    assert!(!block.contains("@return"));
}
