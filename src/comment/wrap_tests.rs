use super::*;

#[test]
fn short_lines_are_untouched() {
    assert_eq!(wrap_line("abc", 80, 4, false), vec!["abc"]);
    assert_eq!(wrap_line("", 80, 4, false), vec![""]);
}

#[test]
fn hard_cut_adds_indent_once() {
    assert_eq!(wrap_line("abcdef", 4, 1, false), vec!["abcd", " ef"]);
    assert_eq!(wrap_line("abcdef", 4, 1, true), vec!["abcd", "ef"]);
    assert_eq!(
        wrap_line("abcdefghijk", 4, 2, false),
        vec!["abcd", "  ef", "  gh", "  ij", "  k"]
    );
}

#[test]
fn breaks_at_last_whitespace() {
    assert_eq!(
        wrap_line("one two three", 9, 2, false),
        vec!["one two", "  three"]
    );
}

#[test]
fn continuation_keeps_original_indentation() {
    let line = "  Whether we fried the eggs. This line is very, very, very, very, very, very, very, very long.";
    assert_eq!(
        wrap_line(line, 77, 4, false),
        vec![
            "  Whether we fried the eggs. This line is very, very, very, very, very, very,",
            "      very, very long.",
        ]
    );
}

#[test]
fn every_piece_fits_the_width() {
    let line = "word ".repeat(60);
    for width in [10, 23, 77] {
        for piece in wrap_line(line.trim_end(), width, 4, false) {
            assert!(piece.chars().count() <= width, "{piece:?} exceeds {width}");
        }
    }
}

#[test]
fn comment_block_uses_star_prefixes() {
    let block = to_comment_block("first\n\nsecond\n", "/*", WrapOptions::default());
    assert_eq!(block, "/*\n * first\n *\n * second\n */");
}

#[test]
fn comment_block_wraps_to_width() {
    let options = WrapOptions {
        width: 20,
        indent: 4,
    };
    let block = to_comment_block("alpha beta gamma delta epsilon", "/**", options);
    assert_eq!(
        block,
        "/**\n * alpha beta gamma\n *     delta epsilon\n */"
    );
    assert!(block.lines().all(|l| l.chars().count() <= 20));
}
