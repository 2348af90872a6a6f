use serde::{Deserialize, Serialize};

/// Width of the ` * ` prefix put in front of every wrapped line.
const PREFIX_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    /// Maximum length of a finished comment line.
    pub width: usize,
    /// Extra indentation given to continuation lines.
    pub indent: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 80,
            indent: 4,
        }
    }
}

/// Split `line` into pieces no longer than `width` characters.
///
/// Breaks go at the last whitespace at or before the budget; when the text up to
/// the budget has no usable whitespace the line is cut hard. Continuation lines
/// keep the line's leading indentation and gain `indent` more, once.
#[must_use]
pub fn wrap_line(line: &str, width: usize, indent: usize, already_indented: bool) -> Vec<String> {
    let width = width.max(1);
    let mut pieces = Vec::new();
    let mut chars: Vec<char> = line.chars().collect();
    let mut indented = already_indented;

    while chars.len() > width {
        let cut = (1..=width)
            .rev()
            .find(|&i| chars[i].is_whitespace() && !chars[i - 1].is_whitespace())
            .unwrap_or(width);
        pieces.push(chars[..cut].iter().collect());

        let leading = chars.iter().take_while(|c| c.is_whitespace()).count();
        let pad = if indented { leading } else { leading + indent };
        let pad = pad.min(width - 1);

        let rest: Vec<char> = chars[cut..]
            .iter()
            .copied()
            .skip_while(|c| c.is_whitespace())
            .collect();
        if rest.is_empty() {
            return pieces;
        }

        chars = std::iter::repeat_n(' ', pad).chain(rest).collect();
        indented = true;
    }

    pieces.push(chars.into_iter().collect());
    pieces
}

/// Turn free text into a wrapped block comment opened by `opening`.
///
/// Each line is wrapped to leave room for the ` * ` prefix; empty lines become ` *`.
#[must_use]
pub fn to_comment_block(text: &str, opening: &str, options: WrapOptions) -> String {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let budget = options.width.saturating_sub(PREFIX_WIDTH);

    let mut out = String::from(opening);
    for line in text.split('\n') {
        for piece in wrap_line(line, budget, options.indent, false) {
            out.push('\n');
            if piece.is_empty() {
                out.push_str(" *");
            } else {
                out.push_str(" * ");
                out.push_str(&piece);
            }
        }
    }
    out.push('\n');
    out.push_str(super::CLOSING_LINE);
    out
}

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod tests;
