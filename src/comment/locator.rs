use crate::model::VerbatimComment;

use super::{CLOSING_LINE, Dialect};

#[derive(Debug)]
enum State {
    Idle,
    Inside { start_line: usize, body: Vec<String> },
}

/// Find the top-level block comments of one dialect, in source order.
///
/// Only lines exactly equal to the opening token (`/**` or `/*`) open a block and
/// only ` */` closes it, after trailing whitespace is removed. An opening line
/// seen inside a block restarts it. A block still open at end of input is dropped.
#[must_use]
pub fn locate_comments<S: AsRef<str>>(lines: &[S], dialect: Dialect) -> Vec<VerbatimComment> {
    let opening = dialect.opening();
    let mut comments = Vec::new();
    let mut state = State::Idle;

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim_end();
        let line_number = index + 1;

        if line == opening {
            state = State::Inside {
                start_line: line_number,
                body: vec![opening.to_string()],
            };
            continue;
        }

        if let State::Inside { start_line, body } = &mut state {
            if line == CLOSING_LINE {
                body.push(CLOSING_LINE.to_string());
                comments.push(VerbatimComment {
                    start_line: *start_line,
                    end_line: line_number,
                    lines: std::mem::take(body),
                });
                state = State::Idle;
            } else {
                body.push(line.to_string());
            }
        }
    }

    comments
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
