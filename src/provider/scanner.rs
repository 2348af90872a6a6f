use std::path::Path;

use indexmap::IndexSet;

use crate::error::Result;

use super::{AstProvider, Declaration, ProviderDiagnostic, ProviderOutput, Severity};

/// Keywords that may appear inside a type spelling.
const TYPE_KEYWORDS: &[&str] = &[
    "void",
    "char",
    "short",
    "int",
    "long",
    "float",
    "double",
    "signed",
    "unsigned",
    "_Bool",
    "_Complex",
    "const",
    "volatile",
    "restrict",
    "__restrict",
    "struct",
    "union",
    "enum",
];

/// Storage-class and function specifiers. They are not part of a return type.
const SPECIFIERS: &[&str] = &[
    "static",
    "extern",
    "inline",
    "__inline",
    "__inline__",
    "register",
    "auto",
    "_Noreturn",
    "_Thread_local",
];

/// Keywords whose following identifier is a tag, never a type name.
const TAG_KEYWORDS: &[&str] = &["struct", "union", "enum"];

const TYPEDEF_KEYWORD: &str = "typedef";

fn is_keyword(word: &str) -> bool {
    word == TYPEDEF_KEYWORD || TYPE_KEYWORDS.contains(&word) || SPECIFIERS.contains(&word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Word,
    Number,
    Literal,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
}

impl Token {
    fn is(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == punct
    }

    fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Word && !is_keyword(&self.text)
    }

    const fn is_wordlike(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Word | TokenKind::Number | TokenKind::Literal
        )
    }

    fn follows_tag_keyword(tokens: &[&Self], index: usize) -> bool {
        index > 0 && TAG_KEYWORDS.contains(&tokens[index - 1].text.as_str())
    }
}

/// Built-in declaration provider for stubbed C sources.
///
/// Understands exactly what a skeleton contains: top-level declarations terminated
/// by `;`, with every body already blanked. Identifiers used as types that are
/// neither keywords nor `typedef` names from the skeleton are reported as
/// `unknown type name '<ident>'` errors, so the resolution loop can alias them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarationScanner;

impl DeclarationScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn scan(&self, skeleton: &str) -> ProviderOutput {
        let statements = split_statements(tokenize(skeleton));
        let typedefs = collect_typedef_names(&statements);

        let mut output = ProviderOutput::default();
        for statement in &statements {
            scan_statement(statement, &typedefs, &mut output);
        }
        output
    }
}

impl AstProvider for DeclarationScanner {
    fn parse(&self, skeleton: &str, _filename: &Path) -> Result<ProviderOutput> {
        Ok(self.scan(skeleton))
    }
}

// -- Lexing -------------------------------------------------------------------

fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '\n' => {
                line += 1;
                i += 1;
            }
            c if c.is_whitespace() => i += 1,
            '#' => i = skip_directive(&chars, i, &mut line),
            '/' if next == Some('/') => i = skip_to_line_end(&chars, i),
            '/' if next == Some('*') => i = skip_block_comment(&chars, i + 2, &mut line),
            '"' | '\'' => {
                let start_line = line;
                let end = skip_literal(&chars, i, &mut line);
                tokens.push(Token {
                    kind: TokenKind::Literal,
                    text: chars[i..end].iter().collect(),
                    line: start_line,
                });
                i = end;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let end = scan_while(&chars, i, |ch| ch.is_ascii_alphanumeric() || ch == '_');
                tokens.push(Token {
                    kind: TokenKind::Word,
                    text: chars[i..end].iter().collect(),
                    line,
                });
                i = end;
            }
            c if c.is_ascii_digit() => {
                let end = scan_while(&chars, i, |ch| ch.is_ascii_alphanumeric() || ch == '.');
                tokens.push(Token {
                    kind: TokenKind::Number,
                    text: chars[i..end].iter().collect(),
                    line,
                });
                i = end;
            }
            '.' if next == Some('.') && chars.get(i + 2) == Some(&'.') => {
                tokens.push(Token {
                    kind: TokenKind::Punct,
                    text: "...".to_string(),
                    line,
                });
                i += 3;
            }
            _ => {
                tokens.push(Token {
                    kind: TokenKind::Punct,
                    text: c.to_string(),
                    line,
                });
                i += 1;
            }
        }
    }

    tokens
}

fn scan_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut i = start;
    while i < chars.len() && pred(chars[i]) {
        i += 1;
    }
    i
}

/// Skip a preprocessor directive, honouring backslash continuations.
/// Stops on the terminating newline so the caller counts it.
fn skip_directive(chars: &[char], mut i: usize, line: &mut usize) -> usize {
    while i < chars.len() {
        match chars[i] {
            '\\' if chars.get(i + 1) == Some(&'\n') => {
                *line += 1;
                i += 2;
            }
            '\n' => return i,
            _ => i += 1,
        }
    }
    i
}

fn skip_to_line_end(chars: &[char], start: usize) -> usize {
    scan_while(chars, start, |ch| ch != '\n')
}

fn skip_block_comment(chars: &[char], mut i: usize, line: &mut usize) -> usize {
    while i < chars.len() {
        if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
            return i + 2;
        }
        if chars[i] == '\n' {
            *line += 1;
        }
        i += 1;
    }
    i
}

fn skip_literal(chars: &[char], start: usize, line: &mut usize) -> usize {
    let quote = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if chars.get(i + 1) == Some(&'\n') {
                    *line += 1;
                }
                i += 2;
            }
            '\n' => return i,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

// -- Statements ---------------------------------------------------------------

fn split_statements(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut statements = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        if token.is(";") || token.is("{") || token.is("}") {
            if !current.is_empty() {
                statements.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        statements.push(current);
    }

    statements
}

fn collect_typedef_names(statements: &[Vec<Token>]) -> IndexSet<String> {
    statements
        .iter()
        .filter(|s| s.first().is_some_and(|t| t.text == TYPEDEF_KEYWORD))
        .filter_map(|s| {
            // `typedef int (*handler_t)(int);` names the pointer, not the last word
            let pointer_name = s
                .windows(3)
                .find(|w| w[0].is("(") && w[1].is("*") && w[2].is_identifier())
                .map(|w| w[2].text.clone());
            pointer_name.or_else(|| {
                s.iter()
                    .rev()
                    .find(|t| t.is_identifier())
                    .map(|t| t.text.clone())
            })
        })
        .collect()
}

fn scan_statement(tokens: &[Token], typedefs: &IndexSet<String>, output: &mut ProviderOutput) {
    let Some(first) = tokens.first() else {
        return;
    };
    if first.text == TYPEDEF_KEYWORD {
        return;
    }

    if let [only] = tokens
        && only.is_identifier()
        && !typedefs.contains(&only.text)
    {
        output.diagnostics.push(ProviderDiagnostic::new(
            Severity::Warning,
            only.line,
            "type specifier missing, defaults to 'int'",
        ));
        return;
    }

    let Some(open) = tokens.iter().position(|t| t.is("(")) else {
        return;
    };
    if open < 2 || !tokens[open - 1].is_identifier() {
        return;
    }
    let name = &tokens[open - 1];
    let type_tokens = &tokens[..open - 1];
    if !type_tokens
        .iter()
        .all(|t| t.kind == TokenKind::Word || t.is("*"))
    {
        return;
    }
    let Some(close) = matching_paren(tokens, open) else {
        return;
    };

    let return_tokens: Vec<&Token> = type_tokens
        .iter()
        .filter(|t| !SPECIFIERS.contains(&t.text.as_str()))
        .collect();
    report_unknown_types(&return_tokens, typedefs, output);
    let return_type = if return_tokens.is_empty() {
        "int".to_string()
    } else {
        spell(&return_tokens)
    };

    let params = parse_params(&tokens[open + 1..close], typedefs, output);

    output.declarations.push(Declaration {
        name: name.text.clone(),
        line: name.line,
        return_type,
        params,
    });
}

fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if token.is("(") {
            depth += 1;
        } else if token.is(")") {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

fn split_top_level<'a>(tokens: &'a [Token], separator: &str) -> Vec<&'a [Token]> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if token.is("(") || token.is("[") {
            depth += 1;
        } else if token.is(")") || token.is("]") {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && token.is(separator) {
            groups.push(&tokens[start..i]);
            start = i + 1;
        }
    }
    groups.push(&tokens[start..]);

    groups
}

fn parse_params(
    tokens: &[Token],
    typedefs: &IndexSet<String>,
    output: &mut ProviderOutput,
) -> Vec<(String, String)> {
    let groups = split_top_level(tokens, ",");
    if let [only] = groups.as_slice()
        && (only.is_empty() || (only.len() == 1 && only[0].text == "void"))
    {
        return Vec::new();
    }

    groups
        .into_iter()
        .filter(|g| !g.is_empty() && !(g.len() == 1 && g[0].is("...")))
        .map(|g| parse_param(g, typedefs, output))
        .collect()
}

fn parse_param(
    group: &[Token],
    typedefs: &IndexSet<String>,
    output: &mut ProviderOutput,
) -> (String, String) {
    // Function pointer: `int (*name)(int)`
    if let Some(idx) = group
        .windows(3)
        .position(|w| w[0].is("(") && w[1].is("*") && w[2].is_identifier())
    {
        let name_idx = idx + 2;
        let leading: Vec<&Token> = group[..idx].iter().collect();
        report_unknown_types(&leading, typedefs, output);
        let type_tokens: Vec<&Token> = group
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name_idx)
            .map(|(_, t)| t)
            .collect();
        return (spell(&type_tokens), group[name_idx].text.clone());
    }

    let mut end = group.len();
    while end > 0 && group[end - 1].is("]") {
        let Some(open) = group[..end].iter().rposition(|t| t.is("[")) else {
            break;
        };
        end = open;
    }
    let (core, suffix) = group.split_at(end);

    let named = core.len() > 1
        && core[core.len() - 1].is_identifier()
        && !TAG_KEYWORDS.contains(&core[core.len() - 2].text.as_str());
    let (type_core, name) = if named {
        (&core[..core.len() - 1], core[core.len() - 1].text.clone())
    } else {
        (core, String::new())
    };

    let type_refs: Vec<&Token> = type_core.iter().collect();
    report_unknown_types(&type_refs, typedefs, output);

    let spelled: Vec<&Token> = type_core.iter().chain(suffix.iter()).collect();
    (spell(&spelled), name)
}

fn report_unknown_types(
    tokens: &[&Token],
    typedefs: &IndexSet<String>,
    output: &mut ProviderOutput,
) {
    for (i, token) in tokens.iter().enumerate() {
        if !token.is_identifier()
            || typedefs.contains(&token.text)
            || Token::follows_tag_keyword(tokens, i)
        {
            continue;
        }
        output.diagnostics.push(ProviderDiagnostic::new(
            Severity::Error,
            token.line,
            format!("unknown type name '{}'", token.text),
        ));
    }
}

/// Spell a type the way clang prints it: `char *`, `char **`, `const char *const`.
fn spell(tokens: &[&Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;

    for token in tokens {
        if let Some(p) = prev {
            let spaced = (p.is_wordlike()
                && (token.is_wordlike() || token.is("*") || token.is("(") || token.is("[")))
                || p.is(",");
            if spaced {
                out.push(' ');
            }
        }
        out.push_str(&token.text);
        prev = Some(token);
    }

    out
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
