use std::path::{Path, PathBuf};

use serde::Serialize;

/// Name given to the descriptor that stands for a function's return value.
pub const RETURN_SENTINEL: &str = "<return>";

/// Stand-in name for prototype parameters declared without one.
pub const UNNAMED_PARAMETER: &str = "<name>";

/// Return type spelling that is exempt from return documentation.
pub const VOID_TYPE: &str = "void";

/// Position of a declaration in the original (not stubbed) source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub filename: PathBuf,
    /// 1-based line number.
    pub line: usize,
}

impl Location {
    #[must_use]
    pub fn new(filename: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// Data-flow direction of a parameter as stated by its documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Direction {
    /// Parse a direction tag such as `in`, `OUT` or `in,out`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "inout" | "in,out" | "in, out" | "in/out" => Some(Self::InOut),
            _ => None,
        }
    }

    /// Upper-case label used by EDT argument blocks.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::InOut => "INOUT",
        }
    }

    /// Lower-case tag used by Doxygen `@param[...]` markers.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in,out",
        }
    }
}

/// One parameter (or the return value) of a function.
///
/// Declarations always know the type spelling; documentation only sometimes states
/// it, so both `typename` and `direction` are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParameterDescriptor {
    pub typename: Option<String>,
    pub name: String,
    pub comment: Option<String>,
    pub direction: Option<Direction>,
}

impl ParameterDescriptor {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn typed(typename: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            typename: Some(typename.into()),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn returning(typename: impl Into<String>) -> Self {
        Self::typed(typename, RETURN_SENTINEL)
    }

    #[must_use]
    pub fn is_return(&self) -> bool {
        self.name == RETURN_SENTINEL
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Append a continuation line to the free-text comment.
    pub fn push_comment(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        match &mut self.comment {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(text);
            }
            None => self.comment = Some(text.to_string()),
        }
    }
}

/// A function declaration as reported by the declaration provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub location: Location,
    pub returns: ParameterDescriptor,
    pub params: Vec<ParameterDescriptor>,
}

impl FunctionSignature {
    #[must_use]
    pub fn returns_void(&self) -> bool {
        self.returns
            .typename
            .as_deref()
            .is_some_and(|t| t.trim() == VOID_TYPE)
    }

    #[must_use]
    pub fn filename(&self) -> &Path {
        &self.location.filename
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.location.line
    }
}

/// A block comment lifted verbatim from the source, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbatimComment {
    pub start_line: usize,
    pub end_line: usize,
    pub lines: Vec<String>,
}

impl VerbatimComment {
    /// Source line number of the `index`-th comment line.
    #[must_use]
    pub const fn line_number(&self, index: usize) -> usize {
        self.start_line + index
    }
}

/// Structured documentation parsed out of a comment.
///
/// An opaque record says "the documentation lives elsewhere" and is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocRecord {
    pub name: Option<String>,
    pub description: String,
    pub returns: Option<ParameterDescriptor>,
    pub params: Vec<ParameterDescriptor>,
    pub opaque: bool,
}

impl DocRecord {
    #[must_use]
    pub fn opaque(name: Option<String>) -> Self {
        Self {
            name,
            opaque: true,
            ..Self::default()
        }
    }

    /// Build a documentation skeleton for a declaration, used for template output.
    ///
    /// Parameters default to the `in` direction and unnamed ones are called
    /// [`UNNAMED_PARAMETER`]; void functions get no return entry.
    #[must_use]
    pub fn from_signature(signature: &FunctionSignature) -> Self {
        let returns = (!signature.returns_void()).then(|| signature.returns.clone());
        let params = signature
            .params
            .iter()
            .map(|p| {
                let mut param = p.clone();
                if param.name.is_empty() {
                    param.name = UNNAMED_PARAMETER.to_string();
                }
                if param.direction.is_none() {
                    param.direction = Some(Direction::In);
                }
                param
            })
            .collect();

        Self {
            name: Some(signature.name.clone()),
            description: String::new(),
            returns,
            params,
            opaque: false,
        }
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
