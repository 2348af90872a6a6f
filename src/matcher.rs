//! Binding of declarations to documentation records.

use crate::model::{DocRecord, FunctionSignature};

/// How many lines above a declaration its comment may end.
pub const WINDOW: usize = 2;

/// A parsed documentation record together with the line its comment ends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedRecord {
    pub end_line: usize,
    pub record: DocRecord,
}

impl LocatedRecord {
    #[must_use]
    pub const fn new(end_line: usize, record: DocRecord) -> Self {
        Self { end_line, record }
    }
}

/// `true` when a comment ending at `end_line` may document a declaration at `line`.
///
/// The comment must end on one of the [`WINDOW`] lines directly above.
#[must_use]
pub const fn in_window(line: usize, end_line: usize) -> bool {
    end_line < line && end_line + WINDOW >= line
}

/// A declaration and the record bound to it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub signature: FunctionSignature,
    pub record: Option<DocRecord>,
}

/// Bind every signature to at most one record.
///
/// Doxygen records are tried first, by position only. When any signature is left
/// unmatched, the unmatched ones are tried against EDT records: a record named
/// after the function wins outright, otherwise the first positional fit.
#[must_use]
pub fn bind(
    signatures: Vec<FunctionSignature>,
    doxygen: &[LocatedRecord],
    edt: &[LocatedRecord],
) -> Vec<Binding> {
    let mut bindings: Vec<Binding> = signatures
        .into_iter()
        .map(|signature| {
            let record = doxygen
                .iter()
                .find(|r| in_window(signature.line(), r.end_line))
                .map(|r| r.record.clone());
            Binding { signature, record }
        })
        .collect();

    if bindings.iter().all(|b| b.record.is_some()) {
        return bindings;
    }

    for binding in bindings.iter_mut().filter(|b| b.record.is_none()) {
        let line = binding.signature.line();
        let by_name = edt
            .iter()
            .find(|r| r.record.name.as_deref() == Some(binding.signature.name.as_str()));
        binding.record = by_name
            .or_else(|| edt.iter().find(|r| in_window(line, r.end_line)))
            .map(|r| r.record.clone());
    }

    bindings
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
