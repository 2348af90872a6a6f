use indexmap::IndexSet;

use crate::matcher::Binding;
use crate::model::{DocRecord, FunctionSignature, ParameterDescriptor};

use super::{Diagnostic, DiagnosticKind};

/// Compare one declaration against the record bound to it.
#[must_use]
pub fn validate(signature: &FunctionSignature, record: Option<&DocRecord>) -> Vec<DiagnosticKind> {
    let Some(record) = record else {
        return vec![DiagnosticKind::MissingDocumentation];
    };
    if record.opaque {
        return Vec::new();
    }

    let mut kinds = Vec::new();

    if signature.params.len() == record.params.len() {
        kinds.extend(
            signature
                .params
                .iter()
                .zip(&record.params)
                .filter(|(declared, documented)| !same_parameter(declared, documented))
                .map(|(declared, _)| DiagnosticKind::MismatchedParameter(declared.name.clone())),
        );
    } else {
        let declared: IndexSet<&str> = signature
            .params
            .iter()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
            .collect();
        let documented: IndexSet<&str> = record.param_names().collect();

        kinds.extend(
            declared
                .difference(&documented)
                .map(|name| DiagnosticKind::MissingParameter((*name).to_string())),
        );
        kinds.extend(
            documented
                .difference(&declared)
                .map(|name| DiagnosticKind::ExtraParameter((*name).to_string())),
        );
    }

    if !signature.returns_void() && record.returns.is_none() {
        kinds.push(DiagnosticKind::MissingReturnDocumentation);
    }

    kinds
}

/// Positional equality. Unnamed declared parameters match any name; direction
/// and type only count when both sides state them.
fn same_parameter(declared: &ParameterDescriptor, documented: &ParameterDescriptor) -> bool {
    if !declared.name.is_empty() && declared.name != documented.name {
        return false;
    }
    if let (Some(a), Some(b)) = (declared.direction, documented.direction)
        && a != b
    {
        return false;
    }
    if let (Some(a), Some(b)) = (&declared.typename, &documented.typename)
        && normalize_type(a) != normalize_type(b)
    {
        return false;
    }
    true
}

fn normalize_type(spelling: &str) -> String {
    spelling.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate every binding, in declaration order.
#[must_use]
pub fn validate_bindings(bindings: &[Binding]) -> Vec<Diagnostic> {
    bindings
        .iter()
        .flat_map(|binding| {
            validate(&binding.signature, binding.record.as_ref())
                .into_iter()
                .map(|kind| Diagnostic::new(kind, binding.signature.clone()))
        })
        .collect()
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
