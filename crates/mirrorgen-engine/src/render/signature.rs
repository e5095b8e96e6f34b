//! Signature spelling helpers shared by the render strategies.

use mirrorgen_syntax::Param;

use crate::error::ResolveError;
use crate::resolve::resolve;

/// Spell a parameter or result list: each group as `names type`, groups
/// joined with `, `. Unnamed groups contribute just the type spelling.
pub(crate) fn spell_fields(params: &[Param]) -> Result<String, ResolveError> {
    let mut parts = Vec::with_capacity(params.len());
    for param in params {
        let ty = resolve(&param.ty)?;
        if param.names.is_empty() {
            parts.push(ty);
        } else {
            parts.push(format!("{} {}", param.names.join(", "), ty));
        }
    }
    Ok(parts.join(", "))
}

/// The declared parameter names, in order, for a forwarding call's argument
/// list. Unnamed parameters contribute nothing.
pub(crate) fn argument_names(params: &[Param]) -> String {
    params
        .iter()
        .flat_map(|param| param.names.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(", ")
}
