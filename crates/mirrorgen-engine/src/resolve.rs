//! Canonical textual spelling of type expressions.

use mirrorgen_syntax::{ChanDir, TypeExpr};

use crate::error::ResolveError;

/// Spell a type expression the way the generated source must reference it.
///
/// Deterministic and total over the supported surface. Two quirks are kept on
/// purpose: a map spells its value type in both bracket positions, and a
/// bidirectional channel drops its direction marker entirely.
pub fn resolve(ty: &TypeExpr) -> Result<String, ResolveError> {
    match ty {
        TypeExpr::Named(name) => Ok(name.clone()),
        TypeExpr::Pointer(inner) => Ok(format!("*{}", resolve(inner)?)),
        TypeExpr::Qualified { pkg, name } => Ok(format!("{pkg}.{name}")),
        TypeExpr::Interface { has_methods: false } => Ok("interface{}".to_string()),
        TypeExpr::Interface { has_methods: true } => Err(ResolveError::AnonymousInterface),
        TypeExpr::Map { value } => {
            let value = resolve(value)?;
            Ok(format!("map[ {value} ]{value}"))
        }
        TypeExpr::Array { len, elem } => {
            let len = match len {
                Some(len) => resolve(len)?,
                None => String::new(),
            };
            Ok(format!("[{len}]{}", resolve(elem)?))
        }
        TypeExpr::Chan { dir, elem } => match dir {
            ChanDir::Send => Ok(format!("<-{}", resolve(elem)?)),
            ChanDir::Recv => Ok(format!("{}<-", resolve(elem)?)),
            ChanDir::Both => resolve(elem),
        },
        TypeExpr::Variadic(elem) => Ok(format!("...{}", resolve(elem)?)),
        TypeExpr::Unsupported(spelling) => Err(ResolveError::Unrecognized(spelling.clone())),
    }
}
