//! Render strategies over a populated registry.
//!
//! Both strategies read the registry through its sorted maps and spell types
//! with the resolver; neither mutates anything. Strategy selection is by
//! name from a fixed set, failing before any output is written.

mod interface;
mod signature;
mod templates;
mod wrapper;

#[cfg(test)]
mod interface_tests;
#[cfg(test)]
mod wrapper_tests;

use std::io::Write;

pub use interface::InterfaceRenderer;
pub use templates::Templates;
pub use wrapper::WrapperRenderer;

use crate::error::RenderError;
use crate::registry::Registry;

/// A rendering strategy consuming a read-only registry view.
pub trait Render {
    fn render(&self, registry: &Registry, out: &mut dyn Write) -> Result<(), RenderError>;
}

/// Select a strategy by name. The set is fixed: `wrapper` and `interface`.
pub fn strategy<'a>(
    name: &str,
    pkg_name: &'a str,
    templates: &'a Templates,
) -> Result<Box<dyn Render + 'a>, RenderError> {
    match name {
        "wrapper" => Ok(Box::new(WrapperRenderer::new(pkg_name, templates))),
        "interface" => Ok(Box::new(InterfaceRenderer::new(templates))),
        other => Err(RenderError::UnknownStrategy(other.to_string())),
    }
}
