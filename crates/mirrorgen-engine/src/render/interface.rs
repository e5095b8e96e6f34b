//! The interface strategy: one behavioral interface per registered type
//! that has at least one registered method.

use std::io::Write;

use serde::Serialize;

use crate::error::RenderError;
use crate::registry::Registry;
use crate::render::Render;
use crate::render::signature::spell_fields;
use crate::render::templates::{self, Templates};

pub struct InterfaceRenderer<'a> {
    templates: &'a Templates,
}

#[derive(Serialize)]
struct InterfaceBlock<'a> {
    type_name: &'a str,
    meths: Vec<MethodLine<'a>>,
}

#[derive(Serialize)]
struct MethodLine<'a> {
    name: &'a str,
    input: String,
    output: String,
}

impl<'a> InterfaceRenderer<'a> {
    pub fn new(templates: &'a Templates) -> Self {
        InterfaceRenderer { templates }
    }
}

impl Render for InterfaceRenderer<'_> {
    fn render(&self, registry: &Registry, out: &mut dyn Write) -> Result<(), RenderError> {
        for name in registry.types().keys() {
            // Types with no registered methods emit nothing, not an empty
            // interface.
            let Some(methods) = registry.methods_of(name) else {
                continue;
            };
            if methods.is_empty() {
                continue;
            }

            let mut meths = Vec::with_capacity(methods.len());
            for method in methods.values() {
                meths.push(MethodLine {
                    name: &method.name,
                    input: spell_fields(&method.sig.params)?,
                    output: spell_fields(&method.sig.results)?,
                });
            }

            let block = self.templates.render(
                templates::INTERFACE,
                &InterfaceBlock {
                    type_name: name,
                    meths,
                },
            )?;
            out.write_all(block.as_bytes())?;
        }
        Ok(())
    }
}
