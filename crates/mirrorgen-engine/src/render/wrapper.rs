//! The wrapper strategy: a forwarding facade per registered type plus one
//! forwarding function per registered free function.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::RenderError;
use crate::registry::Registry;
use crate::render::Render;
use crate::render::signature::{argument_names, spell_fields};
use crate::render::templates::{self, Templates};

pub struct WrapperRenderer<'a> {
    pkg_name: &'a str,
    templates: &'a Templates,
}

#[derive(Serialize)]
struct TypeBlock<'a> {
    wrapper_name: &'a str,
    inner_name: &'a str,
    pkg_name: &'a str,
    type_name: &'a str,
}

#[derive(Serialize)]
struct MethodBlock<'a> {
    wrapper_name: &'a str,
    inner_name: &'a str,
    meth_name: &'a str,
    input: String,
    output: String,
    args: String,
}

#[derive(Serialize)]
struct FuncBlock<'a> {
    func_name: &'a str,
    pkg_name: &'a str,
    input: String,
    output: String,
    args: String,
}

impl<'a> WrapperRenderer<'a> {
    pub fn new(pkg_name: &'a str, templates: &'a Templates) -> Self {
        WrapperRenderer { pkg_name, templates }
    }
}

impl Render for WrapperRenderer<'_> {
    fn render(&self, registry: &Registry, out: &mut dyn Write) -> Result<(), RenderError> {
        // Wrapper names only differ from the originals in their first
        // character, so two type names differing only there would collide.
        // Checked up front, before anything is written.
        let mut wrapper_names: BTreeMap<String, &str> = BTreeMap::new();
        for name in registry.types().keys() {
            let wrapper = lower_first(name);
            if let Some(first) = wrapper_names.insert(wrapper.clone(), name) {
                return Err(RenderError::WrapperNameClash {
                    name: wrapper,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }

        for name in registry.types().keys() {
            let wrapper_name = lower_first(name);
            let inner_name = inner_name(name);

            let block = self.templates.render(
                templates::WRAPPER_TYPE,
                &TypeBlock {
                    wrapper_name: &wrapper_name,
                    inner_name: &inner_name,
                    pkg_name: self.pkg_name,
                    type_name: name,
                },
            )?;
            out.write_all(block.as_bytes())?;

            let Some(methods) = registry.methods_of(name) else {
                continue;
            };
            for method in methods.values() {
                let block = self.templates.render(
                    templates::WRAPPER_METHOD,
                    &MethodBlock {
                        wrapper_name: &wrapper_name,
                        inner_name: &inner_name,
                        meth_name: &method.name,
                        input: spell_fields(&method.sig.params)?,
                        output: spell_fields(&method.sig.results)?,
                        args: argument_names(&method.sig.params),
                    },
                )?;
                out.write_all(block.as_bytes())?;
            }
        }

        for func in registry.functions().values() {
            let block = self.templates.render(
                templates::WRAPPER_FUNC,
                &FuncBlock {
                    func_name: &func.name,
                    pkg_name: self.pkg_name,
                    input: spell_fields(&func.sig.params)?,
                    output: spell_fields(&func.sig.results)?,
                    args: argument_names(&func.sig.params),
                },
            )?;
            out.write_all(block.as_bytes())?;
        }

        Ok(())
    }
}

/// `Widget` -> `widget`: the wrapper type's name.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Widget` -> `w`: the embedded field and receiver name.
fn inner_name(name: &str) -> String {
    name.chars()
        .next()
        .map(|first| first.to_lowercase().to_string())
        .unwrap_or_default()
}
