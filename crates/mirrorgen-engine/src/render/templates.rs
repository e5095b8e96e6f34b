//! The template set shared by the render strategies.
//!
//! Templates are registered once when the generator is constructed; a
//! malformed template is a construction-time failure, never a per-render
//! one. Escaping is disabled so type spellings like `*T`, `<-chan`, and
//! `interface{}` pass through untouched.

use handlebars::{Handlebars, no_escape};
use serde::Serialize;

pub(crate) const WRAPPER_TYPE: &str = "wrapper-type";
pub(crate) const WRAPPER_METHOD: &str = "wrapper-method";
pub(crate) const WRAPPER_FUNC: &str = "wrapper-func";
pub(crate) const INTERFACE: &str = "interface";

const WRAPPER_TYPE_TMPL: &str = "\ntype {{wrapper_name}} struct {\n    {{inner_name}} {{pkg_name}}.{{type_name}}\n}\n";

const WRAPPER_METHOD_TMPL: &str = "\nfunc ({{inner_name}} {{wrapper_name}}) {{meth_name}} ({{input}}){{#if output}} ({{output}}){{/if}} {\n    {{#if output}}return {{/if}}{{inner_name}}.{{inner_name}}.{{meth_name}}({{args}})\n}\n";

const WRAPPER_FUNC_TMPL: &str = "\nfunc {{func_name}} ({{input}}){{#if output}} ({{output}}){{/if}} {\n    {{#if output}}return {{/if}}{{pkg_name}}.{{func_name}}({{args}})\n}\n";

const INTERFACE_TMPL: &str = "\ntype {{type_name}}er interface {\n{{#each meths}}    {{name}} ({{input}}){{#if output}} ({{output}}){{/if}}\n{{/each}}}\n";

/// Compiled templates, owned by the generator and lent to each renderer.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_template_string(WRAPPER_TYPE, WRAPPER_TYPE_TMPL)?;
        registry.register_template_string(WRAPPER_METHOD, WRAPPER_METHOD_TMPL)?;
        registry.register_template_string(WRAPPER_FUNC, WRAPPER_FUNC_TMPL)?;
        registry.register_template_string(INTERFACE, INTERFACE_TMPL)?;
        Ok(Templates { registry })
    }

    pub(crate) fn render<T: Serialize>(
        &self,
        name: &str,
        data: &T,
    ) -> Result<String, handlebars::RenderError> {
        self.registry.render(name, data)
    }
}
