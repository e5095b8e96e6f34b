use mirrorgen_syntax::{Param, Signature, TypeExpr};

use crate::error::RenderError;
use crate::registry::{MethodRecord, Registry, TypeRecord};
use crate::render::templates::Templates;
use crate::render::{InterfaceRenderer, Render};

fn named(name: &str) -> TypeExpr {
    TypeExpr::Named(name.to_string())
}

fn param(names: &[&str], ty: TypeExpr) -> Param {
    Param {
        names: names.iter().map(|n| n.to_string()).collect(),
        ty,
    }
}

fn render(registry: &Registry) -> Result<String, RenderError> {
    let templates = Templates::new().unwrap();
    let mut out = Vec::new();
    InterfaceRenderer::new(&templates).render(registry, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn interface_lists_every_method_signature() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Stack".to_string(),
    });
    registry.insert_method(MethodRecord {
        type_name: "Stack".to_string(),
        name: "Push".to_string(),
        sig: Signature {
            params: vec![param(&["v"], named("int"))],
            results: Vec::new(),
        },
    });
    registry.insert_method(MethodRecord {
        type_name: "Stack".to_string(),
        name: "Pop".to_string(),
        sig: Signature {
            params: Vec::new(),
            results: vec![param(&[], named("int"))],
        },
    });

    let out = render(&registry).unwrap();
    assert_eq!(
        out,
        "\ntype Stacker interface {\n    Pop () (int)\n    Push (v int)\n}\n"
    );
}

#[test]
fn type_without_methods_emits_nothing() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Marker".to_string(),
    });

    assert_eq!(render(&registry).unwrap(), "");
}

#[test]
fn methods_without_a_registered_type_are_ignored() {
    let mut registry = Registry::default();
    registry.insert_method(MethodRecord {
        type_name: "Elsewhere".to_string(),
        name: "Touch".to_string(),
        sig: Signature::default(),
    });

    assert_eq!(render(&registry).unwrap(), "");
}

#[test]
fn one_interface_per_type_with_methods() {
    let mut registry = Registry::default();
    for name in ["Reader", "Writer", "Marker"] {
        registry.insert_type(TypeRecord {
            name: name.to_string(),
        });
    }
    registry.insert_method(MethodRecord {
        type_name: "Reader".to_string(),
        name: "Read".to_string(),
        sig: Signature::default(),
    });
    registry.insert_method(MethodRecord {
        type_name: "Writer".to_string(),
        name: "Write".to_string(),
        sig: Signature::default(),
    });

    let out = render(&registry).unwrap();
    assert_eq!(out.matches("interface {").count(), 2);
    assert!(out.contains("type Readerer interface {"));
    assert!(out.contains("type Writerer interface {"));
    assert!(!out.contains("Markerer"));
}

#[test]
fn resolver_failure_aborts() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Holder".to_string(),
    });
    registry.insert_method(MethodRecord {
        type_name: "Holder".to_string(),
        name: "Apply".to_string(),
        sig: Signature {
            params: vec![param(&["v"], TypeExpr::Interface { has_methods: true })],
            results: Vec::new(),
        },
    });

    assert!(matches!(render(&registry), Err(RenderError::Resolve(_))));
}
