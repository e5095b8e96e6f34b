use mirrorgen_syntax::{Param, Signature, TypeExpr};

use crate::error::RenderError;
use crate::registry::{FuncRecord, MethodRecord, Registry, TypeRecord};
use crate::render::templates::Templates;
use crate::render::{Render, WrapperRenderer};

fn named(name: &str) -> TypeExpr {
    TypeExpr::Named(name.to_string())
}

fn param(names: &[&str], ty: TypeExpr) -> Param {
    Param {
        names: names.iter().map(|n| n.to_string()).collect(),
        ty,
    }
}

fn render(pkg_name: &str, registry: &Registry) -> Result<String, RenderError> {
    let templates = Templates::new().unwrap();
    let mut out = Vec::new();
    WrapperRenderer::new(pkg_name, &templates).render(registry, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn type_with_method_forwards_through_the_embedded_field() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Widget".to_string(),
    });
    registry.insert_method(MethodRecord {
        type_name: "Widget".to_string(),
        name: "Area".to_string(),
        sig: Signature {
            params: Vec::new(),
            results: vec![param(&[], named("int"))],
        },
    });

    let out = render("widget", &registry).unwrap();
    assert_eq!(
        out,
        "\ntype widget struct {\n    w widget.Widget\n}\n\
         \nfunc (w widget) Area () (int) {\n    return w.w.Area()\n}\n"
    );
}

#[test]
fn method_without_results_omits_return() {
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

    let out = render("stack", &registry).unwrap();
    assert_eq!(
        out,
        "\ntype stack struct {\n    s stack.Stack\n}\n\
         \nfunc (s stack) Push (v int) {\n    s.s.Push(v)\n}\n"
    );
}

#[test]
fn free_function_only() {
    // A private type filtered out during a public scan leaves only the
    // forwarding function; no type block is emitted.
    let mut registry = Registry::default();
    registry.insert_function(FuncRecord {
        name: "New".to_string(),
        sig: Signature {
            params: Vec::new(),
            results: vec![param(&[], TypeExpr::Pointer(Box::new(named("cache"))))],
        },
    });

    let out = render("cache", &registry).unwrap();
    assert_eq!(out, "\nfunc New () (*cache) {\n    return cache.New()\n}\n");
}

#[test]
fn functions_follow_all_types_in_sorted_order() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Zebra".to_string(),
    });
    registry.insert_type(TypeRecord {
        name: "Apple".to_string(),
    });
    registry.insert_function(FuncRecord {
        name: "Use".to_string(),
        sig: Signature::default(),
    });

    let out = render("zoo", &registry).unwrap();
    let apple = out.find("type apple struct").unwrap();
    let zebra = out.find("type zebra struct").unwrap();
    let func = out.find("func Use").unwrap();
    assert!(apple < zebra);
    assert!(zebra < func);
}

#[test]
fn methods_on_unregistered_types_are_not_emitted() {
    let mut registry = Registry::default();
    registry.insert_method(MethodRecord {
        type_name: "Elsewhere".to_string(),
        name: "Touch".to_string(),
        sig: Signature::default(),
    });

    let out = render("pkg", &registry).unwrap();
    assert_eq!(out, "");
}

#[test]
fn parameter_names_and_types_are_preserved() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Mixer".to_string(),
    });
    registry.insert_method(MethodRecord {
        type_name: "Mixer".to_string(),
        name: "Mix".to_string(),
        sig: Signature {
            params: vec![
                param(&["a", "b"], named("int")),
                param(
                    &["rest"],
                    TypeExpr::Variadic(Box::new(named("string"))),
                ),
            ],
            results: vec![param(&[], named("int")), param(&[], named("error"))],
        },
    });

    let out = render("mix", &registry).unwrap();
    assert!(out.contains("func (m mixer) Mix (a, b int, rest ...string) (int, error) {"));
    assert!(out.contains("return m.m.Mix(a, b, rest)"));
}

#[test]
fn wrapper_name_clash_is_fatal_before_output() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Widget".to_string(),
    });
    registry.insert_type(TypeRecord {
        name: "widget".to_string(),
    });

    let err = render("pkg", &registry).unwrap_err();
    match err {
        RenderError::WrapperNameClash { name, first, second } => {
            assert_eq!(name, "widget");
            assert_eq!(first, "Widget");
            assert_eq!(second, "widget");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolver_failure_in_a_signature_aborts() {
    let mut registry = Registry::default();
    registry.insert_type(TypeRecord {
        name: "Holder".to_string(),
    });
    registry.insert_method(MethodRecord {
        type_name: "Holder".to_string(),
        name: "Apply".to_string(),
        sig: Signature {
            params: vec![param(&["fn"], TypeExpr::Unsupported("func()".to_string()))],
            results: Vec::new(),
        },
    });

    let err = render("pkg", &registry).unwrap_err();
    assert!(matches!(err, RenderError::Resolve(_)));
}
