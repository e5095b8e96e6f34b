use mirrorgen_syntax::{ChanDir, TypeExpr};

use crate::error::ResolveError;
use crate::resolve::resolve;

fn named(name: &str) -> TypeExpr {
    TypeExpr::Named(name.to_string())
}

#[test]
fn plain_and_pointer() {
    insta::assert_snapshot!(resolve(&named("Widget")).unwrap(), @"Widget");
    insta::assert_snapshot!(
        resolve(&TypeExpr::Pointer(Box::new(named("Widget")))).unwrap(),
        @"*Widget"
    );
}

#[test]
fn qualified() {
    let ty = TypeExpr::Qualified {
        pkg: "bytes".to_string(),
        name: "Buffer".to_string(),
    };
    insta::assert_snapshot!(resolve(&ty).unwrap(), @"bytes.Buffer");
}

#[test]
fn empty_interface() {
    let ty = TypeExpr::Interface { has_methods: false };
    insta::assert_snapshot!(resolve(&ty).unwrap(), @"interface{}");
}

#[test]
fn interface_with_methods_fails() {
    let ty = TypeExpr::Interface { has_methods: true };
    assert_eq!(resolve(&ty), Err(ResolveError::AnonymousInterface));
}

#[test]
fn map_spells_value_twice() {
    let ty = TypeExpr::Map {
        value: Box::new(named("int")),
    };
    insta::assert_snapshot!(resolve(&ty).unwrap(), @"map[ int ]int");
}

#[test]
fn slice_and_array() {
    let slice = TypeExpr::Array {
        len: None,
        elem: Box::new(named("byte")),
    };
    insta::assert_snapshot!(resolve(&slice).unwrap(), @"[]byte");

    let array = TypeExpr::Array {
        len: Some(Box::new(named("4"))),
        elem: Box::new(named("byte")),
    };
    insta::assert_snapshot!(resolve(&array).unwrap(), @"[4]byte");
}

#[test]
fn channel_directions() {
    let send = TypeExpr::Chan {
        dir: ChanDir::Send,
        elem: Box::new(named("int")),
    };
    insta::assert_snapshot!(resolve(&send).unwrap(), @"<-int");

    let recv = TypeExpr::Chan {
        dir: ChanDir::Recv,
        elem: Box::new(named("int")),
    };
    insta::assert_snapshot!(resolve(&recv).unwrap(), @"int<-");

    // Bidirectional channels drop the marker entirely.
    let both = TypeExpr::Chan {
        dir: ChanDir::Both,
        elem: Box::new(named("int")),
    };
    insta::assert_snapshot!(resolve(&both).unwrap(), @"int");
}

#[test]
fn variadic() {
    let ty = TypeExpr::Variadic(Box::new(named("string")));
    insta::assert_snapshot!(resolve(&ty).unwrap(), @"...string");
}

#[test]
fn nested_composition() {
    // map[ []*pkg.T ][]*pkg.T
    let ty = TypeExpr::Map {
        value: Box::new(TypeExpr::Array {
            len: None,
            elem: Box::new(TypeExpr::Pointer(Box::new(TypeExpr::Qualified {
                pkg: "pkg".to_string(),
                name: "T".to_string(),
            }))),
        }),
    };
    insta::assert_snapshot!(resolve(&ty).unwrap(), @"map[ []*pkg.T ][]*pkg.T");
}

#[test]
fn unsupported_carries_spelling() {
    let ty = TypeExpr::Unsupported("func(int) bool".to_string());
    assert_eq!(
        resolve(&ty),
        Err(ResolveError::Unrecognized("func(int) bool".to_string()))
    );
}

#[test]
fn resolution_is_deterministic() {
    let ty = TypeExpr::Pointer(Box::new(TypeExpr::Map {
        value: Box::new(named("string")),
    }));
    assert_eq!(resolve(&ty).unwrap(), resolve(&ty).unwrap());
}
