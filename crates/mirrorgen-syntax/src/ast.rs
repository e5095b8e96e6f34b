//! Declaration and type-expression shapes.
//!
//! The surface modeled here is exactly what the downstream registry and
//! renderers consume: declared type names, method receivers, and signatures.
//! Everything below a declaration's header is opaque.

/// A type reference as it appears in a signature or receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Plain identifier: `Widget`, `int`.
    Named(String),
    /// `*T`.
    Pointer(Box<TypeExpr>),
    /// Selector form: `bytes.Buffer`.
    Qualified { pkg: String, name: String },
    /// `interface{}`. An anonymous interface with members is representable
    /// but cannot be spelled as a single type name; resolution rejects it.
    Interface { has_methods: bool },
    /// `map[K]V`. The key type is not distinguished from the value type.
    Map { value: Box<TypeExpr> },
    /// `[N]T` or `[]T`; constant lengths are carried as their source
    /// spelling in `Named`.
    Array {
        len: Option<Box<TypeExpr>>,
        elem: Box<TypeExpr>,
    },
    /// `chan T`, `chan<- T`, `<-chan T`.
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// `...T` in a final parameter.
    Variadic(Box<TypeExpr>),
    /// Shapes outside the supported surface (function types, inline structs,
    /// parenthesized types). Carries the source spelling; resolution fails.
    Unsupported(String),
}

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Send,
    Recv,
    Both,
}

/// One parameter group: zero or more names sharing a single type, as in
/// `a, b int`. An empty name list is an unnamed parameter or result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

/// Input and result parameter groups of a function or method.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub params: Vec<Param>,
    pub results: Vec<Param>,
}

/// A declared type; only the name survives to emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
}

/// A function or method declaration header.
///
/// `receiver` is `None` for a free function. `Some` with an empty list means
/// the source declared a method with no receiver parameter, which callers
/// treat as a fatal classification error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    pub receiver: Option<Vec<Param>>,
    pub sig: Signature,
}

/// A top-level declaration the scanner registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Type(TypeDecl),
    Func(FuncDecl),
}

/// The declaration surface of one parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package: String,
    pub decls: Vec<Decl>,
}
