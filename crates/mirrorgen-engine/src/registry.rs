//! The declaration registry: everything a scan discovers, keyed by name.
//!
//! Sorted-key maps give renderers a deterministic iteration order, so the
//! same source set always renders byte-identical output. Inserts overwrite
//! silently; the last registration of a name wins.

use std::collections::BTreeMap;

use mirrorgen_syntax::Signature;

/// A registered type declaration. Only the declared name survives to
/// emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    pub name: String,
}

/// A registered method: owning type name (receiver type, pointer-stripped),
/// method name, and signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub type_name: String,
    pub name: String,
    pub sig: Signature,
}

/// A registered free function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncRecord {
    pub name: String,
    pub sig: Signature,
}

/// Store of discovered declarations.
///
/// A `methods` entry's type name may or may not also appear in `types`;
/// methods on types declared outside the scanned set are retained
/// independently, and readers must not assume the paired type entry exists.
#[derive(Debug, Default)]
pub struct Registry {
    types: BTreeMap<String, TypeRecord>,
    methods: BTreeMap<String, BTreeMap<String, MethodRecord>>,
    functions: BTreeMap<String, FuncRecord>,
}

impl Registry {
    pub(crate) fn insert_type(&mut self, record: TypeRecord) {
        self.types.insert(record.name.clone(), record);
    }

    pub(crate) fn insert_method(&mut self, record: MethodRecord) {
        self.methods
            .entry(record.type_name.clone())
            .or_default()
            .insert(record.name.clone(), record);
    }

    pub(crate) fn insert_function(&mut self, record: FuncRecord) {
        self.functions.insert(record.name.clone(), record);
    }

    pub fn types(&self) -> &BTreeMap<String, TypeRecord> {
        &self.types
    }

    /// Methods registered under a type name, or `None` when the type has no
    /// registered methods at all.
    pub fn methods_of(&self, type_name: &str) -> Option<&BTreeMap<String, MethodRecord>> {
        self.methods.get(type_name)
    }

    pub fn functions(&self) -> &BTreeMap<String, FuncRecord> {
        &self.functions
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.methods.is_empty() && self.functions.is_empty()
    }
}
