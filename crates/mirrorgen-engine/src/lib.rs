//! Declaration-surface code generation for Go packages.
//!
//! The engine scans a package's declaration surface into a registry and
//! re-emits derived source through pluggable render strategies:
//! - `registry` - the declaration store (types, methods per type, functions)
//! - `scan` - source-tree walking, parsing, and registration
//! - `resolve` - canonical textual spelling of type expressions
//! - `render` - the `wrapper` and `interface` strategies
//! - `generator` - facade owning the registry, its lock, and the templates
//!
//! Scanning writes the registry under a per-insert lock; rendering takes the
//! lock for the whole call and reads only. A registry is never mutated after
//! its scan phase except by another scan (last writer wins per name).

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod generator;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod scan;

#[cfg(test)]
mod resolve_tests;

pub use error::{ConfigError, Error, RenderError, ResolveError, ScanError};
pub use generator::Generator;
pub use registry::{FuncRecord, MethodRecord, Registry, TypeRecord};
pub use scan::ScanMode;
