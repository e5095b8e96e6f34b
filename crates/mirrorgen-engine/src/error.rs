//! Error taxonomy, one enum per phase.

use std::io;
use std::path::PathBuf;

/// Failures establishing a generator: bad arguments, missing search
/// configuration, or a malformed template (a construction-time condition).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("package path cannot be empty")]
    EmptyPackagePath,

    #[error("GOPATH environment variable is not set")]
    SearchPathUnset,

    #[error("template registration failed")]
    Template(#[from] handlebars::TemplateError),
}

/// Failures while walking and registering a package's declaration surface.
///
/// A nonexistent search root is not an error; roots are probed speculatively
/// and missing ones are skipped.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to walk source tree")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: mirrorgen_syntax::Error,
    },

    #[error("method {method} has no receiver parameter")]
    MissingReceiver { method: String },

    #[error("method {method} receiver is not a plain or pointer-to-named type")]
    UnresolvedReceiver { method: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Failures while spelling a type expression.
///
/// Both cases are fatal for the operation that hit them; emitting code for a
/// shape the generator does not understand would produce wrong output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("anonymous interface with methods cannot be spelled as a type name")]
    AnonymousInterface,

    #[error("unrecognized type expression: {0}")]
    Unrecognized(String),
}

/// Failures while rendering the registry to an output sink. Output already
/// written before the failure is not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render strategy not supported: {0}")]
    UnknownStrategy(String),

    #[error("wrapper name {name} is produced by both {first} and {second}")]
    WrapperNameClash {
        name: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("template rendering failed")]
    Template(#[from] handlebars::RenderError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Any failure from the three generator phases, for callers that fold them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
