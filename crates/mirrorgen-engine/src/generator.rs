//! The generator facade: owns the registry, its lock, and the templates.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{ConfigError, RenderError, ScanError};
use crate::registry::Registry;
use crate::render::{self, Templates};
use crate::scan::{ScanMode, Scanner};

/// Scans one Go package's declaration surface and renders derived source.
///
/// Construction establishes the search roots and compiles the template set;
/// `scan` fills the registry; `render` reads it under the registry lock, so
/// a render can never interleave with a concurrent scan.
pub struct Generator {
    mode: ScanMode,
    pkg_name: String,
    roots: Vec<PathBuf>,
    templates: Templates,
    registry: Mutex<Registry>,
}

impl Generator {
    /// Build a generator whose search roots come from `GOPATH`: each entry
    /// contributes `<entry>/src/<pkg_path>` as a candidate root.
    pub fn new(pkg_path: &str, mode: ScanMode) -> Result<Self, ConfigError> {
        let pkg_path = pkg_path.trim_end_matches('/');
        if pkg_path.is_empty() {
            return Err(ConfigError::EmptyPackagePath);
        }
        let gopath = env::var_os("GOPATH").ok_or(ConfigError::SearchPathUnset)?;
        let roots = env::split_paths(&gopath)
            .map(|entry| entry.join("src").join(pkg_path))
            .collect();
        Self::with_roots(pkg_path, mode, roots)
    }

    /// Build a generator scanning the given roots directly, bypassing the
    /// environment.
    pub fn with_roots(
        pkg_path: &str,
        mode: ScanMode,
        roots: Vec<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let pkg_path = pkg_path.trim_end_matches('/');
        if pkg_path.is_empty() {
            return Err(ConfigError::EmptyPackagePath);
        }
        let pkg_name = match pkg_path.rsplit_once('/') {
            Some((_, tail)) => tail,
            None => pkg_path,
        };
        Ok(Generator {
            mode,
            pkg_name: pkg_name.to_string(),
            roots,
            templates: Templates::new()?,
            registry: Mutex::new(Registry::default()),
        })
    }

    /// The package's short name, used to qualify references back into it.
    pub fn pkg_name(&self) -> &str {
        &self.pkg_name
    }

    /// Walk every configured root and register its declaration surface.
    pub fn scan(&self) -> Result<(), ScanError> {
        Scanner::new(&self.registry, self.mode).scan(&self.roots)
    }

    /// Render the registry with the named strategy (`wrapper` or
    /// `interface`). An unknown name fails before anything is written.
    pub fn render(&self, strategy: &str, out: &mut dyn Write) -> Result<(), RenderError> {
        let registry = self.registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let renderer = render::strategy(strategy, &self.pkg_name, &self.templates)?;
        renderer.render(&registry, out)
    }
}
