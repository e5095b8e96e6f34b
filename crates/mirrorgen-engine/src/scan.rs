//! Source-tree walking and declaration registration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use mirrorgen_syntax::{Decl, FuncDecl, TypeDecl, parse_file};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::registry::{FuncRecord, MethodRecord, Registry, TypeRecord};
use crate::resolve::resolve;

/// Which declarations the scanner registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Register every declaration.
    All,
    /// Register only names whose first character is upper-case. Applied
    /// independently to type, method, and function names; a method is
    /// filtered by its own name, not its owning type's.
    Public,
}

impl ScanMode {
    pub fn admits(self, name: &str) -> bool {
        match self {
            ScanMode::All => true,
            ScanMode::Public => name.chars().next().is_some_and(char::is_uppercase),
        }
    }
}

/// Walks source roots and fills a registry through per-insert locking.
///
/// The scanner borrows the registry's mutex rather than the registry itself:
/// each registration takes the lock for one insert, so parallel file scans
/// would only contend on individual map operations.
pub struct Scanner<'a> {
    registry: &'a Mutex<Registry>,
    mode: ScanMode,
}

impl<'a> Scanner<'a> {
    pub fn new(registry: &'a Mutex<Registry>, mode: ScanMode) -> Self {
        Scanner { registry, mode }
    }

    /// Scan every existing root. Roots that do not exist are skipped
    /// silently; they are probed speculatively from the search path.
    pub fn scan(&self, roots: &[PathBuf]) -> Result<(), ScanError> {
        for root in roots {
            if !root.exists() {
                continue;
            }
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy();
                if !name.ends_with(".go") || name.ends_with("_test.go") {
                    continue;
                }
                self.scan_source_file(entry.path())?;
            }
        }
        Ok(())
    }

    fn scan_source_file(&self, path: &Path) -> Result<(), ScanError> {
        let src = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = parse_file(&src).map_err(|source| ScanError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        for decl in file.decls {
            match decl {
                Decl::Type(decl) => self.register_type(decl),
                Decl::Func(decl) if decl.receiver.is_some() => self.register_method(decl)?,
                Decl::Func(decl) => self.register_function(decl),
            }
        }
        Ok(())
    }

    fn register_type(&self, decl: TypeDecl) {
        if !self.mode.admits(&decl.name) {
            return;
        }
        self.lock().insert_type(TypeRecord { name: decl.name });
    }

    fn register_method(&self, decl: FuncDecl) -> Result<(), ScanError> {
        if !self.mode.admits(&decl.name) {
            return Ok(());
        }
        let FuncDecl { name, receiver, sig } = decl;
        let receiver = receiver.unwrap_or_default();
        if receiver.is_empty() {
            return Err(ScanError::MissingReceiver { method: name });
        }

        let spelled = resolve(&receiver[0].ty)?;
        let base = spelled.strip_prefix('*').unwrap_or(&spelled);
        if base.is_empty() || !base.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(ScanError::UnresolvedReceiver { method: name });
        }

        self.lock().insert_method(MethodRecord {
            type_name: base.to_string(),
            name,
            sig,
        });
        Ok(())
    }

    fn register_function(&self, decl: FuncDecl) {
        if !self.mode.admits(&decl.name) {
            return;
        }
        self.lock().insert_function(FuncRecord {
            name: decl.name,
            sig: decl.sig,
        });
    }

    fn lock(&self) -> MutexGuard<'a, Registry> {
        self.registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
