//! I/O boundary traits for testability
//!
//! These traits abstract the host configuration accessors and the filesystem,
//! allowing services to be tested with in-memory implementations.

use std::io;
use std::path::Path;

use crate::application::native_config::{AttrValue, ConfigAttribute, NativeConfig};

/// Accessor pair onto the configuration object owned by the host application.
///
/// Services never cache what `native` returns; they re-read it for every
/// operation and request changes through `set`, one attribute at a time.
pub trait ConfigHost {
    /// Read accessor: the host's current configuration.
    fn native(&self) -> &NativeConfig;

    /// Write accessor: replace a single attribute.
    fn set(&mut self, attr: ConfigAttribute, value: AttrValue);
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}
