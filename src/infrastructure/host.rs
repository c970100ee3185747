//! Host implementations of the configuration accessors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::native_config::{AttrValue, ConfigAttribute, NativeConfig};
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{ConfigHost, FileSystem};

/// Host keeping the configuration in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfigHost {
    config: NativeConfig,
    writes: Vec<ConfigAttribute>,
}

impl MemoryConfigHost {
    pub fn new(config: NativeConfig) -> Self {
        Self {
            config,
            writes: Vec::new(),
        }
    }

    /// Attributes written so far, in call order.
    pub fn writes(&self) -> &[ConfigAttribute] {
        &self.writes
    }
}

impl ConfigHost for MemoryConfigHost {
    fn native(&self) -> &NativeConfig {
        &self.config
    }

    fn set(&mut self, attr: ConfigAttribute, value: AttrValue) {
        self.writes.push(attr);
        self.config.apply(attr, value);
    }
}

/// Host persisting the configuration as a TOML file.
///
/// Writes go to memory; `save` persists them when anything changed.
pub struct TomlConfigHost {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    config: NativeConfig,
    dirty: bool,
}

impl TomlConfigHost {
    /// Load the file at `path`; a missing file yields an empty configuration.
    #[instrument(level = "debug", skip(fs))]
    pub fn load(fs: Arc<dyn FileSystem>, path: &Path) -> InfraResult<Self> {
        let config = if fs.exists(path) {
            let content = fs
                .read_to_string(path)
                .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;
            toml::from_str(&content).map_err(|e| InfraError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            debug!("no native config at {}, starting empty", path.display());
            NativeConfig::default()
        };

        Ok(Self {
            fs,
            path: path.to_path_buf(),
            config,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist pending writes. Returns whether the file was written.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn save(&mut self) -> InfraResult<bool> {
        if !self.dirty {
            return Ok(false);
        }
        let content = toml::to_string_pretty(&self.config).map_err(|e| InfraError::Serialize {
            message: e.to_string(),
        })?;
        self.fs
            .ensure_parent(&self.path)
            .map_err(|e| InfraError::io(format!("create parent of {}", self.path.display()), e))?;
        self.fs
            .write(&self.path, &content)
            .map_err(|e| InfraError::io(format!("write {}", self.path.display()), e))?;
        self.dirty = false;
        info!("saved native config to {}", self.path.display());
        Ok(true)
    }
}

impl ConfigHost for TomlConfigHost {
    fn native(&self) -> &NativeConfig {
        &self.config
    }

    fn set(&mut self, attr: ConfigAttribute, value: AttrValue) {
        if attr.is_sensitive() {
            debug!("set {} (value hidden)", attr);
        } else {
            debug!("set {} = {:?}", attr, value);
        }
        if self.config.apply(attr, value) {
            self.dirty = true;
        }
    }
}
