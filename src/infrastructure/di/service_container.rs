//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ConnectionForm, DomainSelectionController};
use crate::application::{ApplicationError, Localizer};
use crate::cli::theme::Palette;
use crate::config::Settings;
use crate::domain::DomainCatalog;
use crate::infrastructure::error::InfraResult;
use crate::infrastructure::host::TomlConfigHost;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Domain forest and default selection
    pub catalog: Arc<DomainCatalog>,

    /// Label lookup for the effective locale
    pub localizer: Localizer,

    /// Colors for the configured theme
    pub palette: Palette,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> InfraResult<Self> {
        let catalog = DomainCatalog::builtin().map_err(ApplicationError::from)?;
        let localizer = Localizer::new(settings.effective_locale());
        let palette = Palette::from_mode(settings.theme);

        Ok(Self {
            settings: Arc::new(settings),
            fs,
            catalog: Arc::new(catalog),
            localizer,
            palette,
        })
    }

    /// Open the host configuration named by the settings.
    pub fn open_host(&self) -> InfraResult<TomlConfigHost> {
        TomlConfigHost::load(self.fs.clone(), &self.settings.native_config)
    }

    /// Fresh controller: all branches expanded.
    pub fn selection_controller(&self) -> DomainSelectionController {
        DomainSelectionController::new(self.catalog.clone())
    }

    pub fn connection_form(&self) -> ConnectionForm {
        ConnectionForm::new()
    }
}
