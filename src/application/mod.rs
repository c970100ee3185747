//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on the host boundary traits.

pub mod error;
pub mod i18n;
pub mod native_config;
pub mod services;
pub mod theme;

pub use error::{ApplicationError, ApplicationResult};
pub use i18n::{Locale, Localizer};
pub use native_config::{AttrValue, ConfigAttribute, NativeConfig};
pub use theme::ThemeMode;
