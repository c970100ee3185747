//! Localization of user-facing labels.
//!
//! English (en) and German (de). Keys are static; every key listed in
//! `FORM_KEYS` and every catalog label key resolves in each locale.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default)
    #[default]
    En,
    /// German
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Parse a code such as `de`, `de_DE.UTF-8` or `en-US`.
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(|c| c == '_' || c == '-' || c == '.')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Detect from `LC_ALL`, then `LANG`; English otherwise.
    pub fn detect() -> Self {
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| Self::from_code(&value))
            .unwrap_or_default()
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::De => DE,
        }
    }
}

/// Keys used by the form outside the domain catalog.
pub const FORM_KEYS: &[&str] = &[
    "section.connection",
    "section.polling",
    "section.domains",
    "field.base_url",
    "field.api_token",
    "field.allow_self_signed",
    "field.poll_interval",
    "value.not_set",
    "value.yes",
    "value.no",
    "hint.base_url_scheme",
    "hint.poll_interval",
    "status.saved",
    "status.unchanged",
];

/// Key → string lookup for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Exact lookup in this locale only.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.locale
            .table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }

    /// Localized text; falls back to English, then to the key itself.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        if let Some(text) = self.lookup(key) {
            return text;
        }
        if let Some(text) = Localizer::new(Locale::En).lookup(key) {
            debug!("missing {} translation for {}", self.locale.code(), key);
            return text;
        }
        debug!("unknown localization key: {}", key);
        key
    }
}

static EN: &[(&str, &str)] = &[
    ("section.connection", "Connection"),
    ("section.polling", "Polling"),
    ("section.domains", "Monitored domains"),
    ("field.base_url", "Server URL"),
    ("field.api_token", "API token"),
    ("field.allow_self_signed", "Accept self-signed certificates"),
    ("field.poll_interval", "Polling interval (seconds)"),
    ("value.not_set", "not set"),
    ("value.yes", "yes"),
    ("value.no", "no"),
    ("hint.base_url_scheme", "URL should start with http:// or https://"),
    ("hint.poll_interval", "minimum 10 seconds, step 5"),
    ("status.saved", "Configuration saved"),
    ("status.unchanged", "Nothing to save"),
    ("domain.server", "Server"),
    ("domain.server.desc", "General information about the host"),
    ("domain.server.info", "System information"),
    ("domain.server.info.desc", "OS, kernel, uptime and hardware"),
    ("domain.server.metrics", "CPU and memory"),
    ("domain.server.metrics.desc", "Load, CPU usage and memory usage"),
    ("domain.server.network", "Network interfaces"),
    ("domain.storage", "Storage"),
    ("domain.storage.desc", "Disk array and shares"),
    ("domain.storage.array", "Array status"),
    ("domain.storage.array.desc", "State and capacity of the disk array"),
    ("domain.storage.disks", "Disks"),
    ("domain.storage.disks.desc", "Temperature, health and usage per disk"),
    ("domain.storage.parity", "Parity"),
    ("domain.storage.parity.desc", "Parity check progress and history"),
    ("domain.storage.shares", "Shares"),
    ("domain.docker", "Docker"),
    ("domain.docker.desc", "Container runtime"),
    ("domain.docker.containers", "Containers"),
    ("domain.docker.networks", "Docker networks"),
    ("domain.vms", "Virtual machines"),
    ("domain.vms.desc", "State of virtual machines"),
    ("domain.ups", "UPS"),
    ("domain.ups.desc", "Battery and load of the uninterruptible power supply"),
    ("domain.notifications", "Notifications"),
];

static DE: &[(&str, &str)] = &[
    ("section.connection", "Verbindung"),
    ("section.polling", "Abfrage"),
    ("section.domains", "Überwachte Bereiche"),
    ("field.base_url", "Server-URL"),
    ("field.api_token", "API-Token"),
    ("field.allow_self_signed", "Selbstsignierte Zertifikate akzeptieren"),
    ("field.poll_interval", "Abfrageintervall (Sekunden)"),
    ("value.not_set", "nicht gesetzt"),
    ("value.yes", "ja"),
    ("value.no", "nein"),
    ("hint.base_url_scheme", "Die URL sollte mit http:// oder https:// beginnen"),
    ("hint.poll_interval", "mindestens 10 Sekunden, Schrittweite 5"),
    ("status.saved", "Konfiguration gespeichert"),
    ("status.unchanged", "Keine Änderungen"),
    ("domain.server", "Server"),
    ("domain.server.desc", "Allgemeine Informationen zum Host"),
    ("domain.server.info", "Systeminformationen"),
    ("domain.server.info.desc", "Betriebssystem, Kernel, Laufzeit und Hardware"),
    ("domain.server.metrics", "CPU und Arbeitsspeicher"),
    ("domain.server.metrics.desc", "Last, CPU- und Speicherauslastung"),
    ("domain.server.network", "Netzwerkschnittstellen"),
    ("domain.storage", "Speicher"),
    ("domain.storage.desc", "Festplatten-Array und Freigaben"),
    ("domain.storage.array", "Array-Status"),
    ("domain.storage.array.desc", "Zustand und Kapazität des Arrays"),
    ("domain.storage.disks", "Festplatten"),
    ("domain.storage.disks.desc", "Temperatur, Zustand und Belegung je Festplatte"),
    ("domain.storage.parity", "Parität"),
    ("domain.storage.parity.desc", "Fortschritt und Verlauf der Paritätsprüfung"),
    ("domain.storage.shares", "Freigaben"),
    ("domain.docker", "Docker"),
    ("domain.docker.desc", "Container-Laufzeit"),
    ("domain.docker.containers", "Container"),
    ("domain.docker.networks", "Docker-Netzwerke"),
    ("domain.vms", "Virtuelle Maschinen"),
    ("domain.vms.desc", "Zustand der virtuellen Maschinen"),
    ("domain.ups", "USV"),
    ("domain.ups.desc", "Akku und Last der unterbrechungsfreien Stromversorgung"),
    ("domain.notifications", "Benachrichtigungen"),
];
