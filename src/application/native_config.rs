//! Host-owned configuration object and its single-attribute write protocol.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Attribute of the host configuration addressable by the write accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigAttribute {
    BaseUrl,
    ApiToken,
    AllowSelfSigned,
    PollInterval,
    EnabledDomains,
}

impl ConfigAttribute {
    /// Attribute name as persisted by the host.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigAttribute::BaseUrl => "baseUrl",
            ConfigAttribute::ApiToken => "apiToken",
            ConfigAttribute::AllowSelfSigned => "allowSelfSigned",
            ConfigAttribute::PollInterval => "pollInterval",
            ConfigAttribute::EnabledDomains => "enabledDomains",
        }
    }

    /// Values of sensitive attributes must never reach logs or output.
    pub fn is_sensitive(&self) -> bool {
        matches!(self, ConfigAttribute::ApiToken)
    }
}

impl fmt::Display for ConfigAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Untyped attribute value as stored by the host.
///
/// Host data is untrusted: anything that is not one of the expected shapes
/// lands in `Other` instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(i64),
    Text(String),
    List(Vec<String>),
    Other(toml::Value),
}

impl AttrValue {
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttrValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Items of a list value; mixed lists keep only their string items.
    ///
    /// `None` for anything that is not an array.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            AttrValue::List(items) => Some(items.clone()),
            AttrValue::Other(toml::Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Configuration object owned by the host application.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NativeConfig {
    pub base_url: String,
    pub api_token: String,
    pub allow_self_signed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval: Option<AttrValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_domains: Option<AttrValue>,
}

impl fmt::Debug for NativeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("allow_self_signed", &self.allow_self_signed)
            .field("poll_interval", &self.poll_interval)
            .field("enabled_domains", &self.enabled_domains)
            .finish()
    }
}

impl NativeConfig {
    /// Store one attribute.
    ///
    /// Typed attributes ignore values of the wrong shape; returns whether the
    /// stored value changed.
    pub fn apply(&mut self, attr: ConfigAttribute, value: AttrValue) -> bool {
        match (attr, value) {
            (ConfigAttribute::BaseUrl, AttrValue::Text(url)) => {
                store_if_changed(&mut self.base_url, url)
            }
            (ConfigAttribute::ApiToken, AttrValue::Text(token)) => {
                store_if_changed(&mut self.api_token, token)
            }
            (ConfigAttribute::AllowSelfSigned, AttrValue::Flag(flag)) => {
                store_if_changed(&mut self.allow_self_signed, flag)
            }
            (ConfigAttribute::PollInterval, value) => {
                store_if_changed(&mut self.poll_interval, Some(value))
            }
            (ConfigAttribute::EnabledDomains, value) => {
                store_if_changed(&mut self.enabled_domains, Some(value))
            }
            (attr, _) => {
                warn!("ignoring value of unexpected type for {}", attr);
                false
            }
        }
    }
}

fn store_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
