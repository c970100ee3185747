//! Domain entities: core data structures

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque key of a monitored-resource domain, e.g. `storage.disks`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(String);

impl DomainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Localization key of this domain's label.
    pub fn label_key(&self) -> String {
        format!("domain.{}", self.0)
    }

    /// Localization key of this domain's description.
    pub fn description_key(&self) -> String {
        format!("domain.{}.desc", self.0)
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DomainId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DomainId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DomainId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Set of enabled domain ids.
///
/// Membership only; use `DomainForest::sort_by_tree_order` for a canonical sequence.
pub type Selection = HashSet<DomainId>;

/// Declarative description of one domain and its children.
///
/// Labels and descriptions are localization keys. When omitted they default to
/// `domain.<id>` and `domain.<id>.desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DomainSpec>,
}

impl DomainSpec {
    /// Leaf domain with default label and no description.
    pub fn leaf(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: None,
            description: None,
            children: Vec::new(),
        }
    }

    /// Domain with children and default label.
    pub fn branch(id: &str, children: Vec<DomainSpec>) -> Self {
        Self {
            children,
            ..Self::leaf(id)
        }
    }

    /// Attach the default description key (`domain.<id>.desc`).
    pub fn described(mut self) -> Self {
        self.description = Some(DomainId::new(self.id.as_str()).description_key());
        self
    }
}

/// Render state of a tri-state checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckState {
    Checked,
    Indeterminate,
    Unchecked,
}

impl CheckState {
    pub fn marker(&self) -> &'static str {
        match self {
            CheckState::Checked => "[x]",
            CheckState::Indeterminate => "[-]",
            CheckState::Unchecked => "[ ]",
        }
    }
}
