//! Stack registry: the set of stacks a user can scaffold from.
//!
//! Loaded once at startup from `stacks.json` in the template source tree
//! and immutable for the process lifetime. Declaration order is preserved
//! so interactive selection lists stacks the way the registry declares
//! them.

use crate::error::{Error, Result};
use crate::source::TemplateSource;
use camino::Utf8Path;
use indexmap::IndexMap;

/// Relative location of the registry document inside a source tree
pub const REGISTRY_PATH: &str = "stacks.json";

/// Mapping from stack identifier to human-readable label
#[derive(Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct StackRegistry {
    stacks: IndexMap<String, String>,
}

impl StackRegistry {
    /// Load the registry from a template source tree
    pub fn load(source: &TemplateSource) -> Result<Self> {
        let rel = Utf8Path::new(REGISTRY_PATH);
        if !source.exists(rel) {
            return Err(Error::registry_not_found(REGISTRY_PATH));
        }
        let json = source.read_to_string(rel)?;
        Self::from_json(&json)
    }

    /// Parse a registry from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let stacks: IndexMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { stacks })
    }

    /// All stack identifiers, in declaration order
    pub fn ids(&self) -> Vec<&str> {
        self.stacks.keys().map(String::as_str).collect()
    }

    /// Human-readable label for a stack identifier
    pub fn label(&self, id: &str) -> Option<&str> {
        self.stacks.get(id).map(String::as_str)
    }

    /// Whether the identifier names a registered stack
    pub fn contains(&self, id: &str) -> bool {
        self.stacks.contains_key(id)
    }

    /// Number of registered stacks
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Identifier/label pairs, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stacks.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Validate that `id` names a registered stack.
    ///
    /// Unknown identifiers are a user-facing error enumerating the
    /// available stacks, never a silent default.
    pub fn ensure_known(&self, id: &str) -> Result<()> {
        if self.contains(id) {
            return Ok(());
        }
        Err(Error::unknown_stack(id, self.ids().join(", ")))
    }
}
