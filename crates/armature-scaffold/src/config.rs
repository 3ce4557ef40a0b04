//! Stack configuration documents and their resolution.
//!
//! Each stack has a JSON document of the shape
//! `{ "installFiles": {...}, "dependencies": [...], "devDependencies": [...] }`,
//! and a "common" document of the same shape applies to every stack. Both
//! are loaded from the template source tree and merged common-first into a
//! [`ResolvedStack`], which is what the materializer and the installer
//! consume.

use crate::error::{Error, Result};
use crate::registry::StackRegistry;
use crate::source::TemplateSource;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Relative location of the common configuration document
pub const COMMON_CONFIG_PATH: &str = "config/common.json";

/// One stack configuration document.
///
/// All three fields are required: a document missing any of them fails
/// validation, and unknown fields are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StackConfig {
    /// Ordered mapping of source-relative path to destination-relative path
    pub install_files: IndexMap<String, String>,
    /// Runtime package names handed to the installer
    pub dependencies: Vec<String>,
    /// Development package names handed to the installer
    pub dev_dependencies: Vec<String>,
}

impl StackConfig {
    /// Parse a configuration document from its JSON representation
    pub fn from_json(path: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::ConfigParse {
            path: path.to_string(),
            source,
        })
    }
}

/// The merged configuration for a selected stack: common entries first,
/// then the stack-specific entries, declaration order preserved within
/// each.
#[derive(Debug, Clone)]
pub struct ResolvedStack {
    /// The stack identifier this configuration was resolved for
    pub stack: String,
    /// Merged install-file pairs, in application order
    pub install_files: IndexMap<Utf8PathBuf, Utf8PathBuf>,
    /// Merged runtime dependencies, duplicates removed
    pub dependencies: Vec<String>,
    /// Merged development dependencies, duplicates removed
    pub dev_dependencies: Vec<String>,
}

impl ResolvedStack {
    fn merge(stack: &str, common: StackConfig, specific: StackConfig) -> Self {
        let mut install_files: IndexMap<Utf8PathBuf, Utf8PathBuf> = IndexMap::new();
        for (src, dest) in common.install_files.into_iter().chain(specific.install_files) {
            // A later entry with the same source re-declares the pair; the
            // map keeps one entry, and write order still follows the merge.
            install_files.insert(Utf8PathBuf::from(src), Utf8PathBuf::from(dest));
        }

        let mut dependencies = common.dependencies;
        for dep in specific.dependencies {
            if !dependencies.contains(&dep) {
                dependencies.push(dep);
            }
        }

        let mut dev_dependencies = common.dev_dependencies;
        for dep in specific.dev_dependencies {
            if !dev_dependencies.contains(&dep) {
                dev_dependencies.push(dep);
            }
        }

        Self {
            stack: stack.to_string(),
            install_files,
            dependencies,
            dev_dependencies,
        }
    }
}

/// Relative location of a stack's configuration document
pub fn stack_config_path(stack: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("config/{stack}.json"))
}

/// Resolve the merged configuration for `stack`.
///
/// Validates the identifier against the registry first, so an unknown
/// stack is reported (with the available identifiers enumerated) before
/// anything is read or written. Missing or malformed documents are fatal;
/// nothing has touched the destination tree at this point.
pub fn resolve(
    source: &TemplateSource,
    registry: &StackRegistry,
    stack: &str,
) -> Result<ResolvedStack> {
    registry.ensure_known(stack)?;

    let common = load_config(source, Utf8Path::new(COMMON_CONFIG_PATH))?;
    let specific = load_config(source, &stack_config_path(stack))?;

    let resolved = ResolvedStack::merge(stack, common, specific);
    debug!(
        stack,
        files = resolved.install_files.len(),
        deps = resolved.dependencies.len(),
        dev_deps = resolved.dev_dependencies.len(),
        "resolved stack configuration"
    );
    Ok(resolved)
}

fn load_config(source: &TemplateSource, rel: &Utf8Path) -> Result<StackConfig> {
    if !source.exists(rel) {
        return Err(Error::config_not_found(rel.as_str()));
    }
    let json = source.read_to_string(rel)?;
    StackConfig::from_json(rel.as_str(), &json)
}
