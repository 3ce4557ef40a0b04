//! Package installer invocation.
//!
//! Two installer variants are supported, selected by availability (or the
//! user's explicit choice when both are present). The contract with the
//! installer is thin: construct the argument list for the declared
//! dependency sets, invoke it in the destination directory, and surface a
//! non-zero exit as a failure.

use crate::config::ResolvedStack;
use crate::error::{Error, Result};
use camino::Utf8Path;
use std::str::FromStr;
use tokio::process::Command;
use tracing::{debug, info};

/// The package installer variants the scaffolder can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// The executable name
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Argument list for installing runtime dependencies
    pub fn add_args<'a>(&self, packages: &'a [String]) -> Vec<&'a str> {
        let mut args: Vec<&str> = match self {
            Self::Npm => vec!["install", "--save"],
            Self::Yarn => vec!["add"],
        };
        args.extend(packages.iter().map(String::as_str));
        args
    }

    /// Argument list for installing development dependencies
    pub fn add_dev_args<'a>(&self, packages: &'a [String]) -> Vec<&'a str> {
        let mut args: Vec<&str> = match self {
            Self::Npm => vec!["install", "--save-dev"],
            Self::Yarn => vec!["add", "--dev"],
        };
        args.extend(packages.iter().map(String::as_str));
        args
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            other => Err(Error::process_failed(
                "package manager selection",
                format!("unsupported package manager: {other} (expected npm or yarn)"),
            )),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

/// Install the resolved dependency sets into `dest`.
///
/// Runs one installer invocation per non-empty set. The declared package
/// names are recorded in the project manifest by the installer itself, so
/// the materialized `package.json` stays the single source of truth.
pub async fn install_dependencies(
    dest: &Utf8Path,
    manager: PackageManager,
    resolved: &ResolvedStack,
) -> Result<()> {
    if resolved.dependencies.is_empty() && resolved.dev_dependencies.is_empty() {
        debug!(stack = %resolved.stack, "no dependencies declared, skipping installer");
        return Ok(());
    }

    if !resolved.dependencies.is_empty() {
        info!(
            manager = %manager,
            count = resolved.dependencies.len(),
            "installing dependencies"
        );
        run_installer(dest, manager, &manager.add_args(&resolved.dependencies)).await?;
    }

    if !resolved.dev_dependencies.is_empty() {
        info!(
            manager = %manager,
            count = resolved.dev_dependencies.len(),
            "installing dev dependencies"
        );
        run_installer(dest, manager, &manager.add_dev_args(&resolved.dev_dependencies)).await?;
    }

    Ok(())
}

async fn run_installer(dest: &Utf8Path, manager: PackageManager, args: &[&str]) -> Result<()> {
    debug!(command = manager.command(), ?args, cwd = %dest, "running installer");

    let output = Command::new(manager.command())
        .current_dir(dest)
        .args(args)
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::command_not_found(manager.command()),
            _ => Error::Io(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::process_failed(
            manager.command(),
            stderr.trim().to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(PackageManager::from_str("npm").unwrap(), PackageManager::Npm);
        assert_eq!(PackageManager::from_str("Yarn").unwrap(), PackageManager::Yarn);
        assert!(PackageManager::from_str("pnpm").is_err());
    }

    #[test]
    fn test_npm_argument_shapes() {
        let packages = vec!["react".to_string(), "react-dom".to_string()];
        assert_eq!(
            PackageManager::Npm.add_args(&packages),
            vec!["install", "--save", "react", "react-dom"]
        );
        assert_eq!(
            PackageManager::Npm.add_dev_args(&packages),
            vec!["install", "--save-dev", "react", "react-dom"]
        );
    }

    #[test]
    fn test_yarn_argument_shapes() {
        let packages = vec!["vite".to_string()];
        assert_eq!(PackageManager::Yarn.add_args(&packages), vec!["add", "vite"]);
        assert_eq!(
            PackageManager::Yarn.add_dev_args(&packages),
            vec!["add", "--dev", "vite"]
        );
    }

    #[tokio::test]
    async fn test_install_skips_when_nothing_declared() {
        use indexmap::IndexMap;

        let resolved = ResolvedStack {
            stack: "empty".to_string(),
            install_files: IndexMap::new(),
            dependencies: vec![],
            dev_dependencies: vec![],
        };

        // No installer is spawned, so this succeeds even where npm is absent.
        let tmp = tempfile::tempdir().unwrap();
        let dest = Utf8Path::from_path(tmp.path()).unwrap();
        install_dependencies(dest, PackageManager::Npm, &resolved)
            .await
            .unwrap();
    }
}
