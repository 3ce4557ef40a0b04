//! Remote deployment hook.
//!
//! One of two deployment CLIs is driven after the file tree exists,
//! selected by availability or by the user when both are present. Like
//! the installer, the contract is "construct arguments, invoke, surface
//! non-zero exit".

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::str::FromStr;
use tokio::process::Command;
use tracing::{debug, info};

/// The supported deployment CLIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployTool {
    Surge,
    Netlify,
}

impl DeployTool {
    /// The executable name
    pub fn command(&self) -> &'static str {
        match self {
            Self::Surge => "surge",
            Self::Netlify => "netlify",
        }
    }

    /// Fixed argument shape for initializing the deployment
    pub fn arguments(&self, dest: &Utf8Path, host: &str) -> Vec<String> {
        match self {
            Self::Surge => vec![dest.to_string(), host.to_string()],
            Self::Netlify => vec![
                "deploy".to_string(),
                "--dir".to_string(),
                dest.to_string(),
            ],
        }
    }
}

impl FromStr for DeployTool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "surge" => Ok(Self::Surge),
            "netlify" => Ok(Self::Netlify),
            other => Err(Error::process_failed(
                "deploy tool selection",
                format!("unsupported deploy tool: {other} (expected surge or netlify)"),
            )),
        }
    }
}

impl std::fmt::Display for DeployTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

/// Deployment host name for a project, built from the package name and the
/// current user's login.
pub fn deploy_host(name: &str, user: &str) -> String {
    format!("{name}-{user}.surge.sh")
}

/// Run the deployment hook for a materialized project.
pub async fn initialize_hook(dest: &Utf8Path, tool: DeployTool, host: &str) -> Result<()> {
    let args = tool.arguments(dest, host);
    debug!(command = tool.command(), ?args, "running deploy hook");

    let output = Command::new(tool.command())
        .args(&args)
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::command_not_found(tool.command()),
            _ => Error::Io(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::process_failed(
            tool.command(),
            stderr.trim().to_string(),
        ));
    }

    info!(tool = %tool, host, "deployment hook completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(DeployTool::from_str("surge").unwrap(), DeployTool::Surge);
        assert_eq!(DeployTool::from_str("Netlify").unwrap(), DeployTool::Netlify);
        assert!(DeployTool::from_str("heroku").is_err());
    }

    #[test]
    fn test_deploy_host() {
        assert_eq!(deploy_host("demo-app", "alice"), "demo-app-alice.surge.sh");
    }

    #[test]
    fn test_argument_shapes() {
        let dest = Utf8Path::new("my-app");
        assert_eq!(
            DeployTool::Surge.arguments(dest, "demo-alice.surge.sh"),
            vec!["my-app", "demo-alice.surge.sh"]
        );
        assert_eq!(
            DeployTool::Netlify.arguments(dest, "demo-alice.surge.sh"),
            vec!["deploy", "--dir", "my-app"]
        );
    }
}
