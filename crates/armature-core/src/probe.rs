//! Capability probing for optional external tools
//!
//! The scaffolder shells out to a package installer, git, and one of two
//! deployment CLIs. All of them are optional at runtime, so availability is
//! probed once at startup and captured in an immutable [`Capabilities`]
//! record. Later steps read the record instead of re-checking the
//! environment.

use tracing::debug;

/// Which optional external tools were found on PATH.
///
/// Produced by a single [`Capabilities::detect`] pass and never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Capabilities {
    /// npm, the default package installer
    pub npm: bool,
    /// yarn, the alternate package installer
    pub yarn: bool,
    /// git, for optional repository initialization
    pub git: bool,
    /// surge, one of the two supported deployment CLIs
    pub surge: bool,
    /// netlify, the other supported deployment CLI
    pub netlify: bool,
}

impl Capabilities {
    /// Probe PATH for every tool the scaffolder may shell out to.
    pub fn detect() -> Self {
        Self::detect_with(|cmd| which::which(cmd).is_ok())
    }

    /// Probe with an injected lookup, so tests can simulate environments.
    pub fn detect_with(lookup: impl Fn(&str) -> bool) -> Self {
        let caps = Self {
            npm: lookup("npm"),
            yarn: lookup("yarn"),
            git: lookup("git"),
            surge: lookup("surge"),
            netlify: lookup("netlify"),
        };
        debug!(?caps, "probed external tools");
        caps
    }

    /// True when more than one package installer is available and the
    /// choice has to be put to the user.
    pub fn package_manager_is_ambiguous(&self) -> bool {
        self.npm && self.yarn
    }

    /// Names of the deployment CLIs that were found, in preference order.
    pub fn available_deploy_tools(&self) -> Vec<&'static str> {
        let mut tools = Vec::new();
        if self.surge {
            tools.push("surge");
        }
        if self.netlify {
            tools.push("netlify");
        }
        tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_with_everything_missing() {
        let caps = Capabilities::detect_with(|_| false);
        assert!(!caps.npm);
        assert!(!caps.yarn);
        assert!(!caps.git);
        assert!(caps.available_deploy_tools().is_empty());
        assert!(!caps.package_manager_is_ambiguous());
    }

    #[test]
    fn test_ambiguous_package_manager() {
        let caps = Capabilities::detect_with(|cmd| matches!(cmd, "npm" | "yarn"));
        assert!(caps.package_manager_is_ambiguous());

        let npm_only = Capabilities::detect_with(|cmd| cmd == "npm");
        assert!(!npm_only.package_manager_is_ambiguous());
    }

    #[test]
    fn test_deploy_tool_order_is_stable() {
        let caps = Capabilities::detect_with(|cmd| matches!(cmd, "surge" | "netlify"));
        assert_eq!(caps.available_deploy_tools(), vec!["surge", "netlify"]);

        let netlify_only = Capabilities::detect_with(|cmd| cmd == "netlify");
        assert_eq!(netlify_only.available_deploy_tools(), vec!["netlify"]);
    }
}
