//! The session's accumulated answers.
//!
//! Every choice made during a run, from prompts and capability probing,
//! lands in one flat [`Answers`] record: write-once per session, read by
//! the materializer (as the substitution context) and by the
//! external-collaborator steps afterwards.

use crate::deploy::{self, DeployTool};
use crate::error::{Error, Result};
use crate::install::PackageManager;
use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"));

/// Derive a package name from a free-text project title.
///
/// Lowercases, collapses every non-alphanumeric run into a single hyphen,
/// and trims leading/trailing hyphens.
pub fn slugify(input: &str) -> String {
    let lower = input.to_lowercase();
    NON_ALNUM
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Choices accumulated over one scaffolding session
#[derive(Debug, Clone, serde::Serialize)]
pub struct Answers {
    /// Free-text project title as entered
    pub title: String,
    /// Slug of the title, used as the package name
    pub name: String,
    /// Selected stack identifier
    pub stack: String,
    /// Selected package installer
    pub package_manager: PackageManager,
    /// Whether to initialize a git repository
    pub create_repo: bool,
    /// Deployment CLI to hook up, when one was chosen or available
    pub deploy_tool: Option<DeployTool>,
    /// Current user's login, read from the environment
    pub user: String,
    /// Current year, for license and copyright lines
    pub year: String,
}

impl Answers {
    /// Build the record from the session's choices.
    ///
    /// Fails when the title slugs down to nothing.
    pub fn new(
        title: impl Into<String>,
        stack: impl Into<String>,
        package_manager: PackageManager,
        create_repo: bool,
        deploy_tool: Option<DeployTool>,
    ) -> Result<Self> {
        let title = title.into();
        let name = slugify(&title);
        if name.is_empty() {
            return Err(Error::invalid_project_name(title));
        }

        Ok(Self {
            title,
            name,
            stack: stack.into(),
            package_manager,
            create_repo,
            deploy_tool,
            user: armature_core::current_user(),
            year: Local::now().format("%Y").to_string(),
        })
    }

    /// Deployment host name for this project
    pub fn deploy_host(&self) -> String {
        deploy::deploy_host(&self.name, &self.user)
    }

    /// Substitution context handed to every textual template render
    pub fn context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        ctx.insert("title", &self.title);
        ctx.insert("name", &self.name);
        ctx.insert("stack", &self.stack);
        ctx.insert("package_manager", self.package_manager.command());
        ctx.insert("user", &self.user);
        ctx.insert("year", &self.year);
        ctx.insert("deploy_host", &self.deploy_host());
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Great App"), "my-great-app");
        assert_eq!(slugify("  hello,  world! "), "hello-world");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_new_rejects_unsluggable_title() {
        let err = Answers::new("???", "vanilla", PackageManager::Npm, false, None).unwrap_err();
        assert!(err.to_string().contains("???"));
    }

    #[test]
    fn test_context_contains_every_template_key() {
        let answers = Answers::new(
            "Demo App",
            "vanilla",
            PackageManager::Npm,
            true,
            Some(DeployTool::Surge),
        )
        .unwrap();

        let ctx = answers.context();
        let value = ctx.into_json();
        for key in [
            "title",
            "name",
            "stack",
            "package_manager",
            "user",
            "year",
            "deploy_host",
        ] {
            assert!(value.get(key).is_some(), "missing context key {key}");
        }
        assert_eq!(value["name"], "demo-app");
    }
}
