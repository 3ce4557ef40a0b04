//! Interactive prompt plan for `armature new`.
//!
//! The questions form an ordered list; each carries a predicate deciding
//! whether it is asked, given the draft answers accumulated so far and the
//! probed capabilities. Command-line flags pre-fill the draft, which makes
//! the matching predicate false, and `--yes` pre-fills every remaining
//! question with its default so the plan runs without a terminal.

use anyhow::{bail, Result};
use armature_core::Capabilities;
use armature_scaffold::{Answers, DeployTool, PackageManager, StackRegistry};
use camino::Utf8Path;
use dialoguer::{Confirm, Input, Select};
use std::str::FromStr;

use crate::cli::NewArgs;

/// Answers in progress; `None` means "not decided yet".
///
/// `deploy_tool` is doubly optional: the outer level is "undecided", the
/// inner is "decided to skip deployment".
#[derive(Debug, Default)]
pub(super) struct Draft {
    pub title: Option<String>,
    pub stack: Option<String>,
    pub proceed: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub create_repo: Option<bool>,
    pub deploy_tool: Option<Option<DeployTool>>,
}

/// Everything a question may consult when deciding whether to run
pub(super) struct PromptEnv<'a> {
    pub registry: &'a StackRegistry,
    pub caps: &'a Capabilities,
    pub dest: &'a Utf8Path,
    pub dest_empty: bool,
    pub default_title: String,
}

/// One interactive question
trait Question {
    fn applies(&self, draft: &Draft, env: &PromptEnv) -> bool;
    fn ask(&self, draft: &mut Draft, env: &PromptEnv) -> Result<()>;
}

struct TitleQuestion;

impl Question for TitleQuestion {
    fn applies(&self, draft: &Draft, _env: &PromptEnv) -> bool {
        draft.title.is_none()
    }

    fn ask(&self, draft: &mut Draft, env: &PromptEnv) -> Result<()> {
        let title: String = Input::new()
            .with_prompt("Project title")
            .default(env.default_title.clone())
            .interact_text()?;
        draft.title = Some(title);
        Ok(())
    }
}

struct StackQuestion;

impl Question for StackQuestion {
    fn applies(&self, draft: &Draft, _env: &PromptEnv) -> bool {
        draft.stack.is_none()
    }

    fn ask(&self, draft: &mut Draft, env: &PromptEnv) -> Result<()> {
        let ids = env.registry.ids();
        let items: Vec<String> = env
            .registry
            .entries()
            .map(|(id, label)| format!("{id:12} - {label}"))
            .collect();

        let selection = Select::new()
            .with_prompt("Select a stack")
            .items(&items)
            .default(0)
            .interact()?;

        draft.stack = Some(ids[selection].to_string());
        Ok(())
    }
}

struct ProceedQuestion;

impl Question for ProceedQuestion {
    fn applies(&self, draft: &Draft, _env: &PromptEnv) -> bool {
        draft.proceed.is_none()
    }

    fn ask(&self, draft: &mut Draft, env: &PromptEnv) -> Result<()> {
        let prompt = if env.dest_empty {
            format!("Scaffold into {}?", env.dest)
        } else {
            format!("Destination {} is not empty. Continue anyway?", env.dest)
        };

        let proceed = Confirm::new()
            .with_prompt(prompt)
            .default(proceed_default(env.dest_empty))
            .interact()?;
        draft.proceed = Some(proceed);
        Ok(())
    }
}

struct PackageManagerQuestion;

impl Question for PackageManagerQuestion {
    fn applies(&self, draft: &Draft, env: &PromptEnv) -> bool {
        draft.package_manager.is_none() && env.caps.package_manager_is_ambiguous()
    }

    fn ask(&self, draft: &mut Draft, _env: &PromptEnv) -> Result<()> {
        let choices = [PackageManager::Npm, PackageManager::Yarn];
        let items: Vec<&str> = choices.iter().map(|pm| pm.command()).collect();

        let selection = Select::new()
            .with_prompt("Install dependencies with")
            .items(&items)
            .default(0)
            .interact()?;
        draft.package_manager = Some(choices[selection]);
        Ok(())
    }
}

struct RepoQuestion;

impl Question for RepoQuestion {
    fn applies(&self, draft: &Draft, env: &PromptEnv) -> bool {
        draft.create_repo.is_none() && env.caps.git
    }

    fn ask(&self, draft: &mut Draft, _env: &PromptEnv) -> Result<()> {
        let create = Confirm::new()
            .with_prompt("Initialize a git repository?")
            .default(true)
            .interact()?;
        draft.create_repo = Some(create);
        Ok(())
    }
}

struct DeployQuestion;

impl Question for DeployQuestion {
    fn applies(&self, draft: &Draft, env: &PromptEnv) -> bool {
        // Only ambiguous availability needs the user; zero or one tool is
        // decided without a prompt.
        draft.deploy_tool.is_none() && env.caps.surge && env.caps.netlify
    }

    fn ask(&self, draft: &mut Draft, _env: &PromptEnv) -> Result<()> {
        let items = ["surge", "netlify", "skip deployment"];
        let selection = Select::new()
            .with_prompt("Deploy with")
            .items(&items)
            .default(0)
            .interact()?;

        draft.deploy_tool = Some(match selection {
            0 => Some(DeployTool::Surge),
            1 => Some(DeployTool::Netlify),
            _ => None,
        });
        Ok(())
    }
}

/// Default for the proceed/bail confirmation: proceed when the destination
/// is empty, offer to bail when it is not.
pub(super) fn proceed_default(dest_empty: bool) -> bool {
    dest_empty
}

/// Installer used when the choice was never put to the user
pub(super) fn default_package_manager(caps: &Capabilities) -> PackageManager {
    if !caps.npm && caps.yarn {
        PackageManager::Yarn
    } else {
        PackageManager::Npm
    }
}

/// Deploy tool when availability is unambiguous
pub(super) fn auto_deploy_tool(caps: &Capabilities) -> Option<DeployTool> {
    match (caps.surge, caps.netlify) {
        (true, false) => Some(DeployTool::Surge),
        (false, true) => Some(DeployTool::Netlify),
        _ => None,
    }
}

/// Seed the draft from command-line flags
fn draft_from_args(args: &NewArgs) -> Result<Draft> {
    let mut draft = Draft {
        title: args.title.clone(),
        stack: args.stack.clone(),
        ..Draft::default()
    };

    if let Some(pm) = &args.package_manager {
        draft.package_manager = Some(PackageManager::from_str(pm)?);
    }

    if let Some(deploy) = &args.deploy {
        draft.deploy_tool = Some(match deploy.to_lowercase().as_str() {
            "none" | "skip" => None,
            other => Some(DeployTool::from_str(other)?),
        });
    }

    if args.skip_git {
        draft.create_repo = Some(false);
    }

    Ok(draft)
}

/// Fill every undecided field with its default (the `--yes` path)
fn apply_defaults(draft: &mut Draft, env: &PromptEnv) -> Result<()> {
    if draft.stack.is_none() {
        bail!(
            "--yes requires a stack argument. Available stacks: {}",
            env.registry.ids().join(", ")
        );
    }
    draft
        .title
        .get_or_insert_with(|| env.default_title.clone());
    draft.proceed.get_or_insert(proceed_default(env.dest_empty));
    draft
        .package_manager
        .get_or_insert(default_package_manager(env.caps));
    draft.create_repo.get_or_insert(env.caps.git);
    draft.deploy_tool.get_or_insert(auto_deploy_tool(env.caps));
    Ok(())
}

/// Run the prompt plan and build the session's answers.
///
/// Returns `Ok(None)` when the user bailed out; nothing has been written
/// at that point.
pub(super) fn run_plan(args: &NewArgs, env: &PromptEnv) -> Result<Option<Answers>> {
    let mut draft = draft_from_args(args)?;

    if args.yes {
        apply_defaults(&mut draft, env)?;
    } else {
        let plan: [&dyn Question; 6] = [
            &TitleQuestion,
            &StackQuestion,
            &ProceedQuestion,
            &PackageManagerQuestion,
            &RepoQuestion,
            &DeployQuestion,
        ];
        for question in plan {
            if question.applies(&draft, env) {
                question.ask(&mut draft, env)?;
            }
        }
    }

    if !draft.proceed.unwrap_or(true) {
        return Ok(None);
    }

    let answers = Answers::new(
        draft.title.expect("title is always decided"),
        draft.stack.expect("stack is always decided"),
        draft
            .package_manager
            .unwrap_or_else(|| default_package_manager(env.caps)),
        draft.create_repo.unwrap_or(false),
        draft
            .deploy_tool
            .unwrap_or_else(|| auto_deploy_tool(env.caps)),
    )?;
    Ok(Some(answers))
}
