//! `armature new` command handler
//!
//! Drives the full scaffolding flow: probe capabilities, run the prompt
//! plan, resolve the stack configuration, materialize the template tree,
//! then hand off to the best-effort external steps (installer, git,
//! deploy hook).

mod prompts;

use anyhow::{Context, Result};
use armature_core::Capabilities;
use armature_scaffold::{
    config, deploy, git, install, Materializer, PackageManager, StackRegistry, TemplateSource,
};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::NewArgs;
use crate::output;

/// Create a new project from a stack template
pub async fn run(args: NewArgs) -> Result<()> {
    output::header("Scaffold a new project");

    let source = template_source(&args);
    let registry = StackRegistry::load(&source)?;

    // An unknown positional stack aborts before anything else happens;
    // the interactive selection can only produce known identifiers.
    if let Some(stack) = &args.stack {
        registry.ensure_known(stack)?;
    }

    let caps = Capabilities::detect();
    let dest = args.dir.clone().unwrap_or_else(|| Utf8PathBuf::from("."));
    let dest_empty = is_dir_empty(&dest)?;

    let env = prompts::PromptEnv {
        registry: &registry,
        caps: &caps,
        dest: &dest,
        dest_empty,
        default_title: default_title(&dest),
    };
    let Some(answers) = prompts::run_plan(&args, &env)? else {
        output::info("Aborted. Nothing was written.");
        return Ok(());
    };

    output::kv("Project", &answers.title);
    output::kv("Package name", &answers.name);
    output::kv("Stack", &answers.stack);
    output::kv("Destination", dest.as_str());
    println!();

    // Configuration and materialization failures are fatal.
    let resolved = config::resolve(&source, &registry, &answers.stack)?;

    std::fs::create_dir_all(&dest)
        .with_context(|| format!("Failed to create destination directory: {dest}"))?;

    let written = Materializer::new(&source, dest.clone())
        .materialize(&resolved, &answers.context())?;
    output::success(&format!("Wrote {} files", written.len()));

    // The tree exists now; everything below is best-effort.
    run_installer_step(&args, &caps, &dest, answers.package_manager, &resolved).await;

    if answers.create_repo {
        run_git_step(&dest).await;
    }

    if let Some(tool) = answers.deploy_tool {
        run_deploy_step(&dest, tool, &answers.deploy_host()).await;
    }

    println!();
    output::success(&format!("Project '{}' created", answers.name));
    println!();
    output::info("Next steps:");
    println!("   1. cd {}", dest);
    println!("   2. {} run dev", answers.package_manager.command());

    Ok(())
}

async fn run_installer_step(
    args: &NewArgs,
    caps: &Capabilities,
    dest: &Utf8Path,
    manager: PackageManager,
    resolved: &config::ResolvedStack,
) {
    if args.skip_install {
        output::info("Skipping dependency installation");
        return;
    }

    let available = match manager {
        PackageManager::Npm => caps.npm,
        PackageManager::Yarn => caps.yarn,
    };
    if !available {
        output::warning(&format!(
            "{} not found, skipping dependency installation",
            manager.command()
        ));
        return;
    }

    let pb = output::spinner("Installing dependencies...");
    match install::install_dependencies(dest, manager, resolved).await {
        Ok(()) => {
            pb.finish_and_clear();
            output::success("Dependencies installed");
        }
        Err(e) => {
            pb.finish_and_clear();
            output::warning(&format!("Dependency installation failed: {e}"));
            tracing::warn!("installer failed: {e}");
        }
    }
}

async fn run_git_step(dest: &Utf8Path) {
    let result = async {
        git::init_repository(dest).await?;
        git::commit_all(dest, git::INITIAL_COMMIT_MESSAGE).await
    }
    .await;

    match result {
        Ok(()) => output::success("Repository initialized"),
        Err(e) => {
            output::warning(&format!("Repository setup failed: {e}"));
            tracing::warn!("git setup failed: {e}");
        }
    }
}

async fn run_deploy_step(dest: &Utf8Path, tool: armature_scaffold::DeployTool, host: &str) {
    match deploy::initialize_hook(dest, tool, host).await {
        Ok(()) => output::success(&format!("Deployment hook ready: {host}")),
        Err(e) => {
            output::warning(&format!("Deploy hook failed: {e}"));
            tracing::warn!("deploy hook failed: {e}");
        }
    }
}

/// Where to read templates from: the `--templates` flag wins, then a
/// user-local template tree, then the embedded set.
fn template_source(args: &NewArgs) -> TemplateSource {
    if let Some(dir) = &args.templates {
        return TemplateSource::from_dir(dir.clone());
    }

    if let Some(local) = user_templates_dir() {
        if local.is_dir() {
            tracing::debug!("using user-local templates at {local}");
            return TemplateSource::from_dir(local);
        }
    }

    TemplateSource::embedded()
}

fn user_templates_dir() -> Option<Utf8PathBuf> {
    let home = armature_core::get_home_dir().ok()?;
    let home = Utf8PathBuf::from_path_buf(home).ok()?;
    Some(home.join(".config/armature/templates"))
}

/// A missing destination counts as empty; scaffolding creates it.
fn is_dir_empty(path: &Utf8Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read destination directory: {path}"))?;
    Ok(entries.next().is_none())
}

/// Default project title: the destination directory's name, falling back
/// to the current directory's name when scaffolding in place.
fn default_title(dest: &Utf8Path) -> String {
    dest.file_name()
        .map(str::to_string)
        .or_else(|| {
            std::env::current_dir()
                .ok()
                .and_then(|d| d.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "new-project".to_string())
}
