//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Armature - Interactive project scaffolder
#[derive(Parser, Debug)]
#[command(name = "armature")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project
    New(NewArgs),

    /// List the available stacks
    Stacks(StacksArgs),

    /// Show which external tools were detected
    Doctor(DoctorArgs),
}

// New command
#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Stack to scaffold (prompted interactively when omitted)
    pub stack: Option<String>,

    /// Destination directory (defaults to the current directory)
    pub dir: Option<Utf8PathBuf>,

    /// Project title (prompted interactively when omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// Package manager for dependency installation (npm or yarn)
    #[arg(long)]
    pub package_manager: Option<String>,

    /// Deployment CLI to hook up (surge, netlify, or none)
    #[arg(long)]
    pub deploy: Option<String>,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_install: bool,

    /// Skip git repository initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Accept the default answer for every prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Load templates from a directory instead of the embedded set
    #[arg(long)]
    pub templates: Option<Utf8PathBuf>,
}

// Stacks command
#[derive(Args, Debug)]
pub struct StacksArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Doctor command
#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
