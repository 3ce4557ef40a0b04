//! `armature stacks` command handler

use anyhow::Result;
use armature_scaffold::{StackRegistry, TemplateSource};

use crate::cli::StacksArgs;
use crate::output;

/// List every stack the embedded registry offers
pub fn run(args: StacksArgs) -> Result<()> {
    let registry = StackRegistry::load(&TemplateSource::embedded())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
        return Ok(());
    }

    output::header("Available stacks");
    for (id, label) in registry.entries() {
        output::kv(id, label);
    }

    Ok(())
}
