//! `armature doctor` command handler

use anyhow::Result;
use armature_core::Capabilities;

use crate::cli::DoctorArgs;
use crate::output;

/// Report which optional external tools were detected on PATH
pub fn run(args: DoctorArgs) -> Result<()> {
    let caps = Capabilities::detect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&caps)?);
        return Ok(());
    }

    output::header("Detected tools");
    let tools = [
        ("npm", caps.npm, "package installer"),
        ("yarn", caps.yarn, "alternate package installer"),
        ("git", caps.git, "repository initialization"),
        ("surge", caps.surge, "deployment CLI"),
        ("netlify", caps.netlify, "deployment CLI"),
    ];
    for (name, present, role) in tools {
        if present {
            println!("  [ok] {name:8} - {role}");
        } else {
            println!("  [--] {name:8} - {role} (not found)");
        }
    }

    Ok(())
}
