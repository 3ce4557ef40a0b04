//! # armature-core
//!
//! Shared utilities for the Armature CLI providing:
//! - Capability probing for optional external tools
//! - Home directory and current-user identity resolution

pub mod probe;
pub mod utils;

pub use probe::Capabilities;
pub use utils::{current_user, get_home_dir};
