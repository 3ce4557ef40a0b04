//! Command handlers for the Armature CLI

pub mod doctor;
pub mod new;
pub mod stacks;
