//! # armature-scaffold
//!
//! Scaffolding library for the Armature CLI providing:
//! - The stack registry and per-stack configuration resolution
//! - The template materializer (binary-safe copy, textual rendering)
//! - Thin wrappers for the external collaborators (installer, git,
//!   deployment CLIs)
//!
//! # Examples
//!
//! ## Resolve a stack and materialize it
//!
//! ```no_run
//! use armature_scaffold::{config, Answers, Materializer, PackageManager, StackRegistry, TemplateSource};
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = TemplateSource::embedded();
//! let registry = StackRegistry::load(&source)?;
//!
//! let resolved = config::resolve(&source, &registry, "vanilla")?;
//! let answers = Answers::new("My App", "vanilla", PackageManager::Npm, true, None)?;
//!
//! let materializer = Materializer::new(&source, "my-app");
//! materializer.materialize(&resolved, &answers.context())?;
//! # Ok(())
//! # }
//! ```

pub mod answers;
pub mod config;
pub mod deploy;
pub mod error;
pub mod git;
pub mod install;
pub mod materialize;
pub mod registry;
pub mod source;

pub use answers::{slugify, Answers};
pub use config::{ResolvedStack, StackConfig};
pub use deploy::DeployTool;
pub use error::{Error, Result};
pub use install::PackageManager;
pub use materialize::Materializer;
pub use registry::StackRegistry;
pub use source::TemplateSource;
