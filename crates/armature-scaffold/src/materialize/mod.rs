//! Template materializer: turns declared install-file pairs into files on
//! disk.
//!
//! For every (source, destination) pair of the resolved configuration, in
//! declaration order (common config before stack config):
//! - read the source's raw bytes from the template source tree
//! - classify binary vs. text with the prefix sniff
//! - binary: copy verbatim; text: render placeholders and write the result
//!
//! Pairs are processed sequentially, so two pairs declaring the same
//! destination resolve deterministically: the later-declared pair's content
//! is final. Overwriting an existing destination is silent. The
//! materializer never touches paths outside the declared pairs and never
//! silently skips a failed entry.

pub mod render;
pub mod sniff;

use crate::config::ResolvedStack;
use crate::error::{Error, Result};
use crate::source::TemplateSource;
use camino::{Utf8Path, Utf8PathBuf};
use tera::Context;
use tracing::{debug, trace};

/// Materializes install-file declarations under a destination root.
#[derive(Debug)]
pub struct Materializer<'a> {
    source: &'a TemplateSource,
    dest_root: Utf8PathBuf,
}

impl<'a> Materializer<'a> {
    /// Create a materializer writing beneath `dest_root`
    pub fn new(source: &'a TemplateSource, dest_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source,
            dest_root: dest_root.into(),
        }
    }

    /// Write every declared pair of `resolved` to disk.
    ///
    /// Returns the destination paths in write order. Fails on the first
    /// missing source, unrenderable template, or unwritable destination,
    /// naming the offending path.
    pub fn materialize(&self, resolved: &ResolvedStack, ctx: &Context) -> Result<Vec<Utf8PathBuf>> {
        let mut written = Vec::with_capacity(resolved.install_files.len());

        for (src, dest_rel) in &resolved.install_files {
            written.push(self.materialize_pair(src, dest_rel, ctx)?);
        }

        debug!(
            stack = %resolved.stack,
            files = written.len(),
            dest = %self.dest_root,
            "materialized install files"
        );
        Ok(written)
    }

    fn materialize_pair(
        &self,
        src: &Utf8Path,
        dest_rel: &Utf8Path,
        ctx: &Context,
    ) -> Result<Utf8PathBuf> {
        let bytes = self.source.read(src)?;
        let dest = self.dest_root.join(dest_rel);

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::destination_write(parent.as_str(), e))?;
        }

        let output = match std::str::from_utf8(&bytes) {
            Ok(text) if !sniff::is_binary(&bytes) => {
                trace!(%src, %dest, "rendering text template");
                render::render_str(text, ctx)
                    .map_err(|e| Error::template_render(src.as_str(), error_chain(&e)))?
                    .into_bytes()
            }
            // NUL in the prefix or not valid UTF-8: copy verbatim
            _ => {
                trace!(%src, %dest, "copying binary content verbatim");
                bytes
            }
        };

        std::fs::write(&dest, output).map_err(|e| Error::destination_write(dest.as_str(), e))?;
        Ok(dest)
    }
}

/// Flatten a tera error and its source chain into one message, so the
/// offending variable name survives into the reported error.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
