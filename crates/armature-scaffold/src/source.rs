//! Template source trees: embedded assets and on-disk directories.
//!
//! The shipped stacks are compiled into the binary with rust-embed. An
//! on-disk directory can be substituted at runtime (`--templates <dir>`),
//! which is also how the test suite builds throwaway stacks.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// Where template and configuration content is read from.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Assets compiled into the binary
    Embedded,
    /// A directory with the same relative layout as the embedded assets
    Dir(Utf8PathBuf),
}

impl TemplateSource {
    /// The source tree shipped inside the binary
    pub fn embedded() -> Self {
        Self::Embedded
    }

    /// A source tree rooted at an on-disk directory
    pub fn from_dir(root: impl Into<Utf8PathBuf>) -> Self {
        Self::Dir(root.into())
    }

    /// Read a file's raw bytes by its source-relative path.
    ///
    /// A missing or unreadable file is reported as [`Error::TemplateNotFound`]
    /// naming the offending source path.
    pub fn read(&self, rel: &Utf8Path) -> Result<Vec<u8>> {
        match self {
            Self::Embedded => Assets::get(rel.as_str())
                .map(|f| f.data.into_owned())
                .ok_or_else(|| Error::template_not_found(rel.as_str())),
            Self::Dir(root) => {
                let path = root.join(rel);
                std::fs::read(&path).map_err(|_| Error::template_not_found(path.as_str()))
            }
        }
    }

    /// Read a file as UTF-8 text (configuration documents).
    pub fn read_to_string(&self, rel: &Utf8Path) -> Result<String> {
        let bytes = self.read(rel)?;
        String::from_utf8(bytes)
            .map_err(|_| Error::template_render(rel.as_str(), "not valid UTF-8"))
    }

    /// Whether a source-relative path exists in this tree.
    pub fn exists(&self, rel: &Utf8Path) -> bool {
        match self {
            Self::Embedded => Assets::get(rel.as_str()).is_some(),
            Self::Dir(root) => root.join(rel).exists(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;

    #[test]
    fn test_embedded_registry_present() {
        let source = TemplateSource::embedded();
        assert!(source.exists(Utf8Path::new("stacks.json")));
        assert!(source.exists(Utf8Path::new("config/common.json")));
    }

    #[test]
    fn test_embedded_missing_file_names_path() {
        let source = TemplateSource::embedded();
        let err = source.read(Utf8Path::new("files/nope.txt")).unwrap_err();
        assert!(err.to_string().contains("files/nope.txt"));
    }

    #[test]
    fn test_dir_source_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(tmp.path()).unwrap();
        std::fs::write(root.join("hello.txt"), b"hi").unwrap();

        let source = TemplateSource::from_dir(root.to_owned());
        assert!(source.exists(Utf8Path::new("hello.txt")));
        assert_eq!(source.read(Utf8Path::new("hello.txt")).unwrap(), b"hi");
        assert!(source.read(Utf8Path::new("absent.txt")).is_err());
    }
}
