//! Integration tests for the scaffolding pipeline
//!
//! These tests drive the complete flow: registry load, configuration
//! resolution and merge, and materialization into a destination tree.

use armature_scaffold::{
    config, Answers, DeployTool, Materializer, PackageManager, StackRegistry, TemplateSource,
};
use camino::{Utf8Path, Utf8PathBuf};

fn answers(title: &str, stack: &str) -> Answers {
    Answers::new(
        title,
        stack,
        PackageManager::Npm,
        true,
        Some(DeployTool::Surge),
    )
    .unwrap()
}

fn tmp_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap()
}

#[test]
fn test_embedded_registry_lists_shipped_stacks() {
    let registry = StackRegistry::load(&TemplateSource::embedded()).unwrap();
    let ids = registry.ids();

    assert!(ids.contains(&"vanilla"));
    assert!(ids.contains(&"react"));
    assert!(ids.contains(&"svelte"));
}

#[test]
fn test_every_embedded_install_file_exists() {
    let source = TemplateSource::embedded();
    let registry = StackRegistry::load(&source).unwrap();

    for id in registry.ids() {
        let resolved = config::resolve(&source, &registry, id).unwrap();
        for src in resolved.install_files.keys() {
            assert!(source.exists(src), "stack {id} declares missing source {src}");
        }
    }
}

#[test]
fn test_materialize_vanilla_end_to_end() {
    let source = TemplateSource::embedded();
    let registry = StackRegistry::load(&source).unwrap();
    let resolved = config::resolve(&source, &registry, "vanilla").unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp_root(&tmp);

    let answers = answers("Demo App", "vanilla");
    let written = Materializer::new(&source, dest.clone())
        .materialize(&resolved, &answers.context())
        .unwrap();
    assert_eq!(written.len(), resolved.install_files.len());

    // Rendered text
    let readme = std::fs::read_to_string(dest.join("README.md")).unwrap();
    assert!(readme.contains("# Demo App"));
    assert!(readme.contains("npm install"));
    assert!(!readme.contains("{{"));

    let license = std::fs::read_to_string(dest.join("LICENSE")).unwrap();
    assert!(!license.contains("{{ year }}"));

    // Destination collision: the stack's package.json is declared after the
    // common one and must win.
    let manifest = std::fs::read_to_string(dest.join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"demo-app\""));
    assert!(manifest.contains("\"dev\": \"vite\""));

    // Binary round trip through the embedded tree
    let favicon_src = source
        .read(Utf8Path::new("files/common/favicon.png"))
        .unwrap();
    let favicon_dest = std::fs::read(dest.join("public/favicon.png")).unwrap();
    assert_eq!(favicon_src, favicon_dest);
    assert!(favicon_src.contains(&0u8), "favicon fixture should be binary");

    // Renamed on install: gitignore -> .gitignore
    assert!(dest.join(".gitignore").exists());
}

#[test]
fn test_materialize_is_idempotent() {
    let source = TemplateSource::embedded();
    let registry = StackRegistry::load(&source).unwrap();
    let resolved = config::resolve(&source, &registry, "react").unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp_root(&tmp);
    let answers = answers("Twice Rendered", "react");

    let materializer = Materializer::new(&source, dest.clone());
    materializer
        .materialize(&resolved, &answers.context())
        .unwrap();
    let first = std::fs::read(dest.join("src/App.jsx")).unwrap();

    materializer
        .materialize(&resolved, &answers.context())
        .unwrap();
    let second = std::fs::read(dest.join("src/App.jsx")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_stack_fails_before_any_write() {
    let src_tmp = tempfile::tempdir().unwrap();
    let root = tmp_root(&src_tmp);
    std::fs::create_dir_all(root.join("config")).unwrap();
    std::fs::write(root.join("stacks.json"), r#"{"alpha": "Alpha stack"}"#).unwrap();
    std::fs::write(
        root.join("config/common.json"),
        r#"{"installFiles": {}, "dependencies": [], "devDependencies": []}"#,
    )
    .unwrap();
    std::fs::write(
        root.join("config/alpha.json"),
        r#"{"installFiles": {}, "dependencies": [], "devDependencies": []}"#,
    )
    .unwrap();

    let source = TemplateSource::from_dir(root);
    let registry = StackRegistry::load(&source).unwrap();

    let dest_tmp = tempfile::tempdir().unwrap();
    let dest = tmp_root(&dest_tmp);

    let err = config::resolve(&source, &registry, "doesnotexist").unwrap_err();
    assert!(err.to_string().contains("alpha"));

    // Resolution failed, so nothing may have touched the destination.
    assert_eq!(std::fs::read_dir(&dest).unwrap().count(), 0);
}

#[test]
fn test_alpha_resolution_merges_common_first() {
    let src_tmp = tempfile::tempdir().unwrap();
    let root = tmp_root(&src_tmp);
    for dir in ["config", "files/common", "files/alpha"] {
        std::fs::create_dir_all(root.join(dir)).unwrap();
    }
    std::fs::write(root.join("stacks.json"), r#"{"alpha": "Alpha stack"}"#).unwrap();
    std::fs::write(
        root.join("config/common.json"),
        r#"{
            "installFiles": {"files/common/base.txt": "base.txt", "files/common/shared.txt": "shared.txt"},
            "dependencies": [],
            "devDependencies": []
        }"#,
    )
    .unwrap();
    std::fs::write(
        root.join("config/alpha.json"),
        r#"{
            "installFiles": {"files/alpha/shared.txt": "shared.txt"},
            "dependencies": [],
            "devDependencies": []
        }"#,
    )
    .unwrap();
    std::fs::write(root.join("files/common/base.txt"), "base\n").unwrap();
    std::fs::write(root.join("files/common/shared.txt"), "from common\n").unwrap();
    std::fs::write(root.join("files/alpha/shared.txt"), "from alpha\n").unwrap();

    let source = TemplateSource::from_dir(root);
    let registry = StackRegistry::load(&source).unwrap();
    let resolved = config::resolve(&source, &registry, "alpha").unwrap();

    // Common entries come first in the merged mapping.
    let first_source = resolved.install_files.keys().next().unwrap();
    assert!(first_source.as_str().starts_with("files/common/"));

    let dest_tmp = tempfile::tempdir().unwrap();
    let dest = tmp_root(&dest_tmp);
    Materializer::new(&source, dest.clone())
        .materialize(&resolved, &answers("Alpha", "alpha").context())
        .unwrap();

    // Later-declared pair wins the shared destination.
    assert_eq!(
        std::fs::read_to_string(dest.join("shared.txt")).unwrap(),
        "from alpha\n"
    );
    assert_eq!(
        std::fs::read_to_string(dest.join("base.txt")).unwrap(),
        "base\n"
    );
}
