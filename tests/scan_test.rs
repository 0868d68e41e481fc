//! Batch scanning tests over a real directory tree

mod common;

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::{mdl_fixture, vtx_fixture, FIXTURE_NAME};
use macsource::prelude::*;
use tempfile::TempDir;

fn build_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("models/sub")).unwrap();
    fs::create_dir_all(root.join("textures")).unwrap();

    fs::write(root.join("models/crate01.mdl"), mdl_fixture(49)).unwrap();
    fs::write(root.join("models/crate01.dx90.vtx"), vtx_fixture(7)).unwrap();
    fs::write(root.join("models/sub/old.vtx"), vtx_fixture(6)).unwrap();
    fs::write(root.join("models/WEIRD.MDL"), mdl_fixture(36)).unwrap();

    // Foreign data wearing the extension
    fs::write(root.join("textures/not_a_model.mdl"), b"JUNKJUNKJUNKJUNK").unwrap();

    // Recognized family, unknown version
    let mut broken = Vec::new();
    broken.extend_from_slice(b"IDST");
    broken.extend_from_slice(&53u32.to_le_bytes());
    fs::write(root.join("models/broken.mdl"), broken).unwrap();

    fs::write(root.join("readme.txt"), "not a model").unwrap();

    temp
}

#[test]
fn test_find_model_files() {
    let temp = build_tree();
    let files = find_model_files(temp.path()).unwrap();

    assert_eq!(files.len(), 6);
    assert!(files.windows(2).all(|w| w[0] <= w[1]), "results are sorted");

    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert!(names.contains(&"WEIRD.MDL".to_string()));
    assert!(names.contains(&"crate01.dx90.vtx".to_string()));
    assert!(!names.contains(&"readme.txt".to_string()));
}

#[test]
fn test_scan_classifies_files() {
    // Surface per-file decode warnings while scanning
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let temp = build_tree();
    let report = scan_directory(temp.path()).unwrap();

    assert_eq!(report.scanned, 6);
    assert_eq!(report.models.len(), 4);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.failures.len(), 1);

    assert!(report.skipped[0].ends_with("not_a_model.mdl"));

    let (failed_path, message) = &report.failures[0];
    assert!(failed_path.ends_with("broken.mdl"));
    assert!(message.contains("unsupported MDL version: 53"), "{message}");

    let by_name = |name: &str| {
        report
            .models
            .iter()
            .find(|m| m.path.file_name().unwrap() == name)
            .unwrap()
    };

    let mdl = by_name("crate01.mdl");
    assert_eq!(mdl.kind, ModelFileKind::Mdl);
    assert_eq!(mdl.version, 49);
    assert_eq!(mdl.name, FIXTURE_NAME);

    let vtx = by_name("crate01.dx90.vtx");
    assert_eq!(vtx.kind, ModelFileKind::Vtx);
    assert_eq!(vtx.version, 7);
    assert_eq!(vtx.name, "");

    // Companion files share the model checksum
    assert_eq!(vtx.checksum, mdl.checksum);

    assert_eq!(by_name("WEIRD.MDL").version, 36);
    assert_eq!(by_name("old.vtx").version, 6);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["scanned"], 6);
}

#[test]
fn test_scan_missing_directory() {
    let err = scan_directory("/definitely/not/here-macsource").unwrap_err();
    assert!(matches!(err, Error::WalkDirError(_)));
}

#[test]
fn test_scan_files_reports_progress() {
    let temp = build_tree();
    let files = find_model_files(temp.path()).unwrap();

    let calls = AtomicUsize::new(0);
    let report = scan_files(&files, |current, total, path| {
        calls.fetch_add(1, Ordering::SeqCst);
        assert!(current >= 1 && current <= total);
        assert_eq!(total, files.len());
        assert!(path.exists());
    });

    assert_eq!(calls.load(Ordering::SeqCst), files.len());
    assert_eq!(report.scanned, files.len());
}

#[test]
fn test_scan_empty_directory() {
    let temp = TempDir::new().unwrap();
    let report = scan_directory(temp.path()).unwrap();

    assert_eq!(report.scanned, 0);
    assert!(report.models.is_empty());
    assert!(report.skipped.is_empty());
    assert!(report.failures.is_empty());
}
