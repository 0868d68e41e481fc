//! Batch model scanning
//!
//! This module provides functions for walking a content tree and decoding
//! every studio model header in it, in parallel. Files without the studio
//! magic are skipped as "not model files"; files that belong to a known
//! family but fail to decode are recorded as failures without stopping
//! the batch.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::formats::{mdl, vtx};
use crate::session::ParseSession;

/// Family of a successfully decoded model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelFileKind {
    /// Studio model header (.mdl)
    Mdl,
    /// Strip mesh companion (.vtx)
    Vtx,
}

/// One successfully decoded model file.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    /// Path of the scanned file.
    pub path: PathBuf,
    /// Decoded family.
    pub kind: ModelFileKind,
    /// Decoded format version.
    pub version: i64,
    /// Checksum linking a model to its companion files.
    pub checksum: i32,
    /// Model name from the header (empty for VTX files).
    pub name: String,
}

/// Result of a batch scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Number of files visited.
    pub scanned: usize,
    /// Successfully decoded headers.
    pub models: Vec<ModelSummary>,
    /// Files that are not studio models at all (no IDST magic).
    pub skipped: Vec<PathBuf>,
    /// Files that were recognized but failed to decode.
    pub failures: Vec<(PathBuf, String)>,
}

/// Find all model files (.mdl and .vtx) in a directory recursively
///
/// # Arguments
/// * `dir` - Directory to search for model files
///
/// # Returns
/// A sorted list of paths to model files found in the directory tree.
/// Multi-dot names like `gman.dx90.vtx` are matched by their final
/// extension.
///
/// # Errors
/// Returns [`Error::WalkDirError`] if the directory cannot be walked,
/// including when `dir` itself does not exist.
pub fn find_model_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path.extension().is_some_and(|ext| {
                ext.eq_ignore_ascii_case("mdl") || ext.eq_ignore_ascii_case("vtx")
            })
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Scan a directory tree, decoding every model header found
///
/// # Arguments
/// * `dir` - Directory to scan
///
/// # Returns
/// Summary of the scan. Decode problems never abort the batch; see
/// [`ScanReport`] for how each file lands.
///
/// # Errors
/// Only directory traversal itself can fail here.
pub fn scan_directory<P: AsRef<Path>>(dir: P) -> Result<ScanReport> {
    let files = find_model_files(dir)?;
    Ok(scan_files(&files, |_, _, _| {}))
}

/// Decode a list of model files in parallel
///
/// Each file gets its own reader and parse session, so decodes share no
/// state across worker threads.
///
/// # Arguments
/// * `files` - Model files to decode
/// * `progress` - Callback receiving (current, total, path) per file
///
/// # Returns
/// Summary of the batch.
pub fn scan_files<F>(files: &[PathBuf], progress: F) -> ScanReport
where
    F: Fn(usize, usize, &Path) + Send + Sync,
{
    let processed = AtomicUsize::new(0);
    let total = files.len();

    let outcomes: Vec<ScanOutcome> = files
        .par_iter()
        .map(|path| {
            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(current, total, path);
            scan_one(path)
        })
        .collect();

    let mut report = ScanReport {
        scanned: total,
        ..ScanReport::default()
    };
    for outcome in outcomes {
        match outcome {
            ScanOutcome::Model(summary) => report.models.push(summary),
            ScanOutcome::Skipped(path) => report.skipped.push(path),
            ScanOutcome::Failed(path, message) => report.failures.push((path, message)),
        }
    }
    report
}

enum ScanOutcome {
    Model(ModelSummary),
    Skipped(PathBuf),
    Failed(PathBuf, String),
}

fn scan_one(path: &Path) -> ScanOutcome {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => return ScanOutcome::Failed(path.to_path_buf(), e.to_string()),
    };

    let mut session = ParseSession::new();
    if is_vtx_path(path) {
        match vtx::parse_vtx_bytes_with_session(&data, &mut session) {
            Ok(header) => ScanOutcome::Model(ModelSummary {
                path: path.to_path_buf(),
                kind: ModelFileKind::Vtx,
                version: i64::from(header.version),
                checksum: header.checksum,
                name: String::new(),
            }),
            Err(e) => {
                tracing::warn!("failed to decode {}: {e}", path.display());
                ScanOutcome::Failed(path.to_path_buf(), e.to_string())
            }
        }
    } else {
        match mdl::parse_mdl_bytes_with_session(&data, &mut session) {
            Ok(header) => ScanOutcome::Model(ModelSummary {
                path: path.to_path_buf(),
                kind: ModelFileKind::Mdl,
                version: i64::from(header.version),
                checksum: header.checksum,
                name: header.name,
            }),
            // Not this family at all: skip, not an error
            Err(Error::InvalidMdlMagic(_)) => {
                tracing::debug!("skipping non-studio file {}", path.display());
                ScanOutcome::Skipped(path.to_path_buf())
            }
            Err(e) => {
                tracing::warn!("failed to decode {}: {e}", path.display());
                ScanOutcome::Failed(path.to_path_buf(), e.to_string())
            }
        }
    }
}

fn is_vtx_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vtx"))
}
