//! CLI command for batch scanning model trees

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{print_done, print_step, simple_bar, CUBE, LOOKING_GLASS};
use crate::scan::{find_model_files, scan_files, ModelFileKind, ScanReport};

pub fn execute(source: &Path, json: bool, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();

    if !quiet && !json {
        print_step(1, 2, LOOKING_GLASS, "Searching for model files...");
    }

    let files = find_model_files(source)?;

    if files.is_empty() {
        if json {
            println!("{}", serde_json::to_string_pretty(&ScanReport::default())?);
        } else {
            println!("No model files found in: {}", source.display());
        }
        return Ok(());
    }

    if !quiet && !json {
        print_step(2, 2, CUBE, "Decoding headers...");
    }

    let report = if quiet || json {
        scan_files(&files, |_, _, _| {})
    } else {
        let pb = simple_bar(files.len() as u64, "Decoding");
        let report = scan_files(&files, |current, _, path| {
            pb.set_position(current as u64);
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                pb.set_message(name.to_string());
            }
        });
        pb.finish_and_clear();
        report
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("Scan complete:");
    println!("  Scanned: {}", report.scanned);
    println!("  Decoded: {}", report.models.len());
    println!("  Skipped: {}", report.skipped.len());
    println!("  Failed:  {}", report.failures.len());

    // Version census over the decoded headers
    let mut mdl_versions: BTreeMap<i64, usize> = BTreeMap::new();
    let mut vtx_versions: BTreeMap<i64, usize> = BTreeMap::new();
    for model in &report.models {
        match model.kind {
            ModelFileKind::Mdl => *mdl_versions.entry(model.version).or_insert(0) += 1,
            ModelFileKind::Vtx => *vtx_versions.entry(model.version).or_insert(0) += 1,
        }
    }

    if !report.models.is_empty() {
        println!();
        println!("Headers by version:");
        for (version, count) in &mdl_versions {
            println!("  {:8} {:>6} files", format!("mdl v{version}"), count);
        }
        for (version, count) in &vtx_versions {
            println!("  {:8} {:>6} files", format!("vtx v{version}"), count);
        }
    }

    if !report.failures.is_empty() {
        println!();
        println!("Failures:");
        for (path, message) in &report.failures {
            println!("  {}: {message}", path.display());
        }
    }

    if !quiet {
        println!();
        print_done(started.elapsed());
    }

    Ok(())
}
