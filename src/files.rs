// src/files.rs
use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;

use crate::config::{Config, Target};

/// A file selected for scanning, with its lowercased extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub ext: String,
}

/// Collect the files to scan for the configured target.
///
/// Walk errors on individual entries (permission problems, dangling links)
/// are reported and skipped; they never abort the collection.
pub fn collect_candidates(config: &Config) -> Result<Vec<Candidate>> {
    match &config.target {
        Target::File(path) => Ok(vec![Candidate { path: path.clone(), ext: extension_of(path) }]),
        Target::Dir(root) => walk_directory(root, config),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default()
}

fn walk_directory(root: &Path, config: &Config) -> Result<Vec<Candidate>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!config.hidden)
        .follow_links(false)
        .max_depth(if config.recurse { config.max_depth } else { Some(1) });

    let filters = config.filters.clone();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
            return true;
        }
        filters.accept_dir(&entry.file_name().to_string_lossy())
    });

    let mut candidates = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("[warn] {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let ext = extension_of(&path);
        let name =
            path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        if !config.filters.accept_file(&name, &ext) {
            continue;
        }
        candidates.push(Candidate { path, ext });
    }

    // Deterministic order regardless of filesystem enumeration.
    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}
