// src/app.rs
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use count_loc_core::DelimiterSpec;
use count_loc_infra::{ScanError, scan_file};
use rayon::prelude::*;

use crate::config::{Config, Target};
use crate::files::{self, Candidate};
use crate::stats::{FileReport, Summary};

/// Outcome of one run: per-file reports, per-file failures, aggregates.
#[derive(Debug)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub errors: Vec<(PathBuf, ScanError)>,
    pub summary: Summary,
}

/// Scan everything the configuration selects.
///
/// Files are independent, so scanning is parallel with no shared state.
/// A directory run reports per-file I/O failures and keeps going; a
/// single-file run propagates the failure.
pub fn run(config: &Config) -> Result<RunReport> {
    let candidates = files::collect_candidates(config)?;
    let jobs = resolve_jobs(candidates, config)?;

    let outcomes: Vec<_> = jobs
        .into_par_iter()
        .map(|(candidate, spec)| {
            let scanned = scan_file(&candidate.path, &spec, config.min_chars, config.strategy);
            (candidate, scanned)
        })
        .collect();

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for (candidate, scanned) in outcomes {
        match scanned {
            Ok(result) => reports.push(FileReport {
                path: candidate.path,
                ext: candidate.ext,
                total_lines: result.total_lines,
                loc_lines: result.loc_lines,
            }),
            Err(err) => errors.push((candidate.path, err)),
        }
    }

    if matches!(config.target, Target::File(_)) {
        if let Some((_, err)) = errors.pop() {
            return Err(err).context("failed to scan target file");
        }
    }

    let summary = Summary::from_reports(&reports);
    Ok(RunReport { files: reports, errors, summary })
}

/// Pair each candidate with its delimiter spec.
///
/// Explicit overrides apply to every file. Otherwise the language table
/// decides; during directory walks unknown extensions are skipped with a
/// warning and ignored extensions silently, while an explicitly named
/// file must resolve or the run fails.
fn resolve_jobs(
    candidates: Vec<Candidate>,
    config: &Config,
) -> Result<Vec<(Candidate, DelimiterSpec)>> {
    let mut jobs = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if let Some(spec) = &config.overrides {
            jobs.push((candidate, spec.clone()));
            continue;
        }
        let walking = matches!(config.target, Target::Dir(_));
        if walking && config.languages.is_ignored(&candidate.ext) {
            continue;
        }
        match config.languages.resolve(&candidate.ext) {
            Some(spec) => jobs.push((candidate, spec.clone())),
            None if walking => {
                eprintln!(
                    "[warn] skipping {}: no delimiter data for extension '{}'",
                    candidate.path.display(),
                    candidate.ext
                );
            }
            None => bail!(
                "no delimiter data for extension '{}' \
                 (supply --single / --multi-start / --multi-end)",
                candidate.ext
            ),
        }
    }
    Ok(jobs)
}
