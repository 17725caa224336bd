// src/stats.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Per-file counts as reported to the output layer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub ext: String,
    pub total_lines: u64,
    pub loc_lines: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub total_lines: u64,
    pub loc_lines: u64,
}

impl Totals {
    fn absorb(&mut self, report: &FileReport) {
        self.files += 1;
        self.total_lines += report.total_lines;
        self.loc_lines += report.loc_lines;
    }
}

/// Aggregated view: overall totals plus a per-extension breakdown.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub general: Totals,
    pub languages: BTreeMap<String, Totals>,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            summary.general.absorb(report);
            let key = if report.ext.is_empty() {
                "(none)".to_string()
            } else {
                report.ext.clone()
            };
            summary.languages.entry(key).or_default().absorb(report);
        }
        summary
    }
}
