// src/config.rs
use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use count_loc_core::DelimiterSpec;
use count_loc_infra::IoStrategy;
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::args::{Args, OutputFormat};
use crate::languages::LanguageTable;

/// What the user asked to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Dir(PathBuf),
}

/// Resolved runtime configuration, assembled once from the CLI surface.
#[derive(Debug)]
pub struct Config {
    pub target: Target,
    pub min_chars: usize,
    /// Explicit delimiter overrides; when present, the language table is
    /// bypassed for every file.
    pub overrides: Option<DelimiterSpec>,
    pub strategy: IoStrategy,
    pub recurse: bool,
    pub max_depth: Option<usize>,
    pub hidden: bool,
    pub filters: Filters,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub languages: LanguageTable,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let target = match (args.file, args.dir) {
            (Some(file), None) => Target::File(file),
            (None, Some(dir)) => Target::Dir(dir),
            _ => bail!("exactly one of --file or --dir is required"),
        };

        let overrides = build_overrides(
            args.single.as_deref(),
            args.multi_start.as_deref(),
            args.multi_end.as_deref(),
        )?;

        let filters = Filters::build(
            &args.include_file,
            &args.include_type,
            &args.include_dir,
            &args.exclude_file,
            &args.exclude_type,
            &args.exclude_dir,
        )?;

        let languages = match &args.languages {
            Some(path) => LanguageTable::load(path)?,
            None => LanguageTable::embedded()?,
        };

        Ok(Self {
            target,
            min_chars: args.min_chars,
            overrides,
            strategy: args.mode.into(),
            recurse: args.recurse,
            max_depth: args.max_depth,
            hidden: args.hidden,
            filters,
            format: args.format,
            output: args.output,
            verbose: args.verbose,
            languages,
        })
    }
}

fn build_overrides(
    single: Option<&str>,
    multi_start: Option<&str>,
    multi_end: Option<&str>,
) -> Result<Option<DelimiterSpec>> {
    if single.is_none() && multi_start.is_none() && multi_end.is_none() {
        return Ok(None);
    }
    let spec = DelimiterSpec::new(
        single.map(|s| s.as_bytes().to_vec()),
        multi_start.map(|s| s.as_bytes().to_vec()),
        multi_end.map(|s| s.as_bytes().to_vec()),
    )
    .context("invalid delimiter overrides")?;
    Ok(Some(spec))
}

/// Include/exclude rules at the file and directory level.
///
/// Inclusion and exclusion are mutually exclusive, mirroring the CLI
/// contract; each axis (name, extension, directory) defaults to accept.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    include_files: Option<GlobSet>,
    include_types: Option<HashSet<String>>,
    include_dirs: Option<GlobSet>,
    exclude_files: Option<GlobSet>,
    exclude_types: Option<HashSet<String>>,
    exclude_dirs: Option<GlobSet>,
}

impl Filters {
    pub fn build(
        include_file: &[String],
        include_type: &[String],
        include_dir: &[String],
        exclude_file: &[String],
        exclude_type: &[String],
        exclude_dir: &[String],
    ) -> Result<Self> {
        let inclusion =
            !include_file.is_empty() || !include_type.is_empty() || !include_dir.is_empty();
        let exclusion =
            !exclude_file.is_empty() || !exclude_type.is_empty() || !exclude_dir.is_empty();
        if inclusion && exclusion {
            bail!("inclusion (--include-*) and exclusion (--exclude-*) cannot be combined");
        }

        Ok(Self {
            include_files: build_globset(include_file)?,
            include_types: build_type_set(include_type),
            include_dirs: build_globset(include_dir)?,
            exclude_files: build_globset(exclude_file)?,
            exclude_types: build_type_set(exclude_type),
            exclude_dirs: build_globset(exclude_dir)?,
        })
    }

    pub fn accept_file(&self, name: &str, ext: &str) -> bool {
        let name_ok = match (&self.include_files, &self.exclude_files) {
            (Some(set), _) => set.is_match(name),
            (None, Some(set)) => !set.is_match(name),
            (None, None) => true,
        };
        let ext_lower = ext.to_lowercase();
        let type_ok = match (&self.include_types, &self.exclude_types) {
            (Some(set), _) => set.contains(&ext_lower),
            (None, Some(set)) => !set.contains(&ext_lower),
            (None, None) => true,
        };
        name_ok && type_ok
    }

    pub fn accept_dir(&self, name: &str) -> bool {
        match (&self.include_dirs, &self.exclude_dirs) {
            (Some(set), _) => set.is_match(name),
            (None, Some(set)) => !set.is_match(name),
            (None, None) => true,
        }
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(
            Glob::new(pattern).with_context(|| format!("invalid glob pattern '{pattern}'"))?,
        );
    }
    Ok(Some(builder.build()?))
}

fn build_type_set(types: &[String]) -> Option<HashSet<String>> {
    if types.is_empty() {
        return None;
    }
    Some(
        types
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect(),
    )
}
