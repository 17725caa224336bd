// src/output.rs
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::app::RunReport;
use crate::args::OutputFormat;
use crate::config::Config;
use crate::stats::{FileReport, Summary, Totals};

/// Emit the run report in the configured format.
pub fn emit(report: &RunReport, config: &Config) -> Result<()> {
    let mut writer = OutputWriter::create(config)?;
    match config.format {
        OutputFormat::Text => output_text(report, config.verbose, &mut writer)?,
        OutputFormat::Json => output_json(report, config.verbose, &mut writer)?,
        OutputFormat::Csv => output_csv(report, config.verbose, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    fn create(config: &Config) -> Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

fn output_text(report: &RunReport, verbose: bool, out: &mut impl Write) -> Result<()> {
    let Summary { general, languages } = &report.summary;
    writeln!(out, "GENERAL:")?;
    writeln!(out, "files : {}", general.files)?;
    writeln!(out, "total : {}", general.total_lines)?;
    writeln!(out, "loc : {}", general.loc_lines)?;

    if !languages.is_empty() {
        writeln!(out)?;
        writeln!(out, "LANGUAGE METADATA")?;
        write_language_table(languages, out)?;
    }

    if verbose && !report.files.is_empty() {
        writeln!(out)?;
        writeln!(out, "FILES")?;
        for file in &report.files {
            writeln!(
                out,
                "{}  {}  {}",
                file.path.display(),
                file.total_lines,
                file.loc_lines
            )?;
        }
    }
    Ok(())
}

fn write_language_table(
    languages: &std::collections::BTreeMap<String, Totals>,
    out: &mut impl Write,
) -> Result<()> {
    let headers = ["Extension", "Files", "Total", "LOC"];
    let rows: Vec<[String; 4]> = languages
        .iter()
        .map(|(ext, totals)| {
            [
                ext.clone(),
                totals.files.to_string(),
                totals.total_lines.to_string(),
                totals.loc_lines.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    writeln!(
        out,
        "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
        headers[0], headers[1], headers[2], headers[3],
        w0 = widths[0], w1 = widths[1], w2 = widths[2], w3 = widths[3],
    )?;
    writeln!(out, "{}", "-".repeat(widths.iter().sum::<usize>() + 6))?;
    for row in &rows {
        writeln!(
            out,
            "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
            row[0], row[1], row[2], row[3],
            w0 = widths[0], w1 = widths[1], w2 = widths[2], w3 = widths[3],
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    general: &'a Totals,
    languages: &'a std::collections::BTreeMap<String, Totals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [FileReport]>,
}

fn output_json(report: &RunReport, verbose: bool, out: &mut impl Write) -> Result<()> {
    let payload = JsonReport {
        general: &report.summary.general,
        languages: &report.summary.languages,
        files: verbose.then_some(report.files.as_slice()),
    };
    serde_json::to_writer_pretty(&mut *out, &payload)?;
    writeln!(out)?;
    Ok(())
}

fn output_csv(report: &RunReport, verbose: bool, out: &mut impl Write) -> Result<()> {
    if verbose {
        writeln!(out, "path,extension,total_lines,loc_lines")?;
        for file in &report.files {
            writeln!(
                out,
                "{},{},{},{}",
                file.path.display(),
                file.ext,
                file.total_lines,
                file.loc_lines
            )?;
        }
        return Ok(());
    }
    writeln!(out, "extension,files,total_lines,loc_lines")?;
    for (ext, totals) in &report.summary.languages {
        writeln!(
            out,
            "{},{},{},{}",
            ext, totals.files, totals.total_lines, totals.loc_lines
        )?;
    }
    let general = &report.summary.general;
    writeln!(
        out,
        "TOTAL,{},{},{}",
        general.files, general.total_lines, general.loc_lines
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_report() -> RunReport {
        let files = vec![
            FileReport {
                path: PathBuf::from("a.c"),
                ext: "c".into(),
                total_lines: 10,
                loc_lines: 7,
            },
            FileReport {
                path: PathBuf::from("b.py"),
                ext: "py".into(),
                total_lines: 4,
                loc_lines: 2,
            },
        ];
        let summary = Summary::from_reports(&files);
        RunReport { files, errors: Vec::new(), summary }
    }

    #[test]
    fn text_output_contains_general_block_and_table() {
        let mut buf = Vec::new();
        output_text(&sample_report(), false, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("GENERAL:"));
        assert!(text.contains("total : 14"));
        assert!(text.contains("loc : 9"));
        assert!(text.contains("LANGUAGE METADATA"));
        assert!(text.contains("Extension"));
        assert!(!text.contains("FILES"));
    }

    #[test]
    fn verbose_text_lists_files() {
        let mut buf = Vec::new();
        output_text(&sample_report(), true, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("FILES"));
        assert!(text.contains("a.c"));
    }

    #[test]
    fn json_output_round_trips() {
        let mut buf = Vec::new();
        output_json(&sample_report(), false, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["general"]["files"], 2);
        assert_eq!(value["languages"]["c"]["loc_lines"], 7);
        assert!(value.get("files").is_none());

        let mut buf = Vec::new();
        output_json(&sample_report(), true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["files"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn csv_output_ends_with_total_row() {
        let mut buf = Vec::new();
        output_csv(&sample_report(), false, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let last = text.lines().last().unwrap();
        assert_eq!(last, "TOTAL,2,14,9");
    }

    #[test]
    fn verbose_csv_lists_per_file_rows() {
        let mut buf = Vec::new();
        output_csv(&sample_report(), true, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("path,extension,total_lines,loc_lines"));
        assert!(text.contains("b.py,py,4,2"));
    }
}
