use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use demolens_packet::formatter::{OutputWriter, ReportFormatter, StatsFormatter};
use demolens_packet::{FragmentAggregator, FragmentReport, Summary};

use crate::args::{ArgsAnalyze, OutputFormat};
use crate::config::Config;

pub fn run(args: &ArgsAnalyze, config: &Config) -> Result<()> {
    let format = args.format.unwrap_or(config.output_format);
    let aggregator = FragmentAggregator::new(args.apply(config.analyzer.clone()));
    let files = collect_inputs(&args.input_paths)?;
    info!("🔍 Analyzing {} fragment file(s)", files.len());

    let mut writer = OutputWriter::new(args.output_path.as_deref().map(Path::new))?;
    let formatter = ReportFormatter::new(!args.no_packets);
    let mut combined = Summary::default();
    let mut entries = Vec::new();
    let mut failures = 0;

    for path in &files {
        let report = match analyze_file(&aggregator, path) {
            Ok(report) => report,
            // a single input is fatal, in a batch it is reported and skipped
            Err(e) if files.len() > 1 => {
                warn!("{:#}", e);
                failures += 1;
                match format {
                    OutputFormat::Text => {
                        writer.writeln(&format!("=== Fragment: {} ===", path.display()))?;
                        writer.writeln(&format!("Error: {:#}", e))?;
                        writer.writeln("")?;
                    }
                    OutputFormat::Json => entries.push(failed_entry(path, &e)),
                }
                continue;
            }
            Err(e) => return Err(e),
        };
        combined.merge(&report.summary);
        match format {
            OutputFormat::Text => {
                formatter.format_report(&mut writer, &path.display().to_string(), &report)?
            }
            OutputFormat::Json if files.len() == 1 => writer.writeln(&report.to_json_pretty()?)?,
            OutputFormat::Json => entries.push(report_entry(path, &report)),
        }
    }

    match format {
        OutputFormat::Json if files.len() > 1 => {
            writer.writeln(&serde_json::to_string_pretty(&entries)?)?;
        }
        OutputFormat::Text if files.len() > 1 => {
            writer.writeln("=== COMBINED STATISTICS ===")?;
            StatsFormatter::format_summary(&mut writer, &combined)?;
        }
        _ => {}
    }
    writer.flush()?;

    info!(
        "✅ Analysis completed: {} chunks with errors, {} packets ({} parse errors, {} decode errors), {} unreadable file(s)",
        combined.errors,
        combined.total_packets,
        combined.packet_errors,
        combined.packet_decode_errors,
        failures
    );
    Ok(())
}

fn analyze_file(aggregator: &FragmentAggregator, path: &Path) -> Result<FragmentReport> {
    let data = fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    info!("📄 {} ({} bytes)", path.display(), data.len());
    aggregator
        .analyze_bytes(&data)
        .with_context(|| format!("Failed to frame fragment: {}", path.display()))
}

fn report_entry(path: &Path, report: &FragmentReport) -> Value {
    json!({ "file": path.display().to_string(), "report": report })
}

fn failed_entry(path: &Path, error: &anyhow::Error) -> Value {
    json!({ "file": path.display().to_string(), "error": format!("{:#}", error) })
}

/// Expand directories into their files, sorted by name.
fn collect_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let mut entries: Vec<_> = fs::read_dir(path)
                .with_context(|| format!("Failed to read directory: {}", path.display()))?
                .filter_map(|entry| {
                    let path = entry.ok()?.path();
                    path.is_file().then_some(path)
                })
                .collect();
            entries.sort();
            files.extend(entries);
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            anyhow::bail!("Input path is neither file nor directory: {}", input);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_inputs() {
        let dir = std::env::temp_dir().join(format!("demolens-inputs-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.bin"), [0u8]).unwrap();
        fs::write(dir.join("a.bin"), [0u8]).unwrap();

        let files = collect_inputs(&[dir.display().to_string()]).unwrap();
        assert_eq!(files, [dir.join("a.bin"), dir.join("b.bin")]);

        let missing = dir.join("missing.bin").display().to_string();
        assert!(collect_inputs(&[missing]).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_analyze_file_reports_framing_errors() {
        let dir = std::env::temp_dir().join(format!("demolens-frame-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.bin");
        let bad = dir.join("bad.bin");
        // DEM_SyncTick with an empty body
        fs::write(&good, [0x03, 0x00, 0x00]).unwrap();
        fs::write(&bad, [0x03, 0x00, 0x10]).unwrap();

        let aggregator = FragmentAggregator::default();
        let report = analyze_file(&aggregator, &good).unwrap();
        assert_eq!(report.total_chunks, 1);
        let err = analyze_file(&aggregator, &bad).unwrap_err();
        assert!(err.to_string().starts_with("Failed to frame fragment"));

        let entry = report_entry(&good, &report);
        assert_eq!(entry["file"], good.display().to_string());
        assert_eq!(entry["report"]["totalChunks"], 1);

        let entry = failed_entry(&bad, &err);
        assert_eq!(entry["file"], bad.display().to_string());
        assert!(entry.get("report").is_none());
        let message = entry["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to frame fragment"));
        assert!(message.contains("declares 16 bytes"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
