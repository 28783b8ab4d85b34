//! Batch processing command for multiple bonus tables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use bonus_core::extract::RowParser;
use bonus_core::models::config::BonusConfig;
use bonus_core::table::{self, ProcessingSummary, TableFormat};

use super::{build_parser, load_config, OutputFormat};

/// Suffix added to output file stems; inputs carrying it are skipped.
const OUTPUT_SUFFIX: &str = "_processed";

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Keep the slot name in the bet text instead of cutting it off
    #[arg(long)]
    keep_slot_context: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    output: Option<PathBuf>,
    summary: Option<ProcessingSummary>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_table_file(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = build_parser(&config, args.keep_slot_context);
    let format = TableFormat::from(args.format);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let output = output_path(&path, args.output_dir.as_deref(), format);
        let result = process_single_file(&path, &output, format, &parser, &config);

        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(summary) => {
                debug!("Wrote output to {}", output.display());
                results.push(FileResult {
                    path,
                    output: Some(output),
                    summary: Some(summary),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        output: None,
                        summary: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing {} failed: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful: Vec<_> = results.iter().filter(|r| r.summary.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let (extracted, unparsed) = successful
        .iter()
        .filter_map(|r| r.summary)
        .fold((0, 0), |(e, u), s| (e + s.extracted, u + s.unparsed));

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );
    println!(
        "   {} rows extracted, {} left for review",
        style(extracted).green(),
        style(unparsed).yellow()
    );

    for result in &successful {
        if let Some(output) = &result.output {
            debug!("{} -> {}", result.path.display(), output.display());
        }
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Table inputs the reader understands, excluding our own outputs.
fn is_table_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");

    matches!(ext.as_str(), "csv" | "xlsx" | "xlsm" | "xls" | "ods") && !stem.ends_with(OUTPUT_SUFFIX)
}

fn output_path(input: &Path, output_dir: Option<&Path>, format: TableFormat) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("bonuses");
    let name = format!("{}{}.{}", stem, OUTPUT_SUFFIX, format.extension());

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn process_single_file(
    path: &Path,
    output: &Path,
    format: TableFormat,
    parser: &RowParser,
    config: &BonusConfig,
) -> anyhow::Result<ProcessingSummary> {
    let (rows, summary) = table::process_file(path, parser)?;
    table::write_table(output, format, &rows, &config.output)?;
    Ok(summary)
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "rows",
        "extracted",
        "unparsed",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let time = result.processing_time_ms.to_string();

        if let Some(summary) = &result.summary {
            wtr.write_record([
                filename,
                "success",
                &summary.total.to_string(),
                &summary.extracted.to_string(),
                &summary.unparsed.to_string(),
                &time,
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                &time,
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_table_file() {
        assert!(is_table_file(Path::new("in/bonuses.xlsx")));
        assert!(is_table_file(Path::new("bonuses.CSV")));
        assert!(!is_table_file(Path::new("bonuses_processed.csv")));
        assert!(!is_table_file(Path::new("notes.txt")));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("in/march.xlsx"), None, TableFormat::Csv),
            PathBuf::from("in/march_processed.csv")
        );
        assert_eq!(
            output_path(Path::new("in/march.csv"), Some(Path::new("out")), TableFormat::Xlsx),
            PathBuf::from("out/march_processed.xlsx")
        );
    }
}
