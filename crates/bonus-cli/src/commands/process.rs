//! Process command - extract bonus terms from a single table.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use bonus_core::models::bonus::ProcessedRow;
use bonus_core::table::{self, ProcessingSummary, TableFormat};

use super::{build_parser, load_config, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input table (CSV, XLSX, XLS or ODS)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from output extension, else CSV)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep the slot name in the bet text instead of cutting it off
    #[arg(long)]
    keep_slot_context: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let format = args
        .format
        .map(TableFormat::from)
        .or_else(|| args.output.as_deref().and_then(TableFormat::from_path))
        .unwrap_or(TableFormat::Csv);

    if format == TableFormat::Xlsx && args.output.is_none() {
        anyhow::bail!("XLSX output needs a file, pass --output");
    }

    let rows = table::read_rows(&args.input)?;
    let parser = build_parser(&config, args.keep_slot_context);

    // Create progress bar
    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows")?
            .progress_chars("##-"),
    );

    let processed: Vec<ProcessedRow> = rows
        .iter()
        .map(|row| {
            let result = table::process_row(&parser, row);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let summary = ProcessingSummary::from_rows(&processed);

    // Write output
    if let Some(output_path) = &args.output {
        table::write_table(output_path, format, &processed, &config.output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
        print_summary(&mut io::stdout(), &summary)?;
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match format {
            TableFormat::Csv => table::write_csv(&mut out, &processed, &config.output)?,
            TableFormat::Json => {
                table::write_json(&mut out, &processed)?;
                writeln!(out)?;
            }
            TableFormat::Xlsx => anyhow::bail!("XLSX output needs a file, pass --output"),
        }
        out.flush()?;
        print_summary(&mut io::stderr(), &summary)?;
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_summary(out: &mut impl Write, summary: &ProcessingSummary) -> io::Result<()> {
    writeln!(
        out,
        "{} Processed {} rows: {} extracted, {} left for review",
        style("ℹ").blue(),
        summary.total,
        style(summary.extracted).green(),
        style(summary.unparsed).yellow()
    )
}
