use clap::Parser;
use papmap_tables::cli;
use papmap_tables::pipeline::{ConvertConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use papmap_tables::types::OutputLayout;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "papmap-tables")]
#[command(about = "Convert the ASCCP risk-table spreadsheets to PapMap scenario JSON")]
#[command(long_about = "PapMap risk tables - spreadsheet to JSON conversion

Reads every spreadsheet in the input directory whose name starts with a
scenario number (1-6) and writes one JSON array per scenario:

  xlsx/1-General Table for Screening_locked.xlsx   → json/scenario-1.json
  xlsx/3-General Table for Risk Following ...xlsx  ┐
  xlsx/3.1-Immunocompromised.xlsx                  ┘→ json/scenario-3.json

Files with a decimal suffix (3.1, 3.2, ...) are supplements: their rows are
appended after the base table's rows. Every scenario gets a file, even when
no spreadsheet matched (it then contains []).

OUTPUT LAYOUT:
  Records sit at their spreadsheet row number; the header row and rows
  without kept values are null. Use --dense to drop the nulls.

EXAMPLES:
  papmap-tables                          # xlsx/ → json/
  papmap-tables -i tables -o public/data
  papmap-tables --list-scenarios")]
#[command(version)]
struct Cli {
    /// Directory holding the source spreadsheets
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR, env = "PAPMAP_INPUT_DIR")]
    input_dir: PathBuf,

    /// Directory the scenario-N.json files are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, env = "PAPMAP_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Drop empty row slots instead of writing them as null
    #[arg(long)]
    dense: bool,

    /// Write indented JSON
    #[arg(long)]
    pretty: bool,

    /// Warn about spreadsheets that cannot be opened and convert the rest
    #[arg(long)]
    skip_unreadable: bool,

    /// Print each scenario's kept columns and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Show the files read for each scenario
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "papmap_tables=info"
    } else {
        "papmap_tables=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.list_scenarios {
        cli::list_scenarios()?;
        return Ok(());
    }

    let config = ConvertConfig {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        layout: if cli.dense {
            OutputLayout::Dense
        } else {
            OutputLayout::Sparse
        },
        pretty: cli.pretty,
        skip_unreadable: cli.skip_unreadable,
    };

    cli::convert(config, cli.verbose)?;
    Ok(())
}
