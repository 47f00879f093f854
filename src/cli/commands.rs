use crate::error::ConvertResult;
use crate::pipeline::{self, ConvertConfig, ScenarioOutcome};
use crate::scenarios::Scenario;
use crate::types::OutputLayout;
use colored::Colorize;

/// Execute the convert command
pub fn convert(config: ConvertConfig, verbose: bool) -> ConvertResult<()> {
    println!("{}", "PapMap - Converting risk tables".bold().green());
    println!("   Input:  {}", config.input_dir.display());
    println!("   Output: {}", config.output_dir.display());
    if config.layout == OutputLayout::Dense {
        println!("   Layout: {}", "dense".bright_yellow());
    }
    println!();

    let report = pipeline::run(&config)?;

    for outcome in &report.outcomes {
        print_outcome(outcome, verbose);
    }
    println!();

    let report = report.into_result()?;
    println!(
        "{}",
        format!("✅ Wrote {} scenario file(s)", report.outcomes.len())
            .bold()
            .green()
    );
    Ok(())
}

fn print_outcome(outcome: &ScenarioOutcome, verbose: bool) {
    let scenario = outcome.scenario;
    let label = format!("Scenario {}", scenario.index);

    match &outcome.result {
        Ok(path) => {
            println!(
                "   {} {} ({}): {} record(s) → {}",
                "✅".green(),
                label.bright_blue().bold(),
                scenario.name,
                outcome.records,
                path.display()
            );
            if outcome.files.is_empty() {
                println!("      {}", "no matching files, wrote empty array".yellow());
            }
        }
        Err(e) => {
            println!(
                "   {} {} ({}): {}",
                "❌".red(),
                label.bright_blue().bold(),
                scenario.name,
                e.to_string().red()
            );
        }
    }

    if verbose {
        for file in &outcome.files {
            let skipped = outcome.skipped.contains(file);
            let marker = if skipped { "skipped".yellow() } else { "read".cyan() };
            println!("      {} [{}]", file.display(), marker);
        }
    } else {
        for file in &outcome.skipped {
            println!("      {} {}", "skipped".yellow(), file.display());
        }
    }
}

/// Execute the list-scenarios command
pub fn list_scenarios() -> ConvertResult<()> {
    println!("{}", "PapMap - Scenarios".bold().green());
    println!();

    for scenario in Scenario::all() {
        println!(
            "   {} {}",
            format!("{}.", scenario.index).bright_blue().bold(),
            scenario.name.bold()
        );
        println!("      → {}", scenario.output_file_name().cyan());
        for header in scenario.kept_headers {
            println!("      - {}", header);
        }
        println!();
    }

    Ok(())
}
