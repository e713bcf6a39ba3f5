use clap::Args;

use crate::cli::params::ParameterArgs;
use crate::cli::OutputFormat;
use crate::indices::{evaluate_all, IndexReading, StrategicIndex};

#[derive(Args)]
pub struct IndicesArgs {
    #[command(flatten)]
    pub parameters: ParameterArgs,

    /// Only compute these indices (by code, e.g. "RROI"; can be repeated)
    #[arg(long = "only", value_parser = parse_index)]
    pub only: Vec<StrategicIndex>,

    /// Show which rules moved each index away from its baseline
    #[arg(long)]
    pub explain: bool,
}

fn parse_index(code: &str) -> Result<StrategicIndex, String> {
    StrategicIndex::from_code(code).ok_or_else(|| {
        let known: Vec<&str> = StrategicIndex::ALL.iter().map(|i| i.code()).collect();
        format!("unknown index '{code}' (expected one of {})", known.join(", "))
    })
}

/// Execute indices subcommand
///
/// # Errors
///
/// Returns an error if the report parameters cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IndicesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let params = args.parameters.to_parameters()?;

    let readings: Vec<IndexReading> = if args.only.is_empty() {
        evaluate_all(&params)
    } else {
        args.only
            .iter()
            .map(|index| IndexReading::compute(*index, &params))
            .collect()
    };

    if verbose {
        eprintln!("Computed {} indices", readings.len());
    }

    match format {
        OutputFormat::Text => print_text_results(&readings, args.explain),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&readings)?),
        OutputFormat::Tsv => print_tsv_results(&readings),
    }

    Ok(())
}

fn print_text_results(readings: &[IndexReading], explain: bool) {
    let name_width = readings
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:<6} {:<name_w$} {:<12} {:>6}",
        "Code",
        "Name",
        "Family",
        "Score",
        name_w = name_width
    );
    println!("{}", "-".repeat(name_width + 27));

    for r in readings {
        println!(
            "{:<6} {:<name_w$} {:<12} {:>6.1}",
            r.code,
            r.name,
            r.family.to_string(),
            r.score,
            name_w = name_width
        );
        if explain {
            for rule in &r.applied_rules {
                println!("  └─ {:+.0} {}", rule.delta, rule.label);
            }
        }
    }
}

fn print_tsv_results(readings: &[IndexReading]) {
    println!("code\tname\tfamily\tscore\tapplied_rules");
    for r in readings {
        let applied: Vec<String> = r
            .applied_rules
            .iter()
            .map(|rule| format!("{} ({:+})", rule.label, rule.delta))
            .collect();
        println!(
            "{}\t{}\t{}\t{:.1}\t{}",
            r.code,
            r.name,
            r.family,
            r.score,
            applied.join("; ")
        );
    }
}
