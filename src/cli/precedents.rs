use std::path::PathBuf;

use clap::Args;

use crate::archive::store::CaseArchive;
use crate::cli::params::ParameterArgs;
use crate::cli::OutputFormat;
use crate::core::query::PrecedentQuery;
use crate::matching::engine::{MatchingConfig, MatchingEngine, PrecedentMatch, DEFAULT_THRESHOLD};

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub parameters: ParameterArgs,

    /// Minimum overall score as a fraction of 100 (0.0-1.0)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Number of matches to show (all when omitted)
    #[arg(short = 'n', long)]
    pub max_matches: Option<usize>,

    /// Path to a custom archive file (curated cases; filler is appended)
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Path to a JSON matching configuration (threshold, regions)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute match subcommand
///
/// # Errors
///
/// Returns an error if the parameters, archive or configuration cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let params = args.parameters.to_parameters()?;
    let query = PrecedentQuery::from(&params);

    let archive = load_archive(args.archive.as_ref())?;
    if verbose {
        eprintln!(
            "Loaded archive with {} cases ({} curated, {} synthetic)",
            archive.len(),
            archive.curated().len(),
            archive.synthetic().len()
        );
    }

    let mut config = match &args.config {
        Some(path) => MatchingConfig::load_from_file(path)?,
        None => MatchingConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }
    if verbose {
        eprintln!(
            "Threshold: {:.2} (default {DEFAULT_THRESHOLD}), {} configured regions",
            config.threshold,
            config.regions.groups.len()
        );
    }

    let engine = MatchingEngine::with_config(&archive, config);
    let mut matches = engine.find_matches(&query);
    if let Some(max) = args.max_matches {
        matches.truncate(max);
    }

    if matches.is_empty() {
        eprintln!("No precedents met the threshold.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&matches, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

pub(crate) fn load_archive(path: Option<&PathBuf>) -> anyhow::Result<CaseArchive> {
    let archive = match path {
        Some(path) => CaseArchive::load_from_file(path)?,
        None => CaseArchive::load_embedded()?,
    };
    Ok(archive)
}

fn print_text_results(matches: &[PrecedentMatch<'_>], verbose: bool) {
    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        let case = m.historical_case;
        println!(
            "\n#{} {} ({})",
            i + 1,
            case.title,
            m.confidence_level.to_string().to_uppercase()
        );
        println!("   ID: {} [{}]", case.id, case.provenance());
        println!("   Entity: {} ({}, {})", case.entity, case.country, case.year);
        println!("   Sector: {}  Strategy: {}", case.sector, case.strategy);
        println!("   Outcome: {}  ROI: {}x", case.outcomes.result, case.outcomes.roi_achieved);

        println!(
            "\n   Similarity: {} = sector {}% + region {}% + strategy {}%",
            m.similarity.overall,
            m.similarity.sector_match,
            m.similarity.region_match,
            m.similarity.strategy_match,
        );
        println!(
            "   Probability of success: {:.1}%  Time to maturity: {:.1} years",
            m.probability_of_success, m.time_to_maturity
        );

        let factors = &m.applicable_factors;
        println!("\n   {}", factors.investment_profile);
        if !factors.success_factors.is_empty() {
            println!("   Success factors:");
            for factor in &factors.success_factors {
                println!("     + {factor}");
            }
        }
        if !factors.warnings.is_empty() {
            println!("   Warnings:");
            for warning in &factors.warnings {
                println!("     ! {warning}");
            }
        }
        if verbose {
            for consideration in &factors.timing_considerations {
                println!("   {consideration}");
            }
        }
    }
}

fn print_tsv_results(matches: &[PrecedentMatch<'_>]) {
    println!(
        "rank\tid\ttitle\tentity\tsector\tcountry\tyear\tstrategy\tresult\toverall\tsector_match\tregion_match\tstrategy_match\tprobability_of_success\tconfidence\ttime_to_maturity"
    );
    for (i, m) in matches.iter().enumerate() {
        let case = m.historical_case;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.4}\t{}\t{:.4}",
            i + 1,
            case.id,
            case.title,
            case.entity,
            case.sector,
            case.country,
            case.year,
            case.strategy,
            case.outcomes.result,
            m.similarity.overall,
            m.similarity.sector_match,
            m.similarity.region_match,
            m.similarity.strategy_match,
            m.probability_of_success,
            m.confidence_level,
            m.time_to_maturity,
        );
    }
}
