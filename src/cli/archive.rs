use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::precedents::load_archive;
use crate::cli::OutputFormat;
use crate::utils::validation::validate_case_id;

#[derive(Args)]
pub struct ArchiveArgs {
    #[command(subcommand)]
    pub command: ArchiveCommands,
}

#[derive(Subcommand)]
pub enum ArchiveCommands {
    /// List cases in the archive
    List {
        /// Path to custom archive file
        #[arg(long)]
        archive: Option<PathBuf>,

        /// Hide generated filler cases
        #[arg(long)]
        curated_only: bool,

        /// Filter by sector (case-insensitive substring, e.g. "tech")
        #[arg(long)]
        sector: Option<String>,

        /// Filter by country (case-insensitive substring)
        #[arg(long)]
        country: Option<String>,
    },

    /// Show details of a specific case
    Show {
        /// Case ID (e.g., "CS-1999-U")
        #[arg(required = true)]
        id: String,

        /// Path to custom archive file
        #[arg(long)]
        archive: Option<PathBuf>,
    },

    /// Export the curated cases to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom archive file to export (defaults to embedded)
        #[arg(long)]
        archive: Option<PathBuf>,
    },
}

/// Execute archive subcommand
///
/// # Errors
///
/// Returns an error if the archive cannot be loaded, a case is not found,
/// or the export cannot be written.
pub fn run(args: ArchiveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        ArchiveCommands::List {
            archive,
            curated_only,
            sector,
            country,
        } => run_list(
            archive,
            curated_only,
            sector.as_deref(),
            country.as_deref(),
            format,
            verbose,
        ),
        ArchiveCommands::Show { id, archive } => run_show(&id, archive, format),
        ArchiveCommands::Export { output, archive } => run_export(output, archive),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[allow(clippy::needless_pass_by_value)]
fn run_list(
    archive_path: Option<PathBuf>,
    curated_only: bool,
    sector_filter: Option<&str>,
    country_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let archive = load_archive(archive_path.as_ref())?;

    if verbose {
        eprintln!("Loaded archive with {} cases", archive.len());
    }

    let source = if curated_only {
        archive.curated()
    } else {
        archive.cases()
    };

    let filtered: Vec<_> = source
        .iter()
        .filter(|c| sector_filter.map_or(true, |s| contains_ignore_case(&c.sector, s)))
        .filter(|c| country_filter.map_or(true, |s| contains_ignore_case(&c.country, s)))
        .collect();

    match format {
        OutputFormat::Text => {
            let id_width = filtered
                .iter()
                .map(|c| c.id.as_str().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let title_width = filtered
                .iter()
                .map(|c| c.title.len().min(40))
                .max()
                .unwrap_or(5)
                .max(5);
            let sector_width = filtered
                .iter()
                .map(|c| c.sector.len())
                .max()
                .unwrap_or(6)
                .max(6);
            let country_width = filtered
                .iter()
                .map(|c| c.country.len())
                .max()
                .unwrap_or(7)
                .max(7);

            let total_width = id_width + title_width + sector_width + country_width + 4 + 7 + 5;

            println!("Case Archive ({} cases)\n", filtered.len());
            println!(
                "{:<id_w$} {:<title_w$} {:<sec_w$} {:<cty_w$} {:>4} {:<7}",
                "ID",
                "Title",
                "Sector",
                "Country",
                "Year",
                "Result",
                id_w = id_width,
                title_w = title_width,
                sec_w = sector_width,
                cty_w = country_width
            );
            println!("{}", "-".repeat(total_width));

            for c in &filtered {
                println!(
                    "{:<id_w$} {:<title_w$} {:<sec_w$} {:<cty_w$} {:>4} {:<7}",
                    c.id.as_str(),
                    truncate(&c.title, title_width),
                    c.sector,
                    c.country,
                    c.year,
                    c.outcomes.result.to_string(),
                    id_w = id_width,
                    title_w = title_width,
                    sec_w = sector_width,
                    cty_w = country_width
                );
                if verbose {
                    println!(
                        "  └─ {} via {}: ${}M, ROI {}x",
                        c.entity, c.strategy, c.investment_size_million_usd, c.outcomes.roi_achieved
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("id\ttitle\tentity\tsector\tcountry\tyear\tstrategy\tinvestment_size_million_usd\tresult\troi_achieved\tprovenance");
            for c in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    c.id,
                    c.title,
                    c.entity,
                    c.sector,
                    c.country,
                    c.year,
                    c.strategy,
                    c.investment_size_million_usd,
                    c.outcomes.result,
                    c.outcomes.roi_achieved,
                    c.provenance()
                );
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_show(id: &str, archive_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let archive = load_archive(archive_path.as_ref())?;

    let case_id = validate_case_id(id)?;
    let case = archive
        .get(&case_id)
        .ok_or_else(|| anyhow::anyhow!("Case '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Case: {}\n", case.title);
            println!("ID:         {} ({})", case.id, case.provenance());
            println!("Entity:     {}", case.entity);
            println!("Sector:     {}", case.sector);
            println!("Country:    {}", case.country);
            println!("Year:       {}", case.year);
            println!("Strategy:   {}", case.strategy);
            println!("Investment: ${}M", case.investment_size_million_usd);
            println!("Result:     {}", case.outcomes.result);
            println!("ROI:        {}x", case.outcomes.roi_achieved);

            if let Some(ttm) = &case.outcomes.time_to_market {
                println!("Time to market: {ttm}");
            }
            if let Some(jobs) = case.outcomes.jobs_created {
                println!("Jobs created:   {jobs}");
            }

            if !case.outcomes.key_learnings.is_empty() {
                println!("\nKey learnings:");
                for learning in &case.outcomes.key_learnings {
                    println!("  - {learning}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(case)?);
        }
        OutputFormat::Tsv => {
            println!("key_learning");
            for learning in &case.outcomes.key_learnings {
                println!("{learning}");
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_export(output: PathBuf, archive_path: Option<PathBuf>) -> anyhow::Result<()> {
    let archive = load_archive(archive_path.as_ref())?;

    let json = archive.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} curated cases to {}",
        archive.curated().len(),
        output.display()
    );

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
