use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::core::query::{ReportParameters, StrategicIntent};
use crate::utils::validation::validate_parameters;

/// Report parameter flags shared by `match` and `indices`
#[derive(Args, Debug, Default)]
pub struct ParameterArgs {
    /// JSON file of report parameters (camelCase keys); use '-' for stdin.
    /// Flags below override the corresponding fields.
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Target industry (can be repeated)
    #[arg(short, long = "industry")]
    pub industries: Vec<String>,

    /// Target country (e.g., "Vietnam")
    #[arg(short, long)]
    pub country: Option<String>,

    /// Target region (e.g., "Asia-Pacific")
    #[arg(short, long)]
    pub region: Option<String>,

    /// Strategic intent. One value is free text; repeat for a list of tags
    #[arg(long = "intent")]
    pub intents: Vec<String>,
}

impl ParameterArgs {
    /// Merge the parameter file (if any) with the command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter file cannot be read or parsed, or
    /// if the merged parameters exceed input limits.
    pub fn to_parameters(&self) -> anyhow::Result<ReportParameters> {
        let mut params = match &self.params {
            Some(path) => read_parameters(path)?,
            None => ReportParameters::default(),
        };

        if !self.industries.is_empty() {
            params.industry.clone_from(&self.industries);
        }
        if let Some(country) = &self.country {
            params.country = Some(country.clone());
        }
        if let Some(region) = &self.region {
            params.region = Some(region.clone());
        }
        if !self.intents.is_empty() {
            params.strategic_intent = StrategicIntent::from_entries(self.intents.clone());
        }

        validate_parameters(&params)?;
        Ok(params)
    }
}

fn read_parameters(path: &Path) -> anyhow::Result<ReportParameters> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?
    };

    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid report parameters in {}: {e}", path.display()))
}
