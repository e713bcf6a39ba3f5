use serde::{Deserialize, Serialize};

use crate::core::case::HistoricalCase;
use crate::core::query::PrecedentQuery;
use crate::core::types::{Confidence, OutcomeResult};

/// Contribution of a direct sector match
pub const SECTOR_WEIGHT: u8 = 40;
/// Contribution of a case in a common sector when the query named any industry
pub const COMMON_SECTOR_CREDIT: u8 = 10;
/// Contribution of an exact country match
pub const COUNTRY_WEIGHT: u8 = 30;
/// Contribution of a case inside the query's region
pub const REGION_CREDIT: u8 = 15;
/// Contribution of a shared strategy keyword
pub const STRATEGY_WEIGHT: u8 = 30;

/// Maximum overall similarity (`SECTOR_WEIGHT + COUNTRY_WEIGHT + STRATEGY_WEIGHT`)
pub const MAX_OVERALL: u8 = 100;

/// Uninformative probability that weak matches regress toward
pub const NEUTRAL_PROBABILITY: f64 = 50.0;

/// Sectors that earn partial credit for any industry-specific query
pub const COMMON_SECTORS: [&str; 5] = [
    "Technology",
    "Manufacturing",
    "Infrastructure",
    "Energy",
    "Finance",
];

/// How a case's sector relates to the requested industries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorAlignment {
    /// A requested label contains the sector or is contained by it
    Direct,
    /// No direct overlap, but the sector is a common one
    CommonSector,
    None,
}

impl SectorAlignment {
    #[must_use]
    pub fn contribution(self) -> u8 {
        match self {
            Self::Direct => SECTOR_WEIGHT,
            Self::CommonSector => COMMON_SECTOR_CREDIT,
            Self::None => 0,
        }
    }

    #[must_use]
    pub fn match_percent(self) -> u8 {
        match self {
            Self::Direct => 100,
            Self::CommonSector => 25,
            Self::None => 0,
        }
    }
}

/// How a case's country relates to the requested country/region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionAlignment {
    /// Same country
    Country,
    /// Different country within the requested region
    Region,
    None,
}

impl RegionAlignment {
    #[must_use]
    pub fn contribution(self) -> u8 {
        match self {
            Self::Country => COUNTRY_WEIGHT,
            Self::Region => REGION_CREDIT,
            Self::None => 0,
        }
    }

    #[must_use]
    pub fn match_percent(self) -> u8 {
        match self {
            Self::Country => 100,
            Self::Region => 50,
            Self::None => 0,
        }
    }
}

/// Whether a strategy keyword of the case appears in the query's intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyAlignment {
    Keyword,
    None,
}

impl StrategyAlignment {
    #[must_use]
    pub fn contribution(self) -> u8 {
        match self {
            Self::Keyword => STRATEGY_WEIGHT,
            Self::None => 0,
        }
    }

    #[must_use]
    pub fn match_percent(self) -> u8 {
        match self {
            Self::Keyword => 100,
            Self::None => 0,
        }
    }
}

/// A named group of countries that earn regional credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionGroup {
    pub name: String,
    pub countries: Vec<String>,
}

impl RegionGroup {
    pub fn new(name: &str, countries: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            countries: countries.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Region-to-country associations.
///
/// Regions not listed here fall through to an implicit default with no
/// members, so they never earn regional credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    pub groups: Vec<RegionGroup>,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self {
            groups: vec![
                RegionGroup::new(
                    "Asia-Pacific",
                    &["Vietnam", "Thailand", "Indonesia", "China", "Singapore"],
                ),
                RegionGroup::new("Europe", &["Poland", "Germany", "Romania", "UK"]),
                RegionGroup::new("South America", &["Brazil", "Mexico", "Chile"]),
            ],
        }
    }
}

impl RegionTable {
    /// Countries belonging to `region`, empty for unlisted regions
    #[must_use]
    pub fn countries(&self, region: &str) -> &[String] {
        self.groups
            .iter()
            .find(|g| g.name == region)
            .map(|g| g.countries.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, region: &str, country: &str) -> bool {
        self.countries(region).iter().any(|c| c == country)
    }
}

/// Similarity between a query and one historical case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimilarityScore {
    /// Weighted sum of the three dimensions, 0-100
    pub overall: u8,
    pub sector_match: u8,
    pub region_match: u8,
    pub strategy_match: u8,

    pub sector: SectorAlignment,
    pub region: RegionAlignment,
    pub strategy: StrategyAlignment,
}

impl SimilarityScore {
    #[must_use]
    pub fn calculate(query: &PrecedentQuery, case: &HistoricalCase, regions: &RegionTable) -> Self {
        Self::from_alignments(
            sector_alignment(query, case),
            region_alignment(query, case, regions),
            strategy_alignment(query, case),
        )
    }

    #[must_use]
    pub fn from_alignments(
        sector: SectorAlignment,
        region: RegionAlignment,
        strategy: StrategyAlignment,
    ) -> Self {
        Self {
            overall: sector.contribution() + region.contribution() + strategy.contribution(),
            sector_match: sector.match_percent(),
            region_match: region.match_percent(),
            strategy_match: strategy.match_percent(),
            sector,
            region,
            strategy,
        }
    }

    #[must_use]
    pub fn confidence(&self) -> Confidence {
        Confidence::from_overall(self.overall)
    }
}

/// Sector dimension: containment in either direction, case-sensitive
#[must_use]
pub fn sector_alignment(query: &PrecedentQuery, case: &HistoricalCase) -> SectorAlignment {
    let sector = case.sector.as_str();
    if query
        .industries()
        .any(|label| sector.contains(label) || label.contains(sector))
    {
        SectorAlignment::Direct
    } else if COMMON_SECTORS.contains(&sector) && query.industries().next().is_some() {
        SectorAlignment::CommonSector
    } else {
        SectorAlignment::None
    }
}

/// Country/region dimension; an exact country match short-circuits the region check
#[must_use]
pub fn region_alignment(
    query: &PrecedentQuery,
    case: &HistoricalCase,
    regions: &RegionTable,
) -> RegionAlignment {
    if query.country.as_deref() == Some(case.country.as_str()) {
        RegionAlignment::Country
    } else if query
        .region
        .as_deref()
        .is_some_and(|region| regions.contains(region, &case.country))
    {
        RegionAlignment::Region
    } else {
        RegionAlignment::None
    }
}

/// Strategy dimension: any whitespace token of the case strategy found verbatim
/// in the coerced intent string
#[must_use]
pub fn strategy_alignment(query: &PrecedentQuery, case: &HistoricalCase) -> StrategyAlignment {
    let intent = query.strategic_intent.coerced();
    if case.strategy_keywords().any(|word| intent.contains(word)) {
        StrategyAlignment::Keyword
    } else {
        StrategyAlignment::None
    }
}

/// Blend an outcome's base rate with the neutral baseline by match strength.
///
/// `overall = 0` yields exactly 50; `overall = 100` yields exactly the base rate.
#[must_use]
pub fn blended_probability(result: OutcomeResult, overall: u8) -> f64 {
    let strength = f64::from(overall) / f64::from(MAX_OVERALL);
    result.base_rate() * strength + NEUTRAL_PROBABILITY * (1.0 - strength)
}
