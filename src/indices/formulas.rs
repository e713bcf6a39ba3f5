//! The strategic index formulas.
//!
//! Each index is a [`RuleTable`]: a baseline adjusted by independent rules
//! and clamped to [0, 100]. No index reads another's output.

use serde::Serialize;

use crate::core::query::ReportParameters;
use crate::indices::rules::{clamp_score, AppliedRule, Rule, RuleTable, MAX_SCORE};

pub const INTERNAL_CASHFLOW: &str = "Internal Cashflow";
pub const PRIVATE_ENTERPRISE: &str = "Private Enterprise";
pub const SKILL_EXPERT: &str = "expert";
pub const SKILL_EXPERIENCED: &str = "experienced";

/// Lower labor cost markets
pub const LABOR_ARBITRAGE_MARKETS: [&str; 2] = ["Vietnam", "India"];
/// Markets with underused latent assets
pub const DEVELOPING_MARKETS: [&str; 5] = ["Vietnam", "Indonesia", "Nigeria", "Brazil", "Mexico"];
/// Markets treated as low portfolio risk
pub const STABLE_MARKETS: [&str; 5] = ["Singapore", "Germany", "USA", "UK", "Japan"];
/// Markets treated as low sovereign risk
pub const SOVEREIGN_SAFE_MARKETS: [&str; 4] = ["Singapore", "USA", "Germany", "Japan"];
/// Industry label fragments that count as innovation-led
pub const TECH_SECTORS: [&str; 4] = ["Technology", "Biotech", "Fintech", "Energy (Renewables)"];

fn is(value: Option<&String>, expected: &str) -> bool {
    value.is_some_and(|v| v == expected)
}

// --- Strategic ---

/// Best Alternative to Negotiated Agreement Plus: negotiation power
#[must_use]
pub fn barna_rules() -> RuleTable {
    RuleTable::new(50.0)
        .rule(Rule::when(
            "Region is Asia-Pacific or Europe",
            |p| p.region_is("Asia-Pacific") || p.region_is("Europe"),
            10.0,
        ))
        .rule(Rule::when(
            "Funded from internal cashflow",
            |p| is(p.funding_source.as_ref(), INTERNAL_CASHFLOW),
            15.0,
        ))
        .rule(Rule::when(
            "More than one industry",
            |p| p.industry.len() > 1,
            10.0,
        ))
}

/// Negotiation Value Index: deal value
#[must_use]
pub fn nvi_rules() -> RuleTable {
    RuleTable::new(40.0)
        .rule(Rule::per_item(
            "Per strategic objective",
            |p| p.strategic_objectives.len(),
            5.0,
        ))
        .rule(Rule::when(
            "Specific opportunity identified",
            |p| p.specific_opportunity.as_ref().is_some_and(|s| !s.is_empty()),
            10.0,
        ))
        .rule(Rule::when(
            "Target incentives listed",
            |p| !p.target_incentives.is_empty(),
            15.0,
        ))
}

/// Regional Readiness & Opportunity Index
#[must_use]
pub fn rroi_rules() -> RuleTable {
    RuleTable::new(65.0)
        .rule(Rule::when(
            "Vietnam or India",
            |p| p.country_in(&LABOR_ARBITRAGE_MARKETS),
            20.0,
        ))
        .rule(Rule::when("Singapore", |p| p.country_is("Singapore"), 30.0))
}

/// Strategic Ecosystem Alignment Map
#[must_use]
pub fn seam_rules() -> RuleTable {
    RuleTable::new(72.0).rule(Rule::when(
        "Technology industry selected",
        |p| p.has_industry("Technology"),
        16.0,
    ))
}

/// Latent Asset Identification
#[must_use]
pub fn lai_rules() -> RuleTable {
    RuleTable::new(60.0).rule(Rule::when(
        "Developing market",
        |p| p.country_in(&DEVELOPING_MARKETS),
        30.0,
    ))
}

/// Cultural Resonance Index: social license
#[must_use]
pub fn cri_rules() -> RuleTable {
    RuleTable::new(60.0)
        .rule(Rule::when(
            "Private enterprise in Asia-Pacific",
            |p| p.region_is("Asia-Pacific") && is(p.organization_type.as_ref(), PRIVATE_ENTERPRISE),
            10.0,
        ))
        .rule(Rule::when(
            "Manufacturing in Europe",
            |p| p.region_is("Europe") && p.has_industry("Manufacturing"),
            10.0,
        ))
        .rule(Rule::when(
            "Partnership intent",
            |p| p.strategic_intent.includes("Partnership"),
            15.0,
        ))
}

// --- Operational ---

/// Counterparty Analysis Protocol
#[must_use]
pub fn cap_rules() -> RuleTable {
    RuleTable::new(50.0)
        .rule(Rule::when(
            "Detailed partner profile",
            |p| p.ideal_partner_profile.chars().count() > 20,
            20.0,
        ))
        .rule(Rule::when(
            "Counterpart type specified",
            |p| !p.target_counterpart_type.is_empty(),
            15.0,
        ))
}

/// Accelerated Growth Index
#[must_use]
pub fn agi_rules() -> RuleTable {
    RuleTable::new(50.0)
        .rule(Rule::per_item(
            "Per target incentive",
            |p| p.target_incentives.len(),
            5.0,
        ))
        .rule(Rule::when(
            "Expansion within 6 months",
            |p| is(p.expansion_timeline.as_ref(), "0_6_months"),
            25.0,
        ))
        .rule(Rule::when(
            "Expansion within 6-12 months",
            |p| is(p.expansion_timeline.as_ref(), "6_12_months"),
            15.0,
        ))
}

/// Value Creation Index
#[must_use]
pub fn vci_rules() -> RuleTable {
    RuleTable::new(60.0)
        .rule(Rule::per_item(
            "Per strategic lens",
            |p| p.strategic_lens.len(),
            5.0,
        ))
        .rule(Rule::per_item(
            "Per capability need",
            |p| p.capabilities_need().len(),
            2.0,
        ))
}

/// Adaptability & Transition Index
#[must_use]
pub fn ati_rules() -> RuleTable {
    RuleTable::new(55.0)
        .rule(Rule::when(
            "Expert team",
            |p| is(p.skill_level.as_ref(), SKILL_EXPERT),
            20.0,
        ))
        .rule(Rule::when(
            "Experienced team",
            |p| is(p.skill_level.as_ref(), SKILL_EXPERIENCED),
            10.0,
        ))
        .rule(Rule::per_item(
            "Per strategic objective",
            |p| p.strategic_objectives.len(),
            3.0,
        ))
}

/// Execution Superiority Index
#[must_use]
pub fn esi_rules() -> RuleTable {
    RuleTable::new(50.0)
        .rule(Rule::when(
            "Headcount over 10,000",
            |p| is(p.headcount_band.as_ref(), "over_10000"),
            30.0,
        ))
        .rule(Rule::when(
            "Headcount 1,000-5,000",
            |p| is(p.headcount_band.as_ref(), "1000_5000"),
            20.0,
        ))
        .rule(Rule::when(
            "Funded from internal cashflow",
            |p| is(p.funding_source.as_ref(), INTERNAL_CASHFLOW),
            15.0,
        ))
}

/// Innovation Strength Index
#[must_use]
pub fn isi_rules() -> RuleTable {
    RuleTable::new(40.0)
        .rule(Rule::when(
            "Innovation-led industry",
            |p| {
                p.industry
                    .iter()
                    .any(|i| TECH_SECTORS.iter().any(|t| i.contains(t)))
            },
            30.0,
        ))
        .rule(Rule::when(
            "Innovation is a priority theme",
            |p| p.priority_themes.iter().any(|t| t == "Innovation"),
            20.0,
        ))
}

/// Operational Sustainability Index
#[must_use]
pub fn osi_rules() -> RuleTable {
    RuleTable::new(60.0)
        .rule(Rule::when(
            "Revenue over 1B",
            |p| is(p.revenue_band.as_ref(), "over_1b"),
            20.0,
        ))
        .rule(Rule::when(
            "Revenue 250M-1B",
            |p| is(p.revenue_band.as_ref(), "250m_1b"),
            10.0,
        ))
        .rule(Rule::per_item(
            "Per partnership support need",
            |p| p.partnership_support_needs.len(),
            3.0,
        ))
}

/// Total Cost of Ownership (regional): efficiency
#[must_use]
pub fn tco_rules() -> RuleTable {
    RuleTable::new(50.0)
        .rule(Rule::when(
            "Labor cost advantage",
            |p| p.country_in(&LABOR_ARBITRAGE_MARKETS),
            30.0,
        ))
        .rule(Rule::when(
            "Efficiency is the operational priority",
            |p| is(p.operational_priority.as_ref(), "Efficiency"),
            10.0,
        ))
}

// --- Risk ---

/// Portfolio Risk Index (higher is safer)
#[must_use]
pub fn pri_rules() -> RuleTable {
    RuleTable::new(50.0)
        .rule(Rule::when(
            "Stable market",
            |p| p.country_in(&STABLE_MARKETS),
            20.0,
        ))
        .rule(Rule::when(
            "Crypto or mining exposure",
            |p| p.has_industry("Crypto") || p.has_industry("Mining"),
            -10.0,
        ))
}

/// Regulatory Navigation Index
#[must_use]
pub fn rni_rules() -> RuleTable {
    RuleTable::new(50.0)
        .rule(Rule::when(
            "Expert team",
            |p| is(p.skill_level.as_ref(), SKILL_EXPERT),
            25.0,
        ))
        .rule(Rule::when(
            "Government-facing intent",
            |p| p.strategic_intent.any_contains("Government"),
            15.0,
        ))
}

/// Sovereign Risk Assessment: political stability (higher is safer)
#[must_use]
pub fn sra_rules() -> RuleTable {
    RuleTable::new(70.0)
        .rule(Rule::when(
            "Low sovereign risk market",
            |p| p.country_in(&SOVEREIGN_SAFE_MARKETS),
            25.0,
        ))
        .rule(Rule::when(
            "Very low risk tolerance",
            |p| is(p.risk_tolerance.as_ref(), "very_low"),
            -10.0,
        ))
}

fn same_country_as_user(p: &ReportParameters) -> bool {
    p.country() == Some(p.user_country_or_global())
}

/// Institutional distance between home and target (lower is closer).
///
/// The IDV score inverts this gap.
#[must_use]
pub fn idv_gap_rules() -> RuleTable {
    RuleTable::new(40.0)
        .rule(Rule::when(
            "Same country as the organization",
            same_country_as_user,
            -30.0,
        ))
        .rule(Rule::when(
            "Vietnam from outside, Asia-Pacific",
            |p| !same_country_as_user(p) && p.region_is("Asia-Pacific") && p.country_is("Vietnam"),
            20.0,
        ))
}

/// Capability to bridge the institutional gap
#[must_use]
pub fn idv_bridge_rules() -> RuleTable {
    RuleTable::new(0.0).rule(Rule::when(
        "Expert team",
        |p| is(p.skill_level.as_ref(), SKILL_EXPERT),
        20.0,
    ))
}

#[must_use]
pub fn barna(params: &ReportParameters) -> f64 {
    barna_rules().evaluate(params)
}

#[must_use]
pub fn nvi(params: &ReportParameters) -> f64 {
    nvi_rules().evaluate(params)
}

#[must_use]
pub fn rroi(params: &ReportParameters) -> f64 {
    rroi_rules().evaluate(params)
}

#[must_use]
pub fn seam(params: &ReportParameters) -> f64 {
    seam_rules().evaluate(params)
}

#[must_use]
pub fn lai(params: &ReportParameters) -> f64 {
    lai_rules().evaluate(params)
}

#[must_use]
pub fn cri(params: &ReportParameters) -> f64 {
    cri_rules().evaluate(params)
}

#[must_use]
pub fn cap(params: &ReportParameters) -> f64 {
    cap_rules().evaluate(params)
}

#[must_use]
pub fn agi(params: &ReportParameters) -> f64 {
    agi_rules().evaluate(params)
}

#[must_use]
pub fn vci(params: &ReportParameters) -> f64 {
    vci_rules().evaluate(params)
}

#[must_use]
pub fn ati(params: &ReportParameters) -> f64 {
    ati_rules().evaluate(params)
}

#[must_use]
pub fn esi(params: &ReportParameters) -> f64 {
    esi_rules().evaluate(params)
}

#[must_use]
pub fn isi(params: &ReportParameters) -> f64 {
    isi_rules().evaluate(params)
}

#[must_use]
pub fn osi(params: &ReportParameters) -> f64 {
    osi_rules().evaluate(params)
}

#[must_use]
pub fn tco(params: &ReportParameters) -> f64 {
    tco_rules().evaluate(params)
}

#[must_use]
pub fn pri(params: &ReportParameters) -> f64 {
    pri_rules().evaluate(params)
}

#[must_use]
pub fn rni(params: &ReportParameters) -> f64 {
    rni_rules().evaluate(params)
}

#[must_use]
pub fn sra(params: &ReportParameters) -> f64 {
    sra_rules().evaluate(params)
}

/// Institutional Distance Vector: `100 - gap + bridge`, clamped to [0, 100]
#[must_use]
pub fn idv(params: &ReportParameters) -> f64 {
    clamp_score(MAX_SCORE - idv_gap_rules().raw(params) + idv_bridge_rules().raw(params))
}

/// Which family of derivatives an index belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexFamily {
    Strategic,
    Operational,
    Risk,
}

impl std::fmt::Display for IndexFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strategic => write!(f, "strategic"),
            Self::Operational => write!(f, "operational"),
            Self::Risk => write!(f, "risk"),
        }
    }
}

/// The strategic indices, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategicIndex {
    Barna,
    Nvi,
    Rroi,
    Seam,
    Lai,
    Cri,
    Cap,
    Agi,
    Vci,
    Ati,
    Esi,
    Isi,
    Osi,
    Tco,
    Pri,
    Rni,
    Sra,
    Idv,
}

impl StrategicIndex {
    pub const ALL: [Self; 18] = [
        Self::Barna,
        Self::Nvi,
        Self::Rroi,
        Self::Seam,
        Self::Lai,
        Self::Cri,
        Self::Cap,
        Self::Agi,
        Self::Vci,
        Self::Ati,
        Self::Esi,
        Self::Isi,
        Self::Osi,
        Self::Tco,
        Self::Pri,
        Self::Rni,
        Self::Sra,
        Self::Idv,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Barna => "BARNA",
            Self::Nvi => "NVI",
            Self::Rroi => "RROI",
            Self::Seam => "SEAM",
            Self::Lai => "LAI",
            Self::Cri => "CRI",
            Self::Cap => "CAP",
            Self::Agi => "AGI",
            Self::Vci => "VCI",
            Self::Ati => "ATI",
            Self::Esi => "ESI",
            Self::Isi => "ISI",
            Self::Osi => "OSI",
            Self::Tco => "TCO",
            Self::Pri => "PRI",
            Self::Rni => "RNI",
            Self::Sra => "SRA",
            Self::Idv => "IDV",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Barna => "Best Alternative to Negotiated Agreement Plus",
            Self::Nvi => "Negotiation Value Index",
            Self::Rroi => "Regional Readiness & Opportunity Index",
            Self::Seam => "Strategic Ecosystem Alignment Map",
            Self::Lai => "Latent Asset Identification",
            Self::Cri => "Cultural Resonance Index",
            Self::Cap => "Counterparty Analysis Protocol",
            Self::Agi => "Accelerated Growth Index",
            Self::Vci => "Value Creation Index",
            Self::Ati => "Adaptability & Transition Index",
            Self::Esi => "Execution Superiority Index",
            Self::Isi => "Innovation Strength Index",
            Self::Osi => "Operational Sustainability Index",
            Self::Tco => "Total Cost of Ownership (Regional)",
            Self::Pri => "Portfolio Risk Index",
            Self::Rni => "Regulatory Navigation Index",
            Self::Sra => "Sovereign Risk Assessment",
            Self::Idv => "Institutional Distance Vector",
        }
    }

    #[must_use]
    pub fn family(self) -> IndexFamily {
        match self {
            Self::Barna | Self::Nvi | Self::Rroi | Self::Seam | Self::Lai | Self::Cri => {
                IndexFamily::Strategic
            }
            Self::Cap
            | Self::Agi
            | Self::Vci
            | Self::Ati
            | Self::Esi
            | Self::Isi
            | Self::Osi
            | Self::Tco => IndexFamily::Operational,
            Self::Pri | Self::Rni | Self::Sra | Self::Idv => IndexFamily::Risk,
        }
    }

    /// Look up an index by its code, case-insensitively
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|index| index.code().eq_ignore_ascii_case(code.trim()))
    }

    #[must_use]
    pub fn evaluate(self, params: &ReportParameters) -> f64 {
        match self {
            Self::Barna => barna(params),
            Self::Nvi => nvi(params),
            Self::Rroi => rroi(params),
            Self::Seam => seam(params),
            Self::Lai => lai(params),
            Self::Cri => cri(params),
            Self::Cap => cap(params),
            Self::Agi => agi(params),
            Self::Vci => vci(params),
            Self::Ati => ati(params),
            Self::Esi => esi(params),
            Self::Isi => isi(params),
            Self::Osi => osi(params),
            Self::Tco => tco(params),
            Self::Pri => pri(params),
            Self::Rni => rni(params),
            Self::Sra => sra(params),
            Self::Idv => idv(params),
        }
    }

    /// The rules that moved this index away from its baseline
    #[must_use]
    pub fn explain(self, params: &ReportParameters) -> Vec<AppliedRule> {
        if let Some(table) = self.rule_table() {
            return table.explain(params);
        }

        // IDV: gap rules lower the score, so report them inverted
        let mut applied: Vec<AppliedRule> = idv_gap_rules()
            .explain(params)
            .into_iter()
            .map(|rule| AppliedRule {
                delta: -rule.delta,
                ..rule
            })
            .collect();
        applied.extend(idv_bridge_rules().explain(params));
        applied
    }

    /// Single-table indices; IDV combines a gap and a bridge table
    fn rule_table(self) -> Option<RuleTable> {
        let table = match self {
            Self::Barna => barna_rules(),
            Self::Nvi => nvi_rules(),
            Self::Rroi => rroi_rules(),
            Self::Seam => seam_rules(),
            Self::Lai => lai_rules(),
            Self::Cri => cri_rules(),
            Self::Cap => cap_rules(),
            Self::Agi => agi_rules(),
            Self::Vci => vci_rules(),
            Self::Ati => ati_rules(),
            Self::Esi => esi_rules(),
            Self::Isi => isi_rules(),
            Self::Osi => osi_rules(),
            Self::Tco => tco_rules(),
            Self::Pri => pri_rules(),
            Self::Rni => rni_rules(),
            Self::Sra => sra_rules(),
            Self::Idv => return None,
        };
        Some(table)
    }
}

impl std::fmt::Display for StrategicIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One index computed for a parameter set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexReading {
    pub code: &'static str,
    pub name: &'static str,
    pub family: IndexFamily,
    pub score: f64,
    pub applied_rules: Vec<AppliedRule>,
}

impl IndexReading {
    #[must_use]
    pub fn compute(index: StrategicIndex, params: &ReportParameters) -> Self {
        Self {
            code: index.code(),
            name: index.name(),
            family: index.family(),
            score: index.evaluate(params),
            applied_rules: index.explain(params),
        }
    }
}

/// Compute every index side by side
#[must_use]
pub fn evaluate_all(params: &ReportParameters) -> Vec<IndexReading> {
    StrategicIndex::ALL
        .into_iter()
        .map(|index| IndexReading::compute(index, params))
        .collect()
}
