use serde::Serialize;

use crate::core::query::ReportParameters;

/// Lowest score any index reports
pub const MIN_SCORE: f64 = 0.0;
/// Highest score any index reports
pub const MAX_SCORE: f64 = 100.0;

pub type Predicate = fn(&ReportParameters) -> bool;
pub type Counter = fn(&ReportParameters) -> usize;

/// How much a rule moves the running total when it applies
#[derive(Clone, Copy)]
pub enum Delta {
    Fixed(f64),
    /// `each` for every item counted
    PerItem { count: Counter, each: f64 },
}

/// One (predicate, delta) pair of a rule table
#[derive(Clone, Copy)]
pub struct Rule {
    pub label: &'static str,
    pub when: Predicate,
    pub delta: Delta,
}

fn always(_: &ReportParameters) -> bool {
    true
}

impl Rule {
    /// Fixed adjustment applied when `when` holds
    #[must_use]
    pub fn when(label: &'static str, when: Predicate, delta: f64) -> Self {
        Self {
            label,
            when,
            delta: Delta::Fixed(delta),
        }
    }

    /// Adjustment proportional to the number of items `count` reports
    #[must_use]
    pub fn per_item(label: &'static str, count: Counter, each: f64) -> Self {
        Self {
            label,
            when: always,
            delta: Delta::PerItem { count, each },
        }
    }

    /// The amount this rule contributes for `params`; zero when it does not apply
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // list lengths are small
    pub fn adjustment(&self, params: &ReportParameters) -> f64 {
        if !(self.when)(params) {
            return 0.0;
        }
        match self.delta {
            Delta::Fixed(delta) => delta,
            Delta::PerItem { count, each } => count(params) as f64 * each,
        }
    }
}

/// A rule that fired, with what it contributed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedRule {
    pub label: &'static str,
    pub delta: f64,
}

/// Baseline plus ordered rules, folded over a running total
#[derive(Clone)]
pub struct RuleTable {
    pub baseline: f64,
    pub rules: Vec<Rule>,
}

impl RuleTable {
    #[must_use]
    pub fn new(baseline: f64) -> Self {
        Self {
            baseline,
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Running total before clamping
    #[must_use]
    pub fn raw(&self, params: &ReportParameters) -> f64 {
        self.rules
            .iter()
            .fold(self.baseline, |total, rule| total + rule.adjustment(params))
    }

    /// Clamped score in [0, 100]
    #[must_use]
    pub fn evaluate(&self, params: &ReportParameters) -> f64 {
        clamp_score(self.raw(params))
    }

    /// Rules with a non-zero contribution, in table order
    #[must_use]
    pub fn explain(&self, params: &ReportParameters) -> Vec<AppliedRule> {
        self.rules
            .iter()
            .map(|rule| AppliedRule {
                label: rule.label,
                delta: rule.adjustment(params),
            })
            .filter(|applied| applied.delta != 0.0)
            .collect()
    }
}

#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}
