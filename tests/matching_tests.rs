//! End-to-end matching properties over the embedded archive.

use precedent_matcher::archive::synthetic::filler_case;
use precedent_matcher::core::case::CaseOutcomes;
use precedent_matcher::matching::engine::DEFAULT_THRESHOLD;
use precedent_matcher::matching::scoring::{RegionTable, SectorAlignment};
use precedent_matcher::{
    CaseArchive, CaseId, Confidence, HistoricalCase, MatchingConfig, MatchingEngine,
    OutcomeResult, PrecedentQuery, ReportParameters, StrategicIntent,
};

fn queries() -> Vec<PrecedentQuery> {
    vec![
        PrecedentQuery::new(),
        PrecedentQuery::new()
            .with_industry("Technology")
            .with_country("Vietnam")
            .with_region("Asia-Pacific")
            .with_intent(StrategicIntent::Text("Joint Venture expansion".into())),
        PrecedentQuery::new()
            .with_industry("Retail")
            .with_country("Germany")
            .with_intent(StrategicIntent::Text("Acquisition".into())),
        PrecedentQuery::new()
            .with_industry("Energy")
            .with_industry("Finance")
            .with_region("South America")
            .with_intent(StrategicIntent::List(vec![
                "Joint Venture".into(),
                "Greenfield".into(),
            ])),
        PrecedentQuery::new()
            .with_industry("Automotive")
            .with_region("Europe"),
    ]
}

#[test]
fn test_overall_is_sum_of_components() {
    let archive = CaseArchive::load_embedded().unwrap();
    let engine = MatchingEngine::new(&archive);

    for query in queries() {
        for m in engine.find_matches_with_threshold(&query, 0.0) {
            let s = m.similarity;
            assert_eq!(
                s.overall,
                s.sector.contribution() + s.region.contribution() + s.strategy.contribution()
            );
            assert!(s.overall <= 100);
        }
    }
}

#[test]
fn test_filtering_is_complete_and_sorted() {
    let archive = CaseArchive::load_embedded().unwrap();
    let engine = MatchingEngine::new(&archive);

    for query in queries() {
        for threshold in [0.0, 0.1, 0.4, 0.5, 0.71, 1.0] {
            let matches = engine.find_matches_with_threshold(&query, threshold);
            let bound = threshold * 100.0;

            assert!(matches
                .iter()
                .all(|m| f64::from(m.similarity.overall) >= bound));
            assert!(matches
                .windows(2)
                .all(|w| w[0].similarity.overall >= w[1].similarity.overall));

            let returned: Vec<&CaseId> = matches.iter().map(|m| &m.historical_case.id).collect();
            for case in &archive {
                let overall = engine.score_case(case, &query).similarity.overall;
                if f64::from(overall) >= bound {
                    assert!(returned.contains(&&case.id), "{} wrongly excluded", case.id);
                }
            }
        }
    }
}

#[test]
fn test_probability_blend_endpoints() {
    let archive = CaseArchive::load_embedded().unwrap();
    let engine = MatchingEngine::new(&archive);

    // Nothing aligns with an empty query
    for m in engine.find_matches_with_threshold(&PrecedentQuery::new(), 0.0) {
        assert!((m.probability_of_success - 50.0).abs() < f64::EPSILON);
    }

    let query = PrecedentQuery::new()
        .with_industry("Technology")
        .with_country("Vietnam")
        .with_intent(StrategicIntent::Text("Joint Venture".into()));
    for m in engine.find_matches_with_threshold(&query, 1.0) {
        let base = m.historical_case.outcomes.result.base_rate();
        assert!((m.probability_of_success - base).abs() < f64::EPSILON);
    }
}

#[test]
fn test_rationale_is_keyed_by_result() {
    let archive = CaseArchive::load_embedded().unwrap();
    let engine = MatchingEngine::new(&archive);

    for m in engine.find_matches_with_threshold(&PrecedentQuery::new(), 0.0) {
        let factors = &m.applicable_factors;
        let learnings = &m.historical_case.outcomes.key_learnings;
        if learnings.is_empty() {
            continue;
        }
        if m.historical_case.outcomes.result.is_success() {
            assert_eq!(&factors.success_factors, learnings);
            assert!(factors.warnings.is_empty());
        } else {
            assert_eq!(&factors.warnings, learnings);
            assert!(factors.success_factors.is_empty());
        }
    }
}

#[test]
fn test_perfect_precedent_scenario() {
    let case = HistoricalCase {
        id: CaseId::new("CS-2021-AG"),
        title: "Solar JV".into(),
        entity: "SolarGlobal".into(),
        sector: "Technology".into(),
        country: "Vietnam".into(),
        year: 2021,
        strategy: "Joint Venture".into(),
        investment_size_million_usd: 150.0,
        outcomes: CaseOutcomes {
            result: OutcomeResult::Success,
            roi_achieved: 2.0,
            key_learnings: vec!["Local partner de-risked permitting".into()],
            time_to_market: None,
            jobs_created: None,
        },
    };
    let archive = CaseArchive::build(vec![case], Vec::new()).unwrap();
    let engine = MatchingEngine::new(&archive);

    let params = ReportParameters {
        industry: vec!["Technology".into()],
        country: Some("Vietnam".into()),
        region: Some("Asia-Pacific".into()),
        strategic_intent: StrategicIntent::Text("Joint Venture expansion".into()),
        ..Default::default()
    };
    let matches = engine.find_matches(&PrecedentQuery::from(&params));
    assert_eq!(matches.len(), 1);

    let m = &matches[0];
    assert_eq!(m.similarity.sector_match, 100);
    assert_eq!(m.similarity.region_match, 100);
    assert_eq!(m.similarity.strategy_match, 100);
    assert_eq!(m.similarity.overall, 100);
    assert_eq!(m.confidence_level, Confidence::High);
    assert!((m.probability_of_success - 85.0).abs() < f64::EPSILON);
    assert!((m.time_to_maturity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_unrelated_precedent_is_excluded() {
    // CS-GEN-1031: Finance / Poland / Acquisition / failure
    let case = filler_case(31);
    assert_eq!(case.sector, "Finance");
    assert_eq!(case.country, "Poland");
    assert_eq!(case.strategy, "Acquisition");
    assert_eq!(case.outcomes.result, OutcomeResult::Failure);

    let archive = CaseArchive::load_embedded().unwrap();
    let engine = MatchingEngine::new(&archive);
    let query = PrecedentQuery::new()
        .with_industry("Technology")
        .with_country("Vietnam")
        .with_region("Asia-Pacific")
        .with_intent(StrategicIntent::Text("Joint Venture expansion".into()));

    let case = archive.get(&case.id).unwrap();
    let m = engine.score_case(case, &query);
    assert_eq!(m.similarity.region_match, 0);
    assert_eq!(m.similarity.strategy_match, 0);
    // Finance is a common sector, so only the partial sector credit applies
    assert_eq!(m.similarity.sector, SectorAlignment::CommonSector);
    assert_eq!(m.similarity.overall, 10);
    assert_eq!(m.confidence_level, Confidence::Low);

    let matches = engine.find_matches_with_threshold(&query, DEFAULT_THRESHOLD);
    assert!(matches.iter().all(|m| m.historical_case.id != case.id));
}

#[test]
fn test_list_intent_is_comma_joined() {
    let archive = CaseArchive::load_embedded().unwrap();
    let engine = MatchingEngine::new(&archive);

    // "Joint Venture,Greenfield" contains the Intel Vietnam strategy token
    let query = PrecedentQuery::new().with_intent(StrategicIntent::List(vec![
        "Joint Venture".into(),
        "Greenfield".into(),
    ]));
    let intel = archive.get(&CaseId::new("CS-2009-Y")).unwrap();
    assert_eq!(engine.score_case(intel, &query).similarity.strategy_match, 100);

    // A token containing a comma only matches because entries are joined
    let mut case = filler_case(0);
    case.id = CaseId::new("CS-2000-BO");
    case.strategy = "Build,Operate".into();
    let archive = CaseArchive::build(vec![case], Vec::new()).unwrap();
    let engine = MatchingEngine::new(&archive);
    let query = PrecedentQuery::new()
        .with_intent(StrategicIntent::List(vec!["Build".into(), "Operate".into()]));
    let case = archive.get(&CaseId::new("CS-2000-BO")).unwrap();
    assert_eq!(engine.score_case(case, &query).similarity.strategy_match, 100);
}

#[test]
fn test_matching_is_idempotent() {
    let archive = CaseArchive::load_embedded().unwrap();
    let engine = MatchingEngine::with_config(
        &archive,
        MatchingConfig {
            threshold: 0.25,
            regions: RegionTable::default(),
        },
    );

    for query in queries() {
        let first: Vec<(String, u8)> = engine
            .find_matches(&query)
            .iter()
            .map(|m| (m.historical_case.id.to_string(), m.similarity.overall))
            .collect();
        let second: Vec<(String, u8)> = engine
            .find_matches(&query)
            .iter()
            .map(|m| (m.historical_case.id.to_string(), m.similarity.overall))
            .collect();
        assert_eq!(first, second);
    }
}
