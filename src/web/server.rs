use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{DefaultBodyLimit, Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::archive::store::CaseArchive;
use crate::cli::ServeArgs;
use crate::core::query::{PrecedentQuery, ReportParameters};
use crate::indices::{evaluate_all, IndexReading, StrategicIndex};
use crate::matching::engine::{normalize_threshold, MatchingConfig, MatchingEngine};
use crate::utils::validation::{validate_case_id, validate_parameters};

/// Request body limit; report parameters are small JSON documents
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

/// Upper bound on matches returned in one response
pub const MAX_RESULT_LIMIT: usize = 500;

/// Shared application state
pub struct AppState {
    pub archive: CaseArchive,
    pub config: MatchingConfig,
}

impl AppState {
    /// Load the archive and matching configuration the server will use
    ///
    /// # Errors
    ///
    /// Returns an error if the archive or configuration cannot be loaded.
    pub fn load(args: &ServeArgs) -> anyhow::Result<Self> {
        let archive = match &args.archive {
            Some(path) => CaseArchive::load_from_file(path)?,
            None => CaseArchive::load_embedded()?,
        };
        let config = match &args.config {
            Some(path) => MatchingConfig::load_from_file(path)?,
            None => MatchingConfig::default(),
        };
        Ok(Self { archive, config })
    }
}

/// Enhanced error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Body of `POST /api/match`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MatchRequest {
    pub parameters: ReportParameters,
    /// Overrides the configured threshold
    pub threshold: Option<f64>,
    pub limit: Option<usize>,
}

/// Body of `POST /api/indices`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndicesRequest {
    pub parameters: ReportParameters,
    /// Index codes to compute; all when empty
    pub only: Vec<String>,
}

/// Query string of `GET /api/archive`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArchiveListParams {
    pub curated_only: bool,
    pub sector: Option<String>,
    pub country: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

fn error_reply(status: StatusCode, error: ErrorResponse) -> Response {
    (status, Json(error)).into_response()
}

fn bad_json(rejection: &JsonRejection) -> Response {
    error_reply(
        rejection.status(),
        create_safe_error_response(
            "invalid_request",
            "Request body must be a JSON object of report parameters.",
            Some(&rejection.body_text()),
        ),
    )
}

fn invalid_parameters(params: &ReportParameters) -> Option<Response> {
    validate_parameters(params).err().map(|e| {
        error_reply(
            StatusCode::BAD_REQUEST,
            create_safe_error_response("invalid_parameters", &e.to_string(), None),
        )
    })
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes over shared state, without middleware
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/match", post(match_handler))
        .route("/api/indices", post(indices_handler))
        .route("/api/archive", get(archive_handler))
        .route("/api/archive/{id}", get(case_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    let app = build_app(state).layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("no-referrer"),
            ))
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            .layer(ConcurrencyLimitLayer::new(100))
            .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let state = Arc::new(AppState::load(&args)?);
    tracing::info!(
        cases = state.archive.len(),
        threshold = state.config.threshold,
        "Archive loaded"
    );
    let app = create_router(state)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting precedent-matcher API server at http://{addr}");

    if args.open {
        if let Err(e) = open::that(format!("http://{addr}/api/archive")) {
            tracing::warn!("Could not open browser: {e}");
        }
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// API endpoint for precedent matching
async fn match_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Response {
    let start_time = std::time::Instant::now();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_json(&rejection),
    };
    if let Some(response) = invalid_parameters(&request.parameters) {
        return response;
    }

    let threshold = normalize_threshold(request.threshold.unwrap_or(state.config.threshold));
    let limit = request.limit.unwrap_or(MAX_RESULT_LIMIT).min(MAX_RESULT_LIMIT);

    let query = PrecedentQuery::from(&request.parameters);
    let engine = MatchingEngine::with_config(&state.archive, state.config.clone());
    let mut matches = engine.find_matches_with_threshold(&query, threshold);
    let total = matches.len();
    matches.truncate(limit);

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    tracing::debug!(total, returned = matches.len(), "Match request served");

    Json(serde_json::json!({
        "matches": matches,
        "total_matches": total,
        "processing_info": {
            "threshold": threshold,
            "result_limit": limit,
            "archive_size": state.archive.len(),
            "processing_time_ms": processing_time,
        }
    }))
    .into_response()
}

/// API endpoint for the strategic indices
async fn indices_handler(payload: Result<Json<IndicesRequest>, JsonRejection>) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_json(&rejection),
    };
    if let Some(response) = invalid_parameters(&request.parameters) {
        return response;
    }

    let readings: Vec<IndexReading> = if request.only.is_empty() {
        evaluate_all(&request.parameters)
    } else {
        let mut selected = Vec::with_capacity(request.only.len());
        for code in &request.only {
            let Some(index) = StrategicIndex::from_code(code) else {
                return error_reply(
                    StatusCode::BAD_REQUEST,
                    create_safe_error_response(
                        "unknown_index",
                        "Unknown index code requested.",
                        None,
                    ),
                );
            };
            selected.push(IndexReading::compute(index, &request.parameters));
        }
        selected
    };

    Json(serde_json::json!({
        "count": readings.len(),
        "indices": readings,
    }))
    .into_response()
}

/// API endpoint listing archive cases
async fn archive_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArchiveListParams>,
) -> Json<serde_json::Value> {
    let source = if params.curated_only {
        state.archive.curated()
    } else {
        state.archive.cases()
    };

    let matches_filter = |value: &str, filter: Option<&String>| {
        filter.map_or(true, |f| value.to_lowercase().contains(&f.to_lowercase()))
    };

    let cases: Vec<serde_json::Value> = source
        .iter()
        .filter(|c| matches_filter(&c.sector, params.sector.as_ref()))
        .filter(|c| matches_filter(&c.country, params.country.as_ref()))
        .map(|c| {
            serde_json::json!({
                "id": c.id,
                "title": c.title,
                "entity": c.entity,
                "sector": c.sector,
                "country": c.country,
                "year": c.year,
                "strategy": c.strategy,
                "result": c.outcomes.result,
                "provenance": c.provenance(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": cases.len(),
        "cases": cases,
    }))
}

/// API endpoint for a single case
async fn case_handler(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let Ok(case_id) = validate_case_id(&id) else {
        return error_reply(
            StatusCode::BAD_REQUEST,
            create_safe_error_response("invalid_case_id", "Invalid case ID.", None),
        );
    };

    match state.archive.get(&case_id) {
        Some(case) => Json(case).into_response(),
        None => error_reply(
            StatusCode::NOT_FOUND,
            create_safe_error_response("case_not_found", "No case with that ID.", None),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::StrategicIntent;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            archive: CaseArchive::load_embedded().unwrap(),
            config: MatchingConfig::default(),
        })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn vietnam_tech() -> ReportParameters {
        ReportParameters {
            industry: vec!["Technology".into()],
            country: Some("Vietnam".into()),
            region: Some("Asia-Pacific".into()),
            strategic_intent: StrategicIntent::Text("Joint Venture expansion".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_match_handler_ranks_results() {
        let request = MatchRequest {
            parameters: vietnam_tech(),
            limit: Some(5),
            ..Default::default()
        };
        let response = match_handler(State(test_state()), Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 5);
        assert!(body["total_matches"].as_u64().unwrap() >= 5);
        assert_eq!(matches[0]["similarity"]["overall"], 100);
        assert_eq!(matches[0]["confidence_level"], "high");
    }

    #[tokio::test]
    async fn test_match_handler_empty_query() {
        let response =
            match_handler(State(test_state()), Ok(Json(MatchRequest::default()))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_matches"], 0);
    }

    #[tokio::test]
    async fn test_match_handler_accepts_null_fields() {
        let request: MatchRequest = serde_json::from_str(
            r#"{"parameters": {
                "industry": null,
                "country": "Vietnam",
                "strategicIntent": null,
                "idealPartnerProfile": null
            }, "threshold": 0.3}"#,
        )
        .unwrap();
        let response = match_handler(State(test_state()), Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::OK);

        // Only the country dimension can contribute
        let body = body_json(response).await;
        let matches = body["matches"].as_array().unwrap();
        assert!(!matches.is_empty());
        for m in matches {
            assert_eq!(m["similarity"]["overall"], 30);
            assert_eq!(m["historical_case"]["country"], "Vietnam");
        }
    }

    #[tokio::test]
    async fn test_match_handler_rejects_oversized_parameters() {
        let request = MatchRequest {
            parameters: ReportParameters {
                industry: vec!["x".into(); 1000],
                ..Default::default()
            },
            ..Default::default()
        };
        let response = match_handler(State(test_state()), Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error_type"], "invalid_parameters");
        assert!(body["details"].is_null());
    }

    #[tokio::test]
    async fn test_indices_handler_all_and_selected() {
        let request = IndicesRequest {
            parameters: vietnam_tech(),
            ..Default::default()
        };
        let body = body_json(indices_handler(Ok(Json(request))).await).await;
        assert_eq!(body["count"], 18);

        let request = IndicesRequest {
            parameters: vietnam_tech(),
            only: vec!["rroi".into(), "LAI".into()],
        };
        let body = body_json(indices_handler(Ok(Json(request))).await).await;
        assert_eq!(body["indices"][0]["code"], "RROI");
        assert_eq!(body["indices"][0]["score"], 85.0);
        assert_eq!(body["indices"][1]["score"], 90.0);
    }

    #[tokio::test]
    async fn test_indices_handler_unknown_code() {
        let request = IndicesRequest {
            only: vec!["NOPE".into()],
            ..Default::default()
        };
        let response = indices_handler(Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_archive_handler_filters() {
        let state = test_state();
        let curated = state.archive.curated().len();

        let Json(body) = archive_handler(
            State(state.clone()),
            Query(ArchiveListParams {
                curated_only: true,
                ..Default::default()
            }),
        )
        .await;
        assert_eq!(body["count"].as_u64().unwrap() as usize, curated);

        let Json(body) = archive_handler(
            State(state),
            Query(ArchiveListParams {
                country: Some("germany".into()),
                ..Default::default()
            }),
        )
        .await;
        let cases = body["cases"].as_array().unwrap();
        assert!(!cases.is_empty());
        assert!(cases.iter().all(|c| c["country"] == "Germany"));
    }

    #[tokio::test]
    async fn test_case_handler() {
        let response = case_handler(State(test_state()), Path("CS-1999-U".into())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["entity"], "Walmart");
        assert_eq!(body["outcomes"]["result"], "failure");

        let response = case_handler(State(test_state()), Path("CS-0000-Z".into())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = case_handler(State(test_state()), Path("../secret".into())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_create_router() {
        assert!(create_router(test_state()).is_ok());
    }

    #[test]
    fn test_safe_error_response_hides_details() {
        let response = create_safe_error_response("test", "User message", Some("secret path"));
        assert_eq!(response.error, "User message");
        assert!(response.details.is_none());
    }
}
