//! # API REST
//!
//! REST API implementation for CUI.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request logging, status codes)
//!
//! Uses `api-shared` for request/response types and `cui-core` for the operations.

#![warn(rust_2018_idioms)]

pub mod config;

use api_shared::{
    CheckDigitsReq, CheckDigitsRes, ErrorRes, GenerateReq, GenerateRes, HealthRes, HealthService,
    ValidateReq, ValidateRes,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use cui_core::{CuiError, CuiService, ValidationOutcome};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::{ConfigError, RestConfig};

/// Application state shared across REST API handlers
///
/// Holds the stateless CUI service and the health probe, which carries the process start time.
#[derive(Clone, Default)]
pub struct AppState {
    cui_service: CuiService,
    health_service: HealthService,
}

impl AppState {
    pub fn new(cui_service: CuiService, health_service: HealthService) -> Self {
        Self {
            cui_service,
            health_service,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, generate, validate, check_digits),
    components(schemas(
        HealthRes,
        GenerateReq,
        GenerateRes,
        ValidateReq,
        ValidateRes,
        CheckDigitsReq,
        CheckDigitsRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

type ApiError = (StatusCode, Json<ErrorRes>);

/// Builds the REST router with CORS, request tracing and Swagger UI.
///
/// Every request is logged at `info` with its method, URI, status and latency.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate))
        .route("/validate", post(validate))
        .route("/check-digits", post(check_digits))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `cfg.addr()` and serves the REST API until the process exits.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(cfg: RestConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!("-- CUI REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

fn bad_request(e: &CuiError) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorRes::from(e)))
}

/// Message for a body that could not be read as the endpoint's request type.
fn rejection_message(rejection: &JsonRejection) -> String {
    tracing::debug!(status = %rejection.status(), "request body rejected: {}", rejection.body_text());
    format!("invalid request body: {}", rejection.body_text())
}

fn rejected(rejection: &JsonRejection) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorRes::new(rejection_message(rejection))),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Reports liveness, the current time and process uptime.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(state.health_service.check_health())
}

#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateReq,
    responses(
        (status = 200, description = "Identifier generated", body = GenerateRes),
        (status = 400, description = "Invalid operator, random digit count or request body", body = ErrorRes)
    )
)]
/// Generate a new CUI
///
/// # Errors
/// Returns `400 Bad Request` if the body is not a `GenerateReq`, the operator is not 4 digits or
/// `randomDigits` is outside 1 to 12.
#[axum::debug_handler]
async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateReq>, JsonRejection>,
) -> Result<Json<GenerateRes>, ApiError> {
    let Json(req) = payload.map_err(|rejection| rejected(&rejection))?;
    state
        .cui_service
        .generate(&req.operator, req.random_digits)
        .map(|generated| Json(generated.into()))
        .map_err(|e| bad_request(&e))
}

#[utoipa::path(
    post,
    path = "/validate",
    request_body = ValidateReq,
    responses(
        (status = 200, description = "Validation result (valid or not)", body = ValidateRes),
        (status = 400, description = "CUI does not have 20 characters, or the body has no string `cui`", body = ValidateRes)
    )
)]
/// Validate a CUI
///
/// An invalid CUI is a normal answer, reported with `200` and `valid: false`. Only a CUI of the
/// wrong length or a body without a string `cui` is answered with `400`, still carrying a
/// validation body.
#[axum::debug_handler]
async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateReq>, JsonRejection>,
) -> (StatusCode, Json<ValidateRes>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let res = ValidateRes::rejected(rejection_message(&rejection));
            return (StatusCode::BAD_REQUEST, Json(res));
        }
    };
    let result = state.cui_service.validate(&req.cui);
    let status = match result.outcome {
        ValidationOutcome::WrongLength => StatusCode::BAD_REQUEST,
        ValidationOutcome::Valid | ValidationOutcome::Mismatch | ValidationOutcome::Malformed => {
            StatusCode::OK
        }
    };
    (status, Json(result.into()))
}

#[utoipa::path(
    post,
    path = "/check-digits",
    request_body = CheckDigitsReq,
    responses(
        (status = 200, description = "Check digits computed", body = CheckDigitsRes),
        (status = 400, description = "Base is not PT followed by 16 digits, or the body has no string `base`", body = ErrorRes)
    )
)]
/// Compute the check digits for an 18-character base
///
/// # Errors
/// Returns `400 Bad Request` if the body is not a `CheckDigitsReq`, or the base is not 18
/// characters or not `PT` plus 16 digits.
#[axum::debug_handler]
async fn check_digits(
    State(state): State<AppState>,
    payload: Result<Json<CheckDigitsReq>, JsonRejection>,
) -> Result<Json<CheckDigitsRes>, ApiError> {
    let Json(req) = payload.map_err(|rejection| rejected(&rejection))?;
    state
        .cui_service
        .check_digits(&req.base)
        .map(|result| Json(result.into()))
        .map_err(|e| bad_request(&e))
}
