mod page_config;
mod pages;
mod templates;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use vitrine_core::{BusinessDirectory, PageConfigStore, ValidationErrors};

use crate::backend::Backend;
use crate::middleware::{limit_saves, request_id, RequestId, SaveLimiter, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState<S> {
    pub pages: PageConfigStore<S>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    /// Field path -> message, for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationErrors>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    database: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(request_id: impl Into<String>, data: T) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                details: None,
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    pub fn validation(request_id: impl Into<String>, details: ValidationErrors) -> Self {
        let mut error = Self::new(
            request_id,
            "validation_error",
            format!("page config has {} invalid field(s)", details.len()),
        );
        error.error.details = Some(details);
        error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_store_error(request_id: String, error: &impl std::fmt::Display) -> ApiError {
    tracing::error!(error = %error, "page config storage failed");
    ApiError::new(request_id, "internal_error", "page config storage failed")
}

/// Fail with `not_found` unless the business exists.
pub(super) async fn require_business<S: Backend>(
    state: &AppState<S>,
    request_id: &str,
    business_id: i64,
) -> Result<vitrine_core::Business, ApiError> {
    match state.pages.backend().get_business(business_id).await {
        Ok(Some(business)) => Ok(business),
        Ok(None) => Err(ApiError::new(
            request_id,
            "not_found",
            format!("business {business_id} not found"),
        )),
        Err(e) => Err(map_store_error(request_id.to_owned(), &e)),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

fn page_config_router<S: Backend>(saves: SaveLimiter) -> Router<AppState<S>> {
    Router::new()
        .route(
            "/api/v1/businesses/{business_id}/page-config",
            get(page_config::read_page_config::<S>).put(page_config::save_page_config::<S>),
        )
        .route_layer(axum::middleware::from_fn_with_state(saves, limit_saves))
}

pub fn build_app<S: Backend>(state: AppState<S>, saves: SaveLimiter) -> Router {
    Router::new()
        .route("/api/v1/health", get(health::<S>))
        .route("/api/v1/templates", get(templates::list_templates))
        .route(
            "/api/v1/businesses/{business_id}/page-config/edit",
            post(page_config::edit_page_config::<S>),
        )
        .route("/p/{business_id}", get(pages::public_page::<S>))
        .route("/preview/{business_id}", get(pages::preview_page::<S>))
        .merge(page_config_router(saves))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health<S: Backend>(
    State(state): State<AppState<S>>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    match state.pages.backend().health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::new(
                req_id.0,
                HealthData {
                    status: "ok",
                    database: "ok",
                },
            )),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::new(
                    req_id.0,
                    HealthData {
                        status: "degraded",
                        database: "unavailable",
                    },
                )),
            )
        }
    }
}
