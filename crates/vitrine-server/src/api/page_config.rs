use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vitrine_core::{apply, validate, EditorAction, PageConfig, Slot, StoreError, ValidationErrors};

use super::{map_store_error, require_business, ApiError, ApiResponse, AppState};
use crate::backend::Backend;
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct SlotQuery {
    #[serde(default)]
    slot: Slot,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PageConfigData {
    business_id: i64,
    slot: Slot,
    config: PageConfig,
}

#[derive(Debug, Deserialize)]
pub(super) struct SaveRequest {
    config: Value,
    #[serde(default)]
    publish: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct SaveData {
    saved: bool,
    publish: bool,
    config: PageConfig,
}

#[derive(Debug, Deserialize)]
pub(super) struct EditRequest {
    config: Value,
    action: EditorAction,
}

#[derive(Debug, Serialize)]
pub(super) struct EditData {
    config: PageConfig,
    /// Problems a save of this config would be rejected for; `None` when it is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

/// GET /api/v1/businesses/{id}/page-config?slot=draft|published
///
/// Always returns a config: a slot never written reads as the default.
pub(in crate::api) async fn read_page_config<S: Backend>(
    State(state): State<AppState<S>>,
    Extension(req_id): Extension<RequestId>,
    Path(business_id): Path<i64>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<ApiResponse<PageConfigData>>, ApiError> {
    let rid = req_id.0;
    require_business(&state, &rid, business_id).await?;

    let config = state
        .pages
        .read(business_id, query.slot)
        .await
        .map_err(|e| map_store_error(rid.clone(), &e))?;

    Ok(Json(ApiResponse::new(
        rid,
        PageConfigData {
            business_id,
            slot: query.slot,
            config,
        },
    )))
}

/// PUT /api/v1/businesses/{id}/page-config: save the draft, or publish.
pub(in crate::api) async fn save_page_config<S: Backend>(
    State(state): State<AppState<S>>,
    Extension(req_id): Extension<RequestId>,
    Path(business_id): Path<i64>,
    Json(body): Json<SaveRequest>,
) -> Result<Json<ApiResponse<SaveData>>, ApiError> {
    let rid = req_id.0;
    require_business(&state, &rid, business_id).await?;

    let config = state
        .pages
        .save_value(business_id, &body.config, body.publish)
        .await
        .map_err(|e| match e {
            StoreError::Invalid(details) => ApiError::validation(rid.clone(), details),
            StoreError::Backend(e) => map_store_error(rid.clone(), &e),
        })?;

    Ok(Json(ApiResponse::new(
        rid,
        SaveData {
            saved: true,
            publish: body.publish,
            config,
        },
    )))
}

/// POST /api/v1/businesses/{id}/page-config/edit: apply one editor action
/// to the submitted config and return the complete result. Nothing is stored.
///
/// The submitted config only has to decode: it may be a result this endpoint
/// returned earlier together with `errors`.
pub(in crate::api) async fn edit_page_config<S: Backend>(
    State(state): State<AppState<S>>,
    Extension(req_id): Extension<RequestId>,
    Path(business_id): Path<i64>,
    Json(body): Json<EditRequest>,
) -> Result<Json<ApiResponse<EditData>>, ApiError> {
    let rid = req_id.0;
    require_business(&state, &rid, business_id).await?;

    let current: PageConfig = serde_json::from_value(body.config).map_err(|e| {
        ApiError::new(rid.clone(), "bad_request", format!("config does not decode: {e}"))
    })?;
    let config = apply(&current, &body.action);
    let errors = validate(&config).err();

    Ok(Json(ApiResponse::new(rid, EditData { config, errors })))
}
