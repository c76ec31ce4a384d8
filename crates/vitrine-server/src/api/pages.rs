use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use vitrine_core::{BusinessDirectory, Slot};

use super::AppState;
use crate::backend::Backend;

const NOT_FOUND_PAGE: &str =
    "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\"><title>Page introuvable</title></head>\
     <body><h1>Page introuvable</h1></body></html>";
const ERROR_PAGE: &str =
    "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\"><title>Erreur</title></head>\
     <body><h1>Cette page est momentanément indisponible.</h1></body></html>";

/// GET /p/{id}: the public page, rendered from the published slot.
pub(in crate::api) async fn public_page<S: Backend>(
    State(state): State<AppState<S>>,
    Path(business_id): Path<i64>,
) -> Response {
    render(&state, business_id, Slot::Published).await
}

/// GET /preview/{id}: the editor preview, rendered from the draft slot.
pub(in crate::api) async fn preview_page<S: Backend>(
    State(state): State<AppState<S>>,
    Path(business_id): Path<i64>,
) -> Response {
    render(&state, business_id, Slot::Draft).await
}

async fn render<S: Backend>(state: &AppState<S>, business_id: i64, slot: Slot) -> Response {
    let business = match state.pages.backend().get_business(business_id).await {
        Ok(Some(business)) => business,
        Ok(None) => return (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
        Err(e) => {
            tracing::error!(business_id, error = %e, "business lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response();
        }
    };

    match state.pages.read_stored(business_id, slot).await {
        Ok(stored) => Html(vitrine_render::render_page(&business, &stored)).into_response(),
        Err(e) => {
            tracing::error!(business_id, slot = %slot, error = %e, "page config read failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
        }
    }
}
