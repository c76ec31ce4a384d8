use axum::{Extension, Json};
use vitrine_core::{template_catalog, TemplateInfo};

use super::ApiResponse;
use crate::middleware::RequestId;

/// GET /api/v1/templates: entries for the template selector.
pub(in crate::api) async fn list_templates(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<TemplateInfo>>> {
    Json(ApiResponse::new(req_id.0, template_catalog()))
}
