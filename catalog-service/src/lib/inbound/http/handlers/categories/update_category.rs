use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::category::models::CategoryName;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Shared by PATCH and PUT; both carry the full replacement name.
pub async fn update_category(
    State(state): State<AppState>,
    Path(categoria_id): Path<i32>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<StatusCode, ApiError> {
    if body.id != categoria_id {
        return Err(ApiError::BadRequest(format!(
            "Body id {} does not match path id {}",
            body.id, categoria_id
        )));
    }

    let name = CategoryName::new(body.name)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .category_service
        .update_category(categoria_id, UpdateCategoryCommand { name })
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// HTTP request body for updating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryRequest {
    id: i32,
    name: String,
}
