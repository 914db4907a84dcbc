use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_category(
    State(state): State<AppState>,
    Path(categoria_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .category_service
        .delete_category(categoria_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
