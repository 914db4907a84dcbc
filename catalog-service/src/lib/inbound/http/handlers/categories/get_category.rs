use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::CategoryData;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_category(
    State(state): State<AppState>,
    Path(categoria_id): Path<i32>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    state
        .category_service
        .get_category(categoria_id)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}
