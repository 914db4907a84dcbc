use axum::extract::State;
use axum::http::StatusCode;

use super::CategoryData;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CategoryData>>, ApiError> {
    state
        .category_service
        .list_categories()
        .await
        .map_err(ApiError::from)
        .map(|categories| {
            ApiSuccess::new(
                StatusCode::OK,
                categories.iter().map(CategoryData::from).collect(),
            )
        })
}
