use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::CategoryData;
use crate::domain::category::errors::CategoryNameError;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::ports::CategoryServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    state
        .category_service
        .create_category(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}

/// HTTP request body for creating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateCategoryRequestError {
    #[error("Invalid category name: {0}")]
    Name(#[from] CategoryNameError),
}

impl CreateCategoryRequest {
    fn try_into_command(self) -> Result<CreateCategoryCommand, ParseCreateCategoryRequestError> {
        let name = CategoryName::new(self.name)?;
        Ok(CreateCategoryCommand { name })
    }
}

impl From<ParseCreateCategoryRequestError> for ApiError {
    fn from(err: ParseCreateCategoryRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
