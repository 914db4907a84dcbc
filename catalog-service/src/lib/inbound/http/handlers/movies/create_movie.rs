use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::MovieData;
use crate::domain::movie::errors::ClassificationError;
use crate::domain::movie::errors::MovieNameError;
use crate::domain::movie::models::Classification;
use crate::domain::movie::models::CreateMovieCommand;
use crate::domain::movie::models::MovieName;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<CreateMovieRequest>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    state
        .movie_service
        .create_movie(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::CREATED, movie.into()))
}

/// HTTP request body for creating a movie (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMovieRequest {
    name: String,
    description: String,
    duration_minutes: i32,
    classification: String,
    image_route: Option<String>,
    category_id: i32,
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseMovieRequestError {
    #[error("Invalid movie name: {0}")]
    Name(#[from] MovieNameError),

    #[error("Invalid classification: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Duration must be positive, got {0}")]
    InvalidDuration(i32),
}

impl CreateMovieRequest {
    fn try_into_command(self) -> Result<CreateMovieCommand, ParseMovieRequestError> {
        if self.duration_minutes <= 0 {
            return Err(ParseMovieRequestError::InvalidDuration(
                self.duration_minutes,
            ));
        }
        let name = MovieName::new(self.name)?;
        let classification = Classification::from_str(&self.classification)?;
        Ok(CreateMovieCommand {
            name,
            description: self.description,
            duration_minutes: self.duration_minutes,
            classification,
            image_route: self.image_route,
            category_id: self.category_id,
        })
    }
}

impl From<ParseMovieRequestError> for ApiError {
    fn from(err: ParseMovieRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
