use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_movie::ParseMovieRequestError;
use crate::domain::movie::models::Classification;
use crate::domain::movie::models::MovieName;
use crate::domain::movie::models::UpdateMovieCommand;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn update_movie(
    State(state): State<AppState>,
    Path(pelicula_id): Path<i32>,
    Json(body): Json<UpdateMovieRequest>,
) -> Result<StatusCode, ApiError> {
    if body.id != pelicula_id {
        return Err(ApiError::BadRequest(format!(
            "Body id {} does not match path id {}",
            body.id, pelicula_id
        )));
    }

    state
        .movie_service
        .update_movie(pelicula_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// HTTP request body for updating a movie (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateMovieRequest {
    id: i32,
    name: String,
    description: String,
    duration_minutes: i32,
    classification: String,
    image_route: Option<String>,
    category_id: i32,
}

impl UpdateMovieRequest {
    fn try_into_command(self) -> Result<UpdateMovieCommand, ParseMovieRequestError> {
        if self.duration_minutes <= 0 {
            return Err(ParseMovieRequestError::InvalidDuration(
                self.duration_minutes,
            ));
        }
        let name = MovieName::new(self.name)?;
        let classification = Classification::from_str(&self.classification)?;
        Ok(UpdateMovieCommand {
            name,
            description: self.description,
            duration_minutes: self.duration_minutes,
            classification,
            image_route: self.image_route,
            category_id: self.category_id,
        })
    }
}
