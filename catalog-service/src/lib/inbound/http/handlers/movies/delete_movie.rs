use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(pelicula_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .movie_service
        .delete_movie(pelicula_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
