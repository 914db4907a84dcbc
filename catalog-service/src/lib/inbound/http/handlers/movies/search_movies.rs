use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::MovieData;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Query parameters for movie search; a missing `nombre` returns all
/// movies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchMoviesParams {
    nombre: Option<String>,
}

pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchMoviesParams>,
) -> Result<ApiSuccess<Vec<MovieData>>, ApiError> {
    let term = params.nombre.unwrap_or_default();

    state
        .movie_service
        .search_movies(&term)
        .await
        .map_err(ApiError::from)
        .map(|movies| ApiSuccess::new(StatusCode::OK, movies.iter().map(MovieData::from).collect()))
}
