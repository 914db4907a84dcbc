use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::movie::models::Movie;

pub mod create_movie;
pub mod delete_movie;
pub mod get_movie;
pub mod list_movies;
pub mod movies_in_category;
pub mod search_movies;
pub mod update_movie;

pub use create_movie::create_movie;
pub use delete_movie::delete_movie;
pub use get_movie::get_movie;
pub use list_movies::list_movies;
pub use movies_in_category::movies_in_category;
pub use search_movies::search_movies;
pub use update_movie::update_movie;

/// Public projection of a movie record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieData {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub classification: String,
    pub image_route: Option<String>,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name.as_str().to_string(),
            description: movie.description.clone(),
            duration_minutes: movie.duration_minutes,
            classification: movie.classification.as_str().to_string(),
            image_route: movie.image_route.clone(),
            category_id: movie.category_id,
            created_at: movie.created_at,
        }
    }
}
