use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::CreateMovieCommand;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::NewMovie;
use crate::domain::movie::models::UpdateMovieCommand;

/// Port for movie operations.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// Retrieve all movies ordered by name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// Retrieve movie by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_movie(&self, id: i32) -> Result<Movie, MovieError>;

    /// Create a new movie.
    ///
    /// # Errors
    /// * `AlreadyExists` - A movie with this name exists (name match is
    ///   case- and surrounding-whitespace-insensitive)
    /// * `CategoryNotFound` - Referenced category does not exist
    /// * `DatabaseError` - Store operation failed
    async fn create_movie(&self, command: CreateMovieCommand) -> Result<Movie, MovieError>;

    /// Replace an existing movie's fields; `created_at` is immutable.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `CategoryNotFound` - Referenced category does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update_movie(&self, id: i32, command: UpdateMovieCommand) -> Result<(), MovieError>;

    /// Delete an existing movie.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_movie(&self, id: i32) -> Result<(), MovieError>;

    /// Retrieve all movies in a category; empty when the category has no
    /// movies or does not exist.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_movies_in_category(&self, category_id: i32) -> Result<Vec<Movie>, MovieError>;

    /// Case-insensitive substring search over name and description.
    ///
    /// An empty term returns all movies.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn search_movies(&self, term: &str) -> Result<Vec<Movie>, MovieError>;
}

/// Persistence operations for movies.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Insert a new movie; the store assigns the id.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Foreign key constraint violated
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, movie: NewMovie) -> Result<Movie, MovieError>;

    /// Retrieve movie by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, MovieError>;

    /// True iff a movie with this name exists, ignoring case and
    /// surrounding whitespace.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn exists_by_name(&self, name: &str) -> Result<bool, MovieError>;

    /// Retrieve all movies ordered by name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    /// Retrieve all movies referencing a category.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Movie>, MovieError>;

    /// Case-insensitive substring search over name and description; an
    /// empty term returns all movies.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn search(&self, term: &str) -> Result<Vec<Movie>, MovieError>;

    /// Replace an existing movie's row.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `CategoryNotFound` - Foreign key constraint violated
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, movie: &Movie) -> Result<(), MovieError>;

    /// Remove a movie.
    ///
    /// # Errors
    /// * `NotFound` - Movie does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: i32) -> Result<(), MovieError>;
}
