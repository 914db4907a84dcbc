use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::CreateMovieCommand;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::NewMovie;
use crate::domain::movie::models::UpdateMovieCommand;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::movie::ports::MovieServicePort;

/// Concrete implementation of MovieServicePort.
///
/// Generic over the repository for testability. Category existence is
/// enforced by the store's foreign key, surfaced as `CategoryNotFound`.
pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    repository: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<MR> MovieServicePort for MovieService<MR>
where
    MR: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.repository.list_all().await
    }

    async fn get_movie(&self, id: i32) -> Result<Movie, MovieError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn create_movie(&self, command: CreateMovieCommand) -> Result<Movie, MovieError> {
        if self.repository.exists_by_name(command.name.as_str()).await? {
            return Err(MovieError::AlreadyExists(command.name.to_string()));
        }

        let movie = NewMovie {
            name: command.name,
            description: command.description,
            duration_minutes: command.duration_minutes,
            classification: command.classification,
            image_route: command.image_route,
            category_id: command.category_id,
            created_at: Utc::now(),
        };

        self.repository.create(movie).await
    }

    async fn update_movie(&self, id: i32, command: UpdateMovieCommand) -> Result<(), MovieError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))?;

        let movie = Movie {
            id,
            name: command.name,
            description: command.description,
            duration_minutes: command.duration_minutes,
            classification: command.classification,
            image_route: command.image_route,
            category_id: command.category_id,
            created_at: existing.created_at,
        };

        self.repository.update(&movie).await
    }

    async fn delete_movie(&self, id: i32) -> Result<(), MovieError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))?;

        self.repository.delete(id).await
    }

    async fn list_movies_in_category(&self, category_id: i32) -> Result<Vec<Movie>, MovieError> {
        self.repository.find_by_category(category_id).await
    }

    async fn search_movies(&self, term: &str) -> Result<Vec<Movie>, MovieError> {
        self.repository.search(term).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::movie::models::Classification;
    use crate::domain::movie::models::MovieName;

    mock! {
        pub TestMovieRepository {}

        #[async_trait]
        impl MovieRepository for TestMovieRepository {
            async fn create(&self, movie: NewMovie) -> Result<Movie, MovieError>;
            async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, MovieError>;
            async fn exists_by_name(&self, name: &str) -> Result<bool, MovieError>;
            async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;
            async fn find_by_category(&self, category_id: i32) -> Result<Vec<Movie>, MovieError>;
            async fn search(&self, term: &str) -> Result<Vec<Movie>, MovieError>;
            async fn update(&self, movie: &Movie) -> Result<(), MovieError>;
            async fn delete(&self, id: i32) -> Result<(), MovieError>;
        }
    }

    fn matrix(id: i32) -> Movie {
        Movie {
            id,
            name: MovieName::new("The Matrix".to_string()).unwrap(),
            description: "A hacker discovers reality is a simulation".to_string(),
            duration_minutes: 136,
            classification: Classification::SixteenPlus,
            image_route: None,
            category_id: 1,
            created_at: Utc::now(),
        }
    }

    fn create_command() -> CreateMovieCommand {
        CreateMovieCommand {
            name: MovieName::new("The Matrix".to_string()).unwrap(),
            description: "A hacker discovers reality is a simulation".to_string(),
            duration_minutes: 136,
            classification: Classification::SixteenPlus,
            image_route: None,
            category_id: 1,
        }
    }

    #[tokio::test]
    async fn test_create_movie_success() {
        let mut repository = MockTestMovieRepository::new();

        repository
            .expect_exists_by_name()
            .withf(|name| name == "The Matrix")
            .times(1)
            .returning(|_| Ok(false));

        repository
            .expect_create()
            .withf(|movie| movie.name.as_str() == "The Matrix" && movie.category_id == 1)
            .times(1)
            .returning(|movie| {
                Ok(Movie {
                    id: 1,
                    name: movie.name,
                    description: movie.description,
                    duration_minutes: movie.duration_minutes,
                    classification: movie.classification,
                    image_route: movie.image_route,
                    category_id: movie.category_id,
                    created_at: movie.created_at,
                })
            });

        let service = MovieService::new(Arc::new(repository));

        let movie = service.create_movie(create_command()).await.unwrap();
        assert_eq!(movie.id, 1);
        assert_eq!(movie.classification, Classification::SixteenPlus);
    }

    #[tokio::test]
    async fn test_create_movie_duplicate_name() {
        let mut repository = MockTestMovieRepository::new();

        repository
            .expect_exists_by_name()
            .times(1)
            .returning(|_| Ok(true));

        repository.expect_create().times(0);

        let service = MovieService::new(Arc::new(repository));

        let result = service.create_movie(create_command()).await;
        assert!(matches!(result.unwrap_err(), MovieError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_create_movie_unknown_category() {
        let mut repository = MockTestMovieRepository::new();

        repository
            .expect_exists_by_name()
            .times(1)
            .returning(|_| Ok(false));

        repository
            .expect_create()
            .times(1)
            .returning(|movie| Err(MovieError::CategoryNotFound(movie.category_id)));

        let service = MovieService::new(Arc::new(repository));

        let result = service.create_movie(create_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            MovieError::CategoryNotFound(1)
        ));
    }

    #[tokio::test]
    async fn test_update_movie_keeps_created_at() {
        let mut repository = MockTestMovieRepository::new();

        let existing = matrix(1);
        let original_created_at = existing.created_at;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(move |movie| {
                movie.id == 1
                    && movie.name.as_str() == "The Matrix Reloaded"
                    && movie.created_at == original_created_at
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = MovieService::new(Arc::new(repository));

        let command = UpdateMovieCommand {
            name: MovieName::new("The Matrix Reloaded".to_string()).unwrap(),
            description: "Sequel".to_string(),
            duration_minutes: 138,
            classification: Classification::SixteenPlus,
            image_route: None,
            category_id: 1,
        };

        assert!(service.update_movie(1, command).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_movie_not_found() {
        let mut repository = MockTestMovieRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        repository.expect_update().times(0);

        let service = MovieService::new(Arc::new(repository));

        let command = UpdateMovieCommand {
            name: MovieName::new("The Matrix".to_string()).unwrap(),
            description: "desc".to_string(),
            duration_minutes: 136,
            classification: Classification::SixteenPlus,
            image_route: None,
            category_id: 1,
        };

        let result = service.update_movie(42, command).await;
        assert!(matches!(result.unwrap_err(), MovieError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_delete_movie_success() {
        let mut repository = MockTestMovieRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(matrix(id))));

        repository
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = MovieService::new(Arc::new(repository));

        assert!(service.delete_movie(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_movies_in_category() {
        let mut repository = MockTestMovieRepository::new();

        repository
            .expect_find_by_category()
            .withf(|category_id| *category_id == 1)
            .times(1)
            .returning(|_| Ok(vec![matrix(1), matrix(2)]));

        let service = MovieService::new(Arc::new(repository));

        let movies = service.list_movies_in_category(1).await.unwrap();
        assert_eq!(movies.len(), 2);
        assert!(movies.iter().all(|movie| movie.category_id == 1));
    }

    #[tokio::test]
    async fn test_search_movies_passes_term() {
        let mut repository = MockTestMovieRepository::new();

        repository
            .expect_search()
            .withf(|term| term == "matrix")
            .times(1)
            .returning(|_| Ok(vec![matrix(1)]));

        let service = MovieService::new(Arc::new(repository));

        let movies = service.search_movies("matrix").await.unwrap();
        assert_eq!(movies.len(), 1);
    }
}
