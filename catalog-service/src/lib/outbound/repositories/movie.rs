use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Classification;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieName;
use crate::domain::movie::models::NewMovie;
use crate::domain::movie::ports::MovieRepository;

pub struct PostgresMovieRepository {
    pool: PgPool,
}

const SELECT_MOVIE_COLUMNS: &str = r#"
    SELECT id, name, description, duration_minutes, classification,
           image_route, category_id, created_at
    FROM movies
"#;

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_movie(row: &PgRow) -> Result<Movie, MovieError> {
        Ok(Movie {
            id: row.get("id"),
            name: MovieName::new(row.get("name"))?,
            description: row.get("description"),
            duration_minutes: row.get("duration_minutes"),
            classification: Classification::from_str(
                row.get::<String, _>("classification").as_str(),
            )?,
            image_route: row.get("image_route"),
            category_id: row.get("category_id"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn create(&self, movie: NewMovie) -> Result<Movie, MovieError> {
        let row = sqlx::query(
            r#"
            INSERT INTO movies (name, description, duration_minutes, classification,
                                image_route, category_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(movie.name.as_str())
        .bind(&movie.description)
        .bind(movie.duration_minutes)
        .bind(movie.classification.as_str())
        .bind(&movie.image_route)
        .bind(movie.category_id)
        .bind(movie.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return MovieError::CategoryNotFound(movie.category_id);
                }
            }
            MovieError::DatabaseError(e.to_string())
        })?;

        Ok(Movie {
            id: row.get("id"),
            name: movie.name,
            description: movie.description,
            duration_minutes: movie.duration_minutes,
            classification: movie.classification,
            image_route: movie.image_route,
            category_id: movie.category_id,
            created_at: movie.created_at,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, MovieError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_MOVIE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_movie).transpose()
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, MovieError> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM movies
                WHERE LOWER(TRIM(name)) = LOWER(TRIM($1))
            ) AS "exists"
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(row.get("exists"))
    }

    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query(&format!("{} ORDER BY name", SELECT_MOVIE_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_movie).collect()
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query(&format!(
            "{} WHERE category_id = $1 ORDER BY name",
            SELECT_MOVIE_COLUMNS
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_movie).collect()
    }

    async fn search(&self, term: &str) -> Result<Vec<Movie>, MovieError> {
        // A missing term means "return everything".
        if term.is_empty() {
            return self.list_all().await;
        }

        let pattern = format!("%{}%", term);
        let rows = sqlx::query(&format!(
            "{} WHERE name ILIKE $1 OR description ILIKE $1 ORDER BY name",
            SELECT_MOVIE_COLUMNS
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_movie).collect()
    }

    async fn update(&self, movie: &Movie) -> Result<(), MovieError> {
        let result = sqlx::query(
            r#"
            UPDATE movies
            SET name = $2, description = $3, duration_minutes = $4,
                classification = $5, image_route = $6, category_id = $7
            WHERE id = $1
            "#,
        )
        .bind(movie.id)
        .bind(movie.name.as_str())
        .bind(&movie.description)
        .bind(movie.duration_minutes)
        .bind(movie.classification.as_str())
        .bind(&movie.image_route)
        .bind(movie.category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return MovieError::CategoryNotFound(movie.category_id);
                }
            }
            MovieError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(MovieError::NotFound(movie.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), MovieError> {
        let result = sqlx::query(
            r#"
            DELETE FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(MovieError::NotFound(id));
        }

        Ok(())
    }
}
