use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::NewCategory;
use crate::domain::category::ports::CategoryRepository;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &PgRow) -> Result<Category, CategoryError> {
        Ok(Category {
            id: row.get("id"),
            name: CategoryName::new(row.get("name"))?,
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: NewCategory) -> Result<Category, CategoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO categories (name, created_at)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(category.name.as_str())
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(Category {
            id: row.get("id"),
            name: category.name,
            created_at: category.created_at,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_category).transpose()
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, CategoryError> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM categories
                WHERE LOWER(TRIM(name)) = LOWER(TRIM($1))
            ) AS "exists"
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(row.get("exists"))
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_category).collect()
    }

    async fn update(&self, id: i32, name: &CategoryName) -> Result<(), CategoryError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), CategoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}
