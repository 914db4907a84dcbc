use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::UpdateCategoryCommand;

/// Port for category operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Retrieve all categories ordered by name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Retrieve category by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_category(&self, id: i32) -> Result<Category, CategoryError>;

    /// Create a new category.
    ///
    /// # Errors
    /// * `AlreadyExists` - A category with this name exists (name match is
    ///   case- and surrounding-whitespace-insensitive)
    /// * `DatabaseError` - Store operation failed
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Replace an existing category's name.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update_category(
        &self,
        id: i32,
        command: UpdateCategoryCommand,
    ) -> Result<(), CategoryError>;

    /// Delete an existing category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_category(&self, id: i32) -> Result<(), CategoryError>;
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Insert a new category; the store assigns the id.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, category: NewCategory) -> Result<Category, CategoryError>;

    /// Retrieve category by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, CategoryError>;

    /// True iff a category with this name exists, ignoring case and
    /// surrounding whitespace.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn exists_by_name(&self, name: &str) -> Result<bool, CategoryError>;

    /// Retrieve all categories ordered by name.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Replace the name of an existing category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, id: i32, name: &CategoryName) -> Result<(), CategoryError>;

    /// Remove a category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: i32) -> Result<(), CategoryError>;
}
