use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;

/// Concrete implementation of CategoryServicePort.
///
/// Each operation issues at most one read and one write against the store.
/// Generic over the repository for testability.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_all().await
    }

    async fn get_category(&self, id: i32) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        // Advisory duplicate check; the store carries no unique constraint
        // on category names.
        if self.repository.exists_by_name(command.name.as_str()).await? {
            return Err(CategoryError::AlreadyExists(command.name.to_string()));
        }

        let category = NewCategory {
            name: command.name,
            created_at: Utc::now(),
        };

        self.repository.create(category).await
    }

    async fn update_category(
        &self,
        id: i32,
        command: UpdateCategoryCommand,
    ) -> Result<(), CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        self.repository.update(id, &command.name).await
    }

    async fn delete_category(&self, id: i32) -> Result<(), CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::category::models::CategoryName;

    mock! {
        pub TestCategoryRepository {}

        #[async_trait]
        impl CategoryRepository for TestCategoryRepository {
            async fn create(&self, category: NewCategory) -> Result<Category, CategoryError>;
            async fn find_by_id(&self, id: i32) -> Result<Option<Category>, CategoryError>;
            async fn exists_by_name(&self, name: &str) -> Result<bool, CategoryError>;
            async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;
            async fn update(&self, id: i32, name: &CategoryName) -> Result<(), CategoryError>;
            async fn delete(&self, id: i32) -> Result<(), CategoryError>;
        }
    }

    fn drama(id: i32) -> Category {
        Category {
            id,
            name: CategoryName::new("Drama".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_category_success() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_exists_by_name()
            .withf(|name| name == "Drama")
            .times(1)
            .returning(|_| Ok(false));

        repository
            .expect_create()
            .withf(|category| category.name.as_str() == "Drama")
            .times(1)
            .returning(|category| {
                Ok(Category {
                    id: 1,
                    name: category.name,
                    created_at: category.created_at,
                })
            });

        let service = CategoryService::new(Arc::new(repository));

        let command = CreateCategoryCommand {
            name: CategoryName::new("Drama".to_string()).unwrap(),
        };

        let category = service.create_category(command).await.unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(category.name.as_str(), "Drama");
    }

    #[tokio::test]
    async fn test_create_category_duplicate_name() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_exists_by_name()
            .times(1)
            .returning(|_| Ok(true));

        repository.expect_create().times(0);

        let service = CategoryService::new(Arc::new(repository));

        let command = CreateCategoryCommand {
            name: CategoryName::new("Drama".to_string()).unwrap(),
        };

        let result = service.create_category(command).await;
        assert!(matches!(
            result.unwrap_err(),
            CategoryError::AlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CategoryService::new(Arc::new(repository));

        let result = service.get_category(42).await;
        assert!(matches!(result.unwrap_err(), CategoryError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_update_category_success() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(drama(id))));

        repository
            .expect_update()
            .withf(|id, name| *id == 1 && name.as_str() == "Thriller")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = CategoryService::new(Arc::new(repository));

        let command = UpdateCategoryCommand {
            name: CategoryName::new("Thriller".to_string()).unwrap(),
        };

        assert!(service.update_category(1, command).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_category_not_found() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        repository.expect_update().times(0);

        let service = CategoryService::new(Arc::new(repository));

        let command = UpdateCategoryCommand {
            name: CategoryName::new("Thriller".to_string()).unwrap(),
        };

        let result = service.update_category(42, command).await;
        assert!(matches!(result.unwrap_err(), CategoryError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_delete_category_success() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(drama(id))));

        repository
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = CategoryService::new(Arc::new(repository));

        assert!(service.delete_category(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut repository = MockTestCategoryRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![drama(1), drama(2)]));

        let service = CategoryService::new(Arc::new(repository));

        let categories = service.list_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
    }
}
