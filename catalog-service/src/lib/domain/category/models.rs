use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::errors::CategoryNameError;

/// Category entity grouping movies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: CategoryName,
    pub created_at: DateTime<Utc>,
}

/// Category record ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub created_at: DateTime<Utc>,
}

/// Category name value type: non-blank, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid category name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, CategoryNameError> {
        if name.trim().is_empty() {
            return Err(CategoryNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(CategoryNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new category.
#[derive(Debug)]
pub struct CreateCategoryCommand {
    pub name: CategoryName,
}

/// Command to rename an existing category.
///
/// PATCH and PUT both carry the full replacement name.
#[derive(Debug)]
pub struct UpdateCategoryCommand {
    pub name: CategoryName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_valid() {
        let name = CategoryName::new("Drama".to_string()).unwrap();
        assert_eq!(name.as_str(), "Drama");
    }

    #[test]
    fn test_category_name_blank() {
        assert!(matches!(
            CategoryName::new("   ".to_string()),
            Err(CategoryNameError::Empty)
        ));
    }

    #[test]
    fn test_category_name_too_long() {
        assert!(matches!(
            CategoryName::new("x".repeat(101)),
            Err(CategoryNameError::TooLong { .. })
        ));
    }
}
