use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::movie::errors::ClassificationError;
use crate::domain::movie::errors::MovieNameError;

/// Movie entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
    pub name: MovieName,
    pub description: String,
    pub duration_minutes: i32,
    pub classification: Classification,
    pub image_route: Option<String>,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Movie record ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub name: MovieName,
    pub description: String,
    pub duration_minutes: i32,
    pub classification: Classification,
    pub image_route: Option<String>,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Movie name value type: non-blank, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieName(String);

impl MovieName {
    const MAX_LENGTH: usize = 200;

    /// Create a new valid movie name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 200 characters
    pub fn new(name: String) -> Result<Self, MovieNameError> {
        if name.trim().is_empty() {
            return Err(MovieNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(MovieNameError::TooLong {
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

impl fmt::Display for MovieName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Minimum-age classification tag, stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    SevenPlus,
    ThirteenPlus,
    SixteenPlus,
    EighteenPlus,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::SevenPlus => "seven_plus",
            Classification::ThirteenPlus => "thirteen_plus",
            Classification::SixteenPlus => "sixteen_plus",
            Classification::EighteenPlus => "eighteen_plus",
        }
    }
}

impl FromStr for Classification {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seven_plus" => Ok(Classification::SevenPlus),
            "thirteen_plus" => Ok(Classification::ThirteenPlus),
            "sixteen_plus" => Ok(Classification::SixteenPlus),
            "eighteen_plus" => Ok(Classification::EighteenPlus),
            other => Err(ClassificationError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new movie.
#[derive(Debug)]
pub struct CreateMovieCommand {
    pub name: MovieName,
    pub description: String,
    pub duration_minutes: i32,
    pub classification: Classification,
    pub image_route: Option<String>,
    pub category_id: i32,
}

/// Command to replace an existing movie's fields.
#[derive(Debug)]
pub struct UpdateMovieCommand {
    pub name: MovieName,
    pub description: String,
    pub duration_minutes: i32,
    pub classification: Classification,
    pub image_route: Option<String>,
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_name_valid() {
        let name = MovieName::new("The Matrix".to_string()).unwrap();
        assert_eq!(name.as_str(), "The Matrix");
    }

    #[test]
    fn test_movie_name_blank() {
        assert!(matches!(
            MovieName::new("".to_string()),
            Err(MovieNameError::Empty)
        ));
    }

    #[test]
    fn test_classification_round_trip() {
        for classification in [
            Classification::SevenPlus,
            Classification::ThirteenPlus,
            Classification::SixteenPlus,
            Classification::EighteenPlus,
        ] {
            assert_eq!(
                Classification::from_str(classification.as_str()).unwrap(),
                classification
            );
        }
    }

    #[test]
    fn test_classification_unknown() {
        assert!(matches!(
            Classification::from_str("nc17"),
            Err(ClassificationError::Unknown(_))
        ));
    }
}
