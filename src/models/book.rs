//! Book (bibliographic record) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{author::Author, genre::Genre};

/// Book row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
}

/// Book with joined author and genres for detail views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetails {
    pub id: i32,
    pub title: String,
    pub author: Option<Author>,
    pub summary: String,
    pub isbn: String,
    pub genres: Vec<Genre>,
    pub display_genre: String,
}

/// First three genre names joined by a comma, for list displays.
pub fn display_genre(genres: &[Genre]) -> String {
    genres
        .iter()
        .take(3)
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub author_id: Option<i32>,
    #[validate(length(max = 1000))]
    pub summary: String,
    #[validate(length(min = 13, max = 13))]
    pub isbn: String,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

/// Update book request (full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub author_id: Option<i32>,
    #[validate(length(max = 1000))]
    pub summary: String,
    #[validate(length(min = 13, max = 13))]
    pub isbn: String,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: i32, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_display_genre_takes_first_three() {
        let genres = vec![
            genre(1, "Fantasy"),
            genre(2, "Fiction"),
            genre(3, "Adventure"),
            genre(4, "Epic"),
        ];
        assert_eq!(display_genre(&genres), "Fantasy, Fiction, Adventure");
    }

    #[test]
    fn test_display_genre_empty() {
        assert_eq!(display_genre(&[]), "");
    }
}
