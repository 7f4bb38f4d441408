//! API handlers for the Local Library REST endpoints

pub mod authors;
pub mod books;
pub mod borrowers;
pub mod copies;
pub mod genres;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod summary;
