//! Data models for the Local Library

pub mod author;
pub mod book;
pub mod borrower;
pub mod copy;
pub mod genre;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookDetails};
pub use borrower::Borrower;
pub use copy::{BookCopy, BorrowedCopy, LoanStatus};
pub use genre::Genre;
