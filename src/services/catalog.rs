//! Catalog service: genres, authors, books and summary counts

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        author::{validate_author_dates, Author, CreateAuthor, UpdateAuthor},
        book::{Book, BookDetails, CreateBook, UpdateBook},
        borrower::{Borrower, CreateBorrower},
        copy::LoanStatus,
        genre::Genre,
    },
    repository::Repository,
};

/// Headline counts for the catalog landing page
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogSummary {
    pub books: i64,
    pub copies: i64,
    pub copies_available: i64,
    pub copies_overdue: i64,
    pub authors: i64,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -- Genres --------------------------------------------------------

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    pub async fn create_genre(&self, name: &str) -> AppResult<Genre> {
        self.repository.genres.create(name).await
    }

    pub async fn update_genre(&self, id: i32, name: &str) -> AppResult<Genre> {
        self.repository.genres.update(id, name).await
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        self.repository.genres.delete(id).await
    }

    // -- Authors -------------------------------------------------------

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    /// Create an author after checking the biographical date rules
    pub async fn create_author(&self, author: CreateAuthor, today: NaiveDate) -> AppResult<Author> {
        validate_author_dates(author.date_of_birth, author.date_of_death, today)?;
        self.repository
            .authors
            .create(
                &author.first_name,
                &author.last_name,
                author.date_of_birth,
                author.date_of_death,
            )
            .await
    }

    /// Update an author; the date rules apply on update as well
    pub async fn update_author(
        &self,
        id: i32,
        author: UpdateAuthor,
        today: NaiveDate,
    ) -> AppResult<Author> {
        validate_author_dates(author.date_of_birth, author.date_of_death, today)?;
        self.repository
            .authors
            .update(
                id,
                &author.first_name,
                &author.last_name,
                author.date_of_birth,
                author.date_of_death,
            )
            .await
    }

    /// Delete an author; their books survive with no author reference
    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    // -- Books ---------------------------------------------------------

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<BookDetails> {
        self.repository.books.get_details(id).await
    }

    pub async fn create_book(&self, book: CreateBook) -> AppResult<BookDetails> {
        self.verify_book_references(book.author_id, &book.genre_ids).await?;
        let created = self
            .repository
            .books
            .create(&book.title, book.author_id, &book.summary, &book.isbn, &book.genre_ids)
            .await?;
        self.repository.books.get_details(created.id).await
    }

    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<BookDetails> {
        self.verify_book_references(book.author_id, &book.genre_ids).await?;
        self.repository
            .books
            .update(id, &book.title, book.author_id, &book.summary, &book.isbn, &book.genre_ids)
            .await?;
        self.repository.books.get_details(id).await
    }

    /// Delete a book; its copies survive with no book reference
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    // -- Borrowers -----------------------------------------------------

    pub async fn list_borrowers(&self) -> AppResult<Vec<Borrower>> {
        self.repository.borrowers.list().await
    }

    pub async fn get_borrower(&self, id: i32) -> AppResult<Borrower> {
        self.repository.borrowers.get_by_id(id).await
    }

    pub async fn create_borrower(&self, borrower: CreateBorrower) -> AppResult<Borrower> {
        self.repository.borrowers.create(&borrower).await
    }

    /// Delete a borrower; copies lent to them keep a NULL borrower
    pub async fn delete_borrower(&self, id: i32) -> AppResult<()> {
        self.repository.borrowers.delete(id).await
    }

    // -- Summary -------------------------------------------------------

    /// Counts shown on the catalog landing page
    pub async fn summary(&self, today: NaiveDate) -> AppResult<CatalogSummary> {
        Ok(CatalogSummary {
            books: self.repository.books.count().await?,
            copies: self.repository.copies.count().await?,
            copies_available: self
                .repository
                .copies
                .count_by_status(LoanStatus::Available)
                .await?,
            copies_overdue: self.repository.copies.count_overdue(today).await?,
            authors: self.repository.authors.count().await?,
        })
    }

    async fn verify_book_references(
        &self,
        author_id: Option<i32>,
        genre_ids: &[i32],
    ) -> AppResult<()> {
        if let Some(author_id) = author_id {
            self.repository.authors.get_by_id(author_id).await?;
        }
        for genre_id in genre_ids {
            self.repository.genres.get_by_id(*genre_id).await?;
        }
        Ok(())
    }
}
