//! Lending service: copy management and the loan renewal workflow

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::copy::{BookCopy, BorrowedCopy, CreateCopy, UpdateCopy},
    repository::Repository,
};

/// Hard upper bound on a renewal: at most this many weeks ahead of today
pub const MAX_RENEWAL_WEEKS: i64 = 4;

/// Default renewal period offered to librarians
pub const DEFAULT_RENEWAL_WEEKS: i64 = 3;

/// Default due date proposed when a librarian opens the renewal form
pub fn proposed_renewal_date(today: NaiveDate) -> NaiveDate {
    today + Duration::weeks(DEFAULT_RENEWAL_WEEKS)
}

/// Validate a proposed renewal due date against `today`.
///
/// The date must not be in the past and not more than
/// [`MAX_RENEWAL_WEEKS`] weeks in the future. Both boundaries are inclusive.
pub fn validate_renewal_date(proposed: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if proposed < today {
        return Err(AppError::Validation(
            "due_back: invalid date - renewal in past".to_string(),
        ));
    }
    if proposed > today + Duration::weeks(MAX_RENEWAL_WEEKS) {
        return Err(AppError::Validation(format!(
            "due_back: invalid date - renewal more than {} weeks ahead",
            MAX_RENEWAL_WEEKS
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all copies
    pub async fn list_copies(&self) -> AppResult<Vec<BookCopy>> {
        self.repository.copies.list().await
    }

    /// Get a copy by ID
    pub async fn get_copy(&self, id: Uuid) -> AppResult<BookCopy> {
        self.repository.copies.get_by_id(id).await
    }

    /// Create a new copy
    pub async fn create_copy(&self, copy: CreateCopy) -> AppResult<BookCopy> {
        self.verify_references(copy.book_id, copy.borrower_id).await?;
        self.repository.copies.create(&copy).await
    }

    /// Update a copy, including direct status assignment
    pub async fn update_copy(&self, id: Uuid, copy: UpdateCopy) -> AppResult<BookCopy> {
        self.verify_references(copy.book_id, copy.borrower_id).await?;
        self.repository.copies.update(id, &copy).await
    }

    /// Delete a copy
    pub async fn delete_copy(&self, id: Uuid) -> AppResult<()> {
        self.repository.copies.delete(id).await
    }

    /// Renew a loan: validate the proposed due date against `today`, then
    /// persist it. On a validation failure nothing is written.
    pub async fn renew_copy(
        &self,
        id: Uuid,
        proposed: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<BookCopy> {
        // Surface a 404 before a date complaint for an unknown copy
        self.repository.copies.get_by_id(id).await?;
        validate_renewal_date(proposed, today)?;

        let copy = self.repository.copies.update_due_back(id, proposed).await?;
        tracing::info!("Renewed copy {} until {}", id, proposed);
        Ok(copy)
    }

    /// Copies currently on loan to a borrower, ascending by due date
    pub async fn get_borrower_loans(
        &self,
        borrower_id: i32,
        today: NaiveDate,
    ) -> AppResult<Vec<BorrowedCopy>> {
        // Verify borrower exists
        self.repository.borrowers.get_by_id(borrower_id).await?;
        self.repository.copies.get_borrower_loans(borrower_id, today).await
    }

    async fn verify_references(
        &self,
        book_id: Option<i32>,
        borrower_id: Option<i32>,
    ) -> AppResult<()> {
        if let Some(book_id) = book_id {
            self.repository.books.get_by_id(book_id).await?;
        }
        if let Some(borrower_id) = borrower_id {
            self.repository.borrowers.get_by_id(borrower_id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_renewal_in_past_rejected() {
        let today = date(2026, 8, 27);
        assert!(validate_renewal_date(today - Duration::days(1), today).is_err());
    }

    #[test]
    fn test_renewal_today_accepted() {
        let today = date(2026, 8, 27);
        assert!(validate_renewal_date(today, today).is_ok());
    }

    #[test]
    fn test_renewal_three_weeks_accepted() {
        let today = date(2026, 8, 27);
        assert!(validate_renewal_date(today + Duration::weeks(3), today).is_ok());
    }

    #[test]
    fn test_renewal_exactly_four_weeks_accepted() {
        let today = date(2026, 8, 27);
        assert!(validate_renewal_date(today + Duration::weeks(4), today).is_ok());
    }

    #[test]
    fn test_renewal_five_weeks_rejected() {
        let today = date(2026, 8, 27);
        assert!(validate_renewal_date(today + Duration::weeks(5), today).is_err());
    }

    #[test]
    fn test_proposed_renewal_is_three_weeks_out() {
        let today = date(2026, 8, 27);
        assert_eq!(proposed_renewal_date(today), date(2026, 9, 17));
    }
}
