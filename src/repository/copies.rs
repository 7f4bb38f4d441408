//! Book copies repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::copy::{BookCopy, BorrowedCopy, CreateCopy, LoanStatus, UpdateCopy},
};

#[derive(Clone)]
pub struct CopiesRepository {
    pool: Pool<Postgres>,
}

impl CopiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all copies ordered by due date
    pub async fn list(&self) -> AppResult<Vec<BookCopy>> {
        let copies = sqlx::query_as::<_, BookCopy>("SELECT * FROM book_copies ORDER BY due_back")
            .fetch_all(&self.pool)
            .await?;
        Ok(copies)
    }

    /// Get copy by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookCopy> {
        sqlx::query_as::<_, BookCopy>("SELECT * FROM book_copies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Copy with id {} not found", id)))
    }

    /// Create a new copy with a freshly generated identifier
    pub async fn create(&self, copy: &CreateCopy) -> AppResult<BookCopy> {
        let id = Uuid::new_v4();
        let status = copy.status.unwrap_or_default();

        let created = sqlx::query_as::<_, BookCopy>(
            r#"
            INSERT INTO book_copies (id, book_id, imprint, due_back, borrower_id, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(copy.book_id)
        .bind(&copy.imprint)
        .bind(copy.due_back)
        .bind(copy.borrower_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Update a copy (full replace, including status)
    pub async fn update(&self, id: Uuid, copy: &UpdateCopy) -> AppResult<BookCopy> {
        sqlx::query_as::<_, BookCopy>(
            r#"
            UPDATE book_copies
            SET book_id = $1, imprint = $2, due_back = $3, borrower_id = $4, status = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(copy.book_id)
        .bind(&copy.imprint)
        .bind(copy.due_back)
        .bind(copy.borrower_id)
        .bind(copy.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Copy with id {} not found", id)))
    }

    /// Set a new due date on a copy (renewal)
    pub async fn update_due_back(&self, id: Uuid, due_back: NaiveDate) -> AppResult<BookCopy> {
        sqlx::query_as::<_, BookCopy>(
            "UPDATE book_copies SET due_back = $1 WHERE id = $2 RETURNING *",
        )
        .bind(due_back)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Copy with id {} not found", id)))
    }

    /// Delete a copy
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_copies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Copy with id {} not found", id)));
        }
        Ok(())
    }

    /// Copies on loan to a borrower, ascending by due date, with the joined
    /// book title and overdue flag derived from `today`.
    pub async fn get_borrower_loans(
        &self,
        borrower_id: i32,
        today: NaiveDate,
    ) -> AppResult<Vec<BorrowedCopy>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.book_id, b.title, c.imprint, c.due_back
            FROM book_copies c
            LEFT JOIN books b ON b.id = c.book_id
            WHERE c.borrower_id = $1 AND c.status = $2
            ORDER BY c.due_back
            "#,
        )
        .bind(borrower_id)
        .bind(LoanStatus::OnLoan)
        .fetch_all(&self.pool)
        .await?;

        let mut loans = Vec::with_capacity(rows.len());
        for row in rows {
            let due_back: Option<NaiveDate> = row.get("due_back");
            loans.push(BorrowedCopy {
                id: row.get("id"),
                book_id: row.get("book_id"),
                title: row.get("title"),
                imprint: row.get("imprint"),
                due_back,
                is_overdue: due_back.map(|due| today > due).unwrap_or(false),
            });
        }
        Ok(loans)
    }

    /// Count all copies
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_copies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count copies with a given status
    pub async fn count_by_status(&self, status: LoanStatus) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_copies WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Count copies on loan whose due date has passed
    pub async fn count_overdue(&self, today: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM book_copies WHERE status = $1 AND due_back < $2",
        )
        .bind(LoanStatus::OnLoan)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
