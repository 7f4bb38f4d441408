//! Borrowers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, CreateBorrower},
};

#[derive(Clone)]
pub struct BorrowersRepository {
    pool: Pool<Postgres>,
}

impl BorrowersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all borrowers ordered by username
    pub async fn list(&self) -> AppResult<Vec<Borrower>> {
        let borrowers = sqlx::query_as::<_, Borrower>("SELECT * FROM borrowers ORDER BY username")
            .fetch_all(&self.pool)
            .await?;
        Ok(borrowers)
    }

    /// Get borrower by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Borrower> {
        sqlx::query_as::<_, Borrower>("SELECT * FROM borrowers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrower with id {} not found", id)))
    }

    /// Create a new borrower
    pub async fn create(&self, borrower: &CreateBorrower) -> AppResult<Borrower> {
        let created = sqlx::query_as::<_, Borrower>(
            r#"
            INSERT INTO borrowers (username, first_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&borrower.username)
        .bind(&borrower.first_name)
        .bind(&borrower.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("A borrower with this username already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;
        Ok(created)
    }

    /// Delete a borrower. Copies lent to the borrower keep existing with a
    /// NULL borrower reference (ON DELETE SET NULL).
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM borrowers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Borrower with id {} not found", id)));
        }
        Ok(())
    }
}
