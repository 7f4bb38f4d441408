//! Book copy (physical borrowable instance) model and lending status

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Loan status of a copy (stored as smallint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum LoanStatus {
    Maintenance = 0,
    OnLoan = 1,
    Available = 2,
    Reserved = 3,
}

// Stored as INT2; unknown codes decode to the default status rather
// than failing the row.
impl sqlx::Type<sqlx::Postgres> for LoanStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i16 as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for LoanStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <i16 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&i16::from(*self), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for LoanStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let code = <i16 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(LoanStatus::from(code))
    }
}

impl From<i16> for LoanStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => LoanStatus::OnLoan,
            2 => LoanStatus::Available,
            3 => LoanStatus::Reserved,
            _ => LoanStatus::Maintenance,
        }
    }
}

impl From<LoanStatus> for i16 {
    fn from(s: LoanStatus) -> Self {
        s as i16
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Maintenance
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// A single borrowable copy of a book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookCopy {
    pub id: Uuid,
    pub book_id: Option<i32>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub borrower_id: Option<i32>,
    pub status: LoanStatus,
}

impl BookCopy {
    /// A copy is overdue iff it has a due date and `today` is past it.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_back.map(|due| today > due).unwrap_or(false)
    }
}

/// Create copy request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCopy {
    pub book_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub borrower_id: Option<i32>,
    pub status: Option<LoanStatus>,
}

/// Update copy request (full replace, including status)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCopy {
    pub book_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub borrower_id: Option<i32>,
    pub status: LoanStatus,
}

/// Copy on loan to a borrower, with joined book title and overdue flag
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowedCopy {
    pub id: Uuid,
    pub book_id: Option<i32>,
    pub title: Option<String>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub is_overdue: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy(due_back: Option<NaiveDate>) -> BookCopy {
        BookCopy {
            id: Uuid::new_v4(),
            book_id: None,
            imprint: "Test Imprint, 2016".to_string(),
            due_back,
            borrower_id: None,
            status: LoanStatus::OnLoan,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overdue_when_due_date_passed() {
        let c = copy(Some(date(2026, 8, 1)));
        assert!(c.is_overdue(date(2026, 8, 2)));
    }

    #[test]
    fn test_not_overdue_on_due_date() {
        let c = copy(Some(date(2026, 8, 1)));
        assert!(!c.is_overdue(date(2026, 8, 1)));
    }

    #[test]
    fn test_not_overdue_before_due_date() {
        let c = copy(Some(date(2026, 8, 1)));
        assert!(!c.is_overdue(date(2026, 7, 31)));
    }

    #[test]
    fn test_not_overdue_without_due_date() {
        let c = copy(None);
        assert!(!c.is_overdue(date(2026, 8, 27)));
    }

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(LoanStatus::from(1i16), LoanStatus::OnLoan);
        assert_eq!(i16::from(LoanStatus::Reserved), 3);
        // Unknown codes fall back to the default status
        assert_eq!(LoanStatus::from(42i16), LoanStatus::Maintenance);
    }
}
