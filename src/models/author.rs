//! Author model and biographical validation rules

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Minimum author age accepted at creation/update time
pub const MINIMUM_AUTHOR_AGE: i32 = 20;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Update author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Age in whole years on `today`, using month/day comparison rather than
/// plain year subtraction.
fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Validate author biographical dates.
///
/// The author must be at least [`MINIMUM_AUTHOR_AGE`] years old on `today`,
/// and when both dates are present the birth date must come strictly before
/// the death date.
pub fn validate_author_dates(
    date_of_birth: Option<NaiveDate>,
    date_of_death: Option<NaiveDate>,
    today: NaiveDate,
) -> AppResult<()> {
    if let Some(birth) = date_of_birth {
        if age_on(birth, today) < MINIMUM_AUTHOR_AGE {
            return Err(AppError::Validation(format!(
                "date_of_birth: author must be at least {} years old",
                MINIMUM_AUTHOR_AGE
            )));
        }
    }

    if let (Some(birth), Some(death)) = (date_of_birth, date_of_death) {
        if birth >= death {
            return Err(AppError::Validation(
                "date_of_death: date of death must be later than date of birth".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_author_under_20_rejected() {
        let today = date(2026, 8, 27);
        let birth = date(2010, 1, 1);
        assert!(validate_author_dates(Some(birth), None, today).is_err());
    }

    #[test]
    fn test_author_exactly_20_accepted() {
        let today = date(2026, 8, 27);
        let birth = date(2006, 8, 27);
        assert!(validate_author_dates(Some(birth), None, today).is_ok());
    }

    #[test]
    fn test_age_uses_month_and_day() {
        // 20th birthday is tomorrow: still 19 today
        let today = date(2026, 8, 27);
        let birth = date(2006, 8, 28);
        assert!(validate_author_dates(Some(birth), None, today).is_err());
    }

    #[test]
    fn test_death_before_birth_rejected() {
        let today = date(2026, 8, 27);
        let birth = date(1950, 5, 1);
        let death = date(1940, 5, 1);
        assert!(validate_author_dates(Some(birth), Some(death), today).is_err());
    }

    #[test]
    fn test_death_equal_birth_rejected() {
        let today = date(2026, 8, 27);
        let day = date(1950, 5, 1);
        assert!(validate_author_dates(Some(day), Some(day), today).is_err());
    }

    #[test]
    fn test_death_after_birth_accepted() {
        let today = date(2026, 8, 27);
        let birth = date(1920, 5, 1);
        let death = date(1990, 5, 2);
        assert!(validate_author_dates(Some(birth), Some(death), today).is_ok());
    }

    #[test]
    fn test_no_dates_accepted() {
        let today = date(2026, 8, 27);
        assert!(validate_author_dates(None, None, today).is_ok());
    }
}
