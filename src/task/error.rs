//! Validation errors for task input.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use super::dates::is_past_date;

/// Input rejected before any mutation happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Due date is strictly before today.
    PastDueDate {
        /// The rejected date.
        due: NaiveDate,
        /// The date it was checked against.
        today: NaiveDate,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::PastDueDate { due, today } => {
                write!(f, "due date {due} cannot be in the past (today is {today})")
            }
        }
    }
}

impl Error for ValidationError {}

/// Trims `raw` and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTitle`] for blank input.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Rejects a due date before `today`. `None` always passes.
///
/// # Errors
///
/// Returns [`ValidationError::PastDueDate`] for a date strictly in the past.
pub fn validate_due_date(
    due: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, ValidationError> {
    match due {
        Some(due) if is_past_date(due, today) => Err(ValidationError::PastDueDate { due, today }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_are_rejected() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("   \t"), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("  ship it  "), Ok("ship it".to_string()));
    }

    #[test]
    fn past_due_dates_are_rejected() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        assert_eq!(
            validate_due_date(Some(yesterday), today),
            Err(ValidationError::PastDueDate { due: yesterday, today })
        );
        assert_eq!(validate_due_date(Some(today), today), Ok(Some(today)));
        assert_eq!(validate_due_date(None, today), Ok(None));
    }

    #[test]
    fn past_due_message_names_both_dates() {
        let err = ValidationError::PastDueDate {
            due: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
            today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2025-05-31"));
        assert!(msg.contains("2025-06-01"));
    }
}
