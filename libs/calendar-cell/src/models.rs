use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Arguments for `get_user_calendar_data`. Both dates are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarQuery {
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CalendarQuery {
    pub fn new(user_id: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, CalendarError> {
        if user_id.trim().is_empty() {
            return Err(CalendarError::MissingUserId);
        }
        if start_date > end_date {
            return Err(CalendarError::InvalidRange { start_date, end_date });
        }

        Ok(Self {
            user_id: user_id.trim().to_string(),
            start_date,
            end_date,
        })
    }

    /// First to last day of the month containing `date`.
    pub fn month_of(user_id: &str, date: NaiveDate) -> Result<Self, CalendarError> {
        let (start_date, end_date) = month_bounds(date)?;
        Self::new(user_id, start_date, end_date)
    }

    pub fn start_date_param(&self) -> String {
        self.start_date.format(DATE_FORMAT).to_string()
    }

    pub fn end_date_param(&self) -> String {
        self.end_date.format(DATE_FORMAT).to_string()
    }
}

pub fn month_bounds(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    let first = date.with_day(1).ok_or(CalendarError::DateOutOfRange)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::DateOutOfRange)?;
    Ok((first, last))
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum CalendarError {
    #[error("A user ID is required")]
    MissingUserId,

    #[error("Start date {start_date} is after end date {end_date}")]
    InvalidRange { start_date: NaiveDate, end_date: NaiveDate },

    #[error("Date out of supported range")]
    DateOutOfRange,
}
