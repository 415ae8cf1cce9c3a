use chrono::NaiveDate;

use crate::error::{DiariumError, Result};

/// An inclusive calendar interval with optional open bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// The unbounded range: every resolvable entry qualifies.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A range with explicit bounds; either side may be open.
    ///
    /// # Errors
    /// Returns an error when both bounds are present and start is after end.
    pub fn between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(DiariumError::InvalidDateRange(format!(
                "start {s} is after end {e}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The full calendar year, January 1st through December 31st.
    ///
    /// # Errors
    /// Returns an error for years outside chrono's representable range.
    pub fn year(year: i32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        match (start, end) {
            (Some(s), Some(e)) => Ok(Self {
                start: Some(s),
                end: Some(e),
            }),
            _ => Err(DiariumError::InvalidDateRange(format!(
                "year {year} is out of range"
            ))),
        }
    }

    /// A full calendar month, first day through last day.
    ///
    /// # Errors
    /// Returns an error when the month is not 1-12.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DiariumError::InvalidDateRange(format!("{year}-{month:02} is not a valid month"))
        })?;
        let end = last_day_of_month(year, month).ok_or_else(|| {
            DiariumError::InvalidDateRange(format!("{year}-{month:02} is not a valid month"))
        })?;
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.start.is_some_and(|s| date < s) {
            return false;
        }
        if self.end.is_some_and(|e| date > e) {
            return false;
        }
        true
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next?.pred_opt()
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
