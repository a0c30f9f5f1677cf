//! First-of-month date with year context.

use std::fmt;

use crate::error::CalendarError;

/// Earliest year accepted by [`MonthStart::new`].
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted by [`MonthStart::new`].
pub const MAX_YEAR: i32 = 9999;

/// A calendar month, identified by the date of its first day.
///
/// Ordering is chronological. The `Display` form is the ISO date of the
/// first day, e.g. `2019-01-01`. Construction bounds the year to
/// [`MIN_YEAR`]..=[`MAX_YEAR`], so stepping forward by any `u32` month count
/// stays far inside `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthStart {
    year: i32,
    month: u8,
}

impl MonthStart {
    /// Creates a new `MonthStart` from a year and a 1-based month.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::YearOutOfRange`] if `year` is outside
    ///   [`MIN_YEAR`]..=[`MAX_YEAR`].
    /// - [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self {
            year,
            month: month as u8,
        })
    }

    /// Creates a `MonthStart` from a full year/month/day triple.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotFirstOfMonth`] if `day != 1`, otherwise
    /// any error of [`MonthStart::new`].
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if day != 1 {
            return Err(CalendarError::NotFirstOfMonth { year, month, day });
        }
        Self::new(year, month)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month, which is always 1.
    pub fn day(self) -> u8 {
        1
    }

    /// Returns the first day of the following month.
    ///
    /// December wraps to January of the next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the first day of the month `n` months later.
    pub fn add_months(self, n: u32) -> Self {
        let total = self.ordinal() + i64::from(n);
        Self::from_ordinal(total)
    }

    /// Signed number of months from `self` to `other`.
    ///
    /// Positive when `other` is later, zero for the same month.
    pub fn months_until(self, other: Self) -> i64 {
        other.ordinal() - self.ordinal()
    }

    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u8 + 1,
        }
    }
}

impl fmt::Display for MonthStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-01", self.year, self.month)
    }
}
