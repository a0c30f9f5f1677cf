//! Error types for the claimcast-calendar crate.

/// Error type for all fallible operations in the claimcast-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year is outside the supported four-digit range.
    #[error("invalid year: {year} (must be 1..=9999)")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a date is not stamped on the first day of its month.
    #[error("date {year:04}-{month:02}-{day:02} is not the first of the month")]
    NotFirstOfMonth {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u32,
        /// Day of the rejected date.
        day: u32,
    },
}
