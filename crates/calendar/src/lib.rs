//! # claimcast-calendar
//!
//! Pure calendar arithmetic over first-of-month timestamps.
//!
//! Monthly loss series carry one observation per calendar month, always
//! stamped on the first day. This crate keeps that arithmetic explicit
//! instead of leaning on a general-purpose date library: stepping forward
//! one month never has to clamp a day-of-month, and the distance between
//! two timestamps is an exact month count.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month)"] -->|"MonthStart::new()"| B["MonthStart"]
//!     B -->|".next()"| B
//!     B -->|".add_months(n)"| B
//!     B -->|"month_sequence()"| C["Vec of MonthStart"]
//!     B -->|".months_until(other)"| D["signed month count"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use claimcast_calendar::{MonthStart, month_sequence};
//!
//! let start = MonthStart::new(2019, 11).unwrap();
//! let dates = month_sequence(start, 3); // 2019-11, 2019-12, 2020-01
//! assert_eq!(dates[2].to_string(), "2020-01-01");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | First-of-month date type and stepping |
//! | `sequence` | Contiguous monthly sequences |
//! | `error` | Error types |

mod error;
mod month;
mod sequence;

pub use error::CalendarError;
pub use month::{MAX_YEAR, MIN_YEAR, MonthStart};
pub use sequence::month_sequence;
