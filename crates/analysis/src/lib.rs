//! # claimcast-analysis
//!
//! The three analytical transforms applied to a monthly loss series.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["MonthlySeries"] -->|"rolling_mean(window)"| B["RollingSeries"]
//!     A -->|"seasonal_index()"| C["SeasonalIndex"]
//!     B -->|"baseline_forecast(horizon)"| D["Forecast"]
//! ```
//!
//! Every transform is a pure function from an immutable input to a new
//! immutable output.
//!
//! ## Quick Start
//!
//! ```ignore
//! use claimcast_analysis::{baseline_forecast, rolling_mean, seasonal_index};
//!
//! let rolling = rolling_mean(&series, 6)?;
//! let index = seasonal_index(&series)?;
//! let forecast = baseline_forecast(&rolling, 6)?;
//! ```

mod error;
mod forecast;
mod seasonal;
mod smoothing;

pub use error::AnalysisError;
pub use forecast::{Forecast, baseline_forecast};
pub use seasonal::{MonthBuckets, SeasonalIndex, seasonal_index};
pub use smoothing::{RollingSeries, rolling_mean};
