//! # claimcast-pipeline
//!
//! Sequences generation, smoothing, decomposition and forecasting, then
//! hands every result to a [`Reporter`].
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["GenerationConfig"] -->|"generate()"| B["MonthlySeries"]
//!     B -->|"rolling_mean()"| C["RollingSeries"]
//!     B -->|"seasonal_index()"| D["SeasonalIndex"]
//!     C -->|"baseline_forecast()"| E["Forecast"]
//!     B & C & D & E --> F["PipelineOutput"]
//!     F -->|"emit()"| G["Reporter"]
//! ```
//!
//! The driver does no numeric work of its own. Component errors propagate
//! unchanged, and nothing reaches the reporter until every stage has
//! succeeded, so a failed run emits no artifacts.
//!
//! ## Quick Start
//!
//! ```ignore
//! use claimcast_pipeline::{AnalysisConfig, GenerationConfig, DiscardReporter, run_pipeline};
//!
//! let output = run_pipeline(
//!     &GenerationConfig::default(),
//!     &AnalysisConfig::default(),
//!     &mut DiscardReporter,
//! )?;
//! println!("{}", output.summary().to_json()?);
//! ```

mod config;
mod driver;
mod error;
mod report;
mod summary;

pub use config::{AnalysisConfig, GenerationConfig};
pub use driver::{PipelineOutput, analyze_series, run_pipeline};
pub use error::{ErrorKind, PipelineError};
pub use report::{DiscardReporter, ReportError, Reporter};
pub use summary::Summary;
