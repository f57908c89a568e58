//! Textbook time-value-of-money calculations: discounting, compounding,
//! annuities, bond pricing, and yield-to-maturity solving.
//!
//! For learning purposes; not investment advice.

pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "bonds")]
pub mod fixed_income;

#[cfg(feature = "charts")]
pub mod chart;

pub use error::TvmError;
pub use types::*;

/// Standard result type for all toolkit operations
pub type TvmResult<T> = Result<T, TvmError>;
