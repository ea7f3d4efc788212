//! Error taxonomy of the dashboard core.
//!
//! None of these are fatal: every failure degrades to "no filter on that
//! dimension" or "previous valid state retained".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Malformed mutation input. The filter set is left untouched.
    #[error("invalid value for filter `{field}`: {value:?}")]
    InvalidFilterValue { field: &'static str, value: String },

    /// A date parameter could not be parsed; the dimension becomes unfiltered.
    #[error("invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// The requested base layer is not in the registry; the previous one stays active.
    #[error("unknown base layer: {0:?}")]
    UnknownBaseLayer(String),

    /// A response arrived for a request that is no longer the latest one.
    #[error("stale response (request #{issued}, latest is #{latest})")]
    StaleResponse { issued: u64, latest: u64 },
}

impl DashboardError {
    pub fn invalid_value(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidFilterValue { field, value: value.to_string() }
    }
}
