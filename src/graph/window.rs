//! Request parameters and the aggregation window

use thiserror::Error;

use super::time_bucket::DAY_MS;

/// Trailing window length used when a request omits `days`.
pub const DEFAULT_DAYS: u32 = 90;

/// Request-parameter validation errors
#[derive(Debug, Error)]
pub enum ParamError {
    /// `days` was present but not a non-negative integer
    #[error("invalid days parameter '{0}': expected a non-negative integer")]
    InvalidDays(String),
}

/// Validated graph request parameters
///
/// Replaces the untyped request-argument map of the hosting layer: the
/// boundary parses and validates once, the core only sees this struct.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Trailing window length in days
    pub days: u32,
    /// Component filter; empty means "all components"
    pub component: String,
}

impl Default for GraphRequest {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            component: String::new(),
        }
    }
}

impl GraphRequest {
    /// Build a request from raw string parameters.
    ///
    /// A missing `days` falls back to [`DEFAULT_DAYS`]; a non-numeric one
    /// is an error surfaced to the caller. The component is taken as-is
    /// here and validated against the component registry later.
    pub fn from_params(days: Option<&str>, component: Option<&str>) -> Result<Self, ParamError> {
        let days = match days {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ParamError::InvalidDays(raw.to_string()))?,
            None => DEFAULT_DAYS,
        };

        Ok(Self {
            days,
            component: component.unwrap_or("").trim().to_string(),
        })
    }
}

/// Aggregation window in milliseconds since epoch
///
/// `start_ms` is inclusive (UTC midnight `days` days before the anchor),
/// `end_ms` is exclusive ("tomorrow" midnight relative to the anchor day).
/// Both bounds are day-aligned, so they double as bucket keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl GraphWindow {
    /// Window anchored at a UTC day start (`today`, milliseconds).
    pub fn anchored(today_start_ms: i64, days: u32) -> Self {
        Self {
            start_ms: today_start_ms - i64::from(days) * DAY_MS,
            end_ms: today_start_ms + DAY_MS,
        }
    }

    /// Window start in event-store microseconds.
    pub fn start_us(&self) -> i64 {
        self.start_ms * 1000
    }

    /// Window end in event-store microseconds.
    pub fn end_us(&self) -> i64 {
        self.end_ms * 1000
    }
}
