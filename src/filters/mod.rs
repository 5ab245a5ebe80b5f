//! Signal filtering for smoothing landmark-derived scalar signals.
//!
//! Each logical signal (cursor x, cursor y, thumb-to-index distance,
//! thumb-to-middle distance) owns its own filter instance so that state
//! never leaks between signals.

/// Speed-adaptive low-pass filter
pub mod adaptive;

use crate::config::{FilterKind, FilterSpec};
use crate::Result;

pub use adaptive::AdaptiveFilter;

/// Trait for all scalar signal filters
pub trait SignalFilter: Send + Sync {
    /// Feed one sample taken at `timestamp` seconds and return the filtered value
    fn apply(&mut self, value: f64, timestamp: f64) -> f64;

    /// Reset filter state so the next sample is treated as the first
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct PassThrough;

impl SignalFilter for PassThrough {
    fn apply(&mut self, value: f64, _timestamp: f64) -> f64 {
        value
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "PassThrough"
    }
}

/// Create a signal filter from a filter specification
///
/// # Errors
///
/// Returns an error if the specification carries invalid parameters
pub fn create_filter(spec: &FilterSpec) -> Result<Box<dyn SignalFilter>> {
    match spec.kind {
        FilterKind::None => Ok(Box::new(PassThrough)),
        FilterKind::Adaptive => Ok(Box::new(AdaptiveFilter::try_new(
            spec.min_cutoff,
            spec.beta,
            spec.d_cutoff,
        )?)),
    }
}
