use super::SignalFilter;
use crate::{Error, Result};
use std::f64::consts::PI;

/// Smoothing coefficient for a one-pole low-pass at `cutoff` Hz over `dt` seconds
///
/// alpha = 1 / (1 + tau/dt), tau = 1/(2*pi*cutoff)
fn smoothing_factor(cutoff: f64, dt: f64) -> f64 {
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / dt)
}

/// Last accepted sample
#[derive(Debug, Clone, Copy)]
struct FilterState {
    value: f64,
    derivative: f64,
    timestamp: f64,
}

/// Speed-adaptive low-pass filter ("one euro" filter).
///
/// At rest the cutoff sits at `min_cutoff`, suppressing jitter; as the
/// estimated speed grows the cutoff rises by `beta * |speed|`, trading
/// smoothing for latency.
#[derive(Debug, Clone)]
pub struct AdaptiveFilter {
    min_cutoff: f64,
    beta: f64,
    d_cutoff: f64,
    state: Option<FilterState>,
}

impl AdaptiveFilter {
    /// Create a new adaptive filter
    ///
    /// # Panics
    ///
    /// Panics if a cutoff is not positive or `beta` is negative
    #[must_use]
    pub fn new(min_cutoff: f64, beta: f64, d_cutoff: f64) -> Self {
        assert!(min_cutoff > 0.0, "Cutoff frequency must be positive");
        assert!(d_cutoff > 0.0, "Derivative cutoff must be positive");
        assert!(beta >= 0.0, "Speed coefficient must be non-negative");
        Self {
            min_cutoff,
            beta,
            d_cutoff,
            state: None,
        }
    }

    /// Create a new adaptive filter, validating parameters
    ///
    /// # Errors
    ///
    /// Returns an error if a cutoff is not positive or `beta` is negative
    pub fn try_new(min_cutoff: f64, beta: f64, d_cutoff: f64) -> Result<Self> {
        if !(min_cutoff.is_finite() && min_cutoff > 0.0) {
            return Err(Error::FilterError(format!(
                "Cutoff frequency must be positive, got {min_cutoff}"
            )));
        }
        if !(d_cutoff.is_finite() && d_cutoff > 0.0) {
            return Err(Error::FilterError(format!(
                "Derivative cutoff must be positive, got {d_cutoff}"
            )));
        }
        if !(beta.is_finite() && beta >= 0.0) {
            return Err(Error::FilterError(format!(
                "Speed coefficient must be non-negative, got {beta}"
            )));
        }
        Ok(Self::new(min_cutoff, beta, d_cutoff))
    }

    /// Last filtered value, if any sample has been accepted
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.state.map(|s| s.value)
    }

    /// Current derivative estimate (0 before the second sample)
    #[must_use]
    pub fn derivative(&self) -> f64 {
        self.state.map_or(0.0, |s| s.derivative)
    }
}

impl SignalFilter for AdaptiveFilter {
    fn apply(&mut self, value: f64, timestamp: f64) -> f64 {
        let Some(prev) = self.state else {
            self.state = Some(FilterState {
                value,
                derivative: 0.0,
                timestamp,
            });
            return value;
        };

        let dt = timestamp - prev.timestamp;
        if dt <= 0.0 {
            return prev.value;
        }

        let raw_derivative = (value - prev.value) / dt;
        let a_d = smoothing_factor(self.d_cutoff, dt);
        let derivative = a_d.mul_add(raw_derivative - prev.derivative, prev.derivative);

        let cutoff = self.beta.mul_add(derivative.abs(), self.min_cutoff);
        let a = smoothing_factor(cutoff, dt);
        let filtered = a.mul_add(value - prev.value, prev.value);

        self.state = Some(FilterState {
            value: filtered,
            derivative,
            timestamp,
        });
        filtered
    }

    fn reset(&mut self) {
        self.state = None;
    }

    fn name(&self) -> &str {
        "AdaptiveFilter"
    }
}
