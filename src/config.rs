//! Filter configuration.
//!
//! [`FilterConfig`] describes one filter as plain data so it can be kept in a
//! JSON file next to the signal it is applied to:
//!
//! ```json
//! { "b": [0.3333, 0.3333, 0.3333], "a": [1.0], "si": [0.0, 0.0] }
//! ```
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::filter::TransferFunction;

/// Coefficients and optional initial state of one filter.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use smoothkit::FilterConfig;
///
/// let cfg = FilterConfig {
///     b: vec![0.5, 0.5],
///     ..FilterConfig::default()
/// };
/// assert_eq!(cfg.state_len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Numerator (feed-forward) coefficients.
    ///
    /// Default: `[1.0]`.
    #[serde(default = "unit")]
    pub b: Vec<f64>,

    /// Denominator (feedback) coefficients; `a[0]` must be non-zero.
    ///
    /// Default: `[1.0]`.
    #[serde(default = "unit")]
    pub a: Vec<f64>,

    /// Initial state, `max(len(a), len(b)) − 1` values.
    ///
    /// Default: `None` (zero state).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub si: Option<Vec<f64>>,
}

fn unit() -> Vec<f64> {
    vec![1.0]
}

impl Default for FilterConfig {
    /// The identity filter: `b = [1]`, `a = [1]`, zero state.
    fn default() -> Self {
        Self { b: unit(), a: unit(), si: None }
    }
}

impl FilterConfig {
    /// Parse a config from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing filter config")
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Required initial-state length for these coefficients.
    pub fn state_len(&self) -> usize {
        crate::filter::state_len(self.a.len(), self.b.len())
    }

    /// Validate the coefficients into a [`TransferFunction`].
    pub fn transfer_function(&self) -> Result<TransferFunction<f64>> {
        Ok(TransferFunction::try_new(self.a.clone(), self.b.clone())?)
    }

    /// Filter `x` with these coefficients and initial state.
    pub fn apply(&self, x: &[f64]) -> Result<Vec<f64>> {
        let tf = self.transfer_function()?;
        Ok(tf.apply(x, self.si.as_deref())?)
    }
}
