//! Smoothers expressed as transfer functions.
//!
//! Each smoother builds a [`TransferFunction`] and runs it through the
//! direct-form evaluator, so edge behaviour is the evaluator's: history before
//! the first sample is zero.
//!
//! | smoother                  | `b`            | `a`             |
//! |---------------------------|----------------|-----------------|
//! | `moving_average(w)`       | `[1/w; w]`     | `[1]`           |
//! | `exponential_smoothing(α)`| `[α]`          | `[1, α − 1]`    |
//! | `cumulative_sum`          | `[1]`          | `[1, −1]`       |
use log::debug;
use num_traits::Float;

use crate::error::{FilterError, Result};
use crate::filter::TransferFunction;

/// Trailing simple moving average over `window` samples.
///
/// The first `window − 1` outputs average against zero history, so they ramp
/// up rather than being renormalised.
pub fn moving_average<T: Float>(x: &[T], window: usize) -> Result<Vec<T>> {
    moving_average_filter(window)?.apply(x, None)
}

/// Transfer function of a `window`-point trailing moving average.
pub fn moving_average_filter<T: Float>(window: usize) -> Result<TransferFunction<T>> {
    if window == 0 {
        return Err(FilterError::invalid("window", "window must be at least 1"));
    }
    let w = T::from(window)
        .ok_or_else(|| FilterError::invalid("window", "window not representable in sample type"))?;
    debug!("moving_average_filter: window={window}");
    TransferFunction::fir(vec![T::one() / w; window])
}

/// Single exponential smoothing: `y[n] = α·x[n] + (1 − α)·y[n−1]`.
///
/// `level` is the smoothed value assumed before `x[0]`, so
/// `y[0] = α·x[0] + (1 − α)·level`; pass `None` to start from zero. The
/// evaluator accumulates into its seeded output slot, so the state carries the
/// decayed level `(1 − α)·level` rather than `level` itself.
pub fn exponential_smoothing<T: Float>(x: &[T], alpha: T, level: Option<T>) -> Result<Vec<T>> {
    let tf = exponential_smoothing_filter(alpha)?;
    match level {
        Some(l) => {
            let si = [(T::one() - alpha) * l];
            tf.apply(x, Some(&si[..]))
        }
        None => tf.apply(x, None),
    }
}

/// Transfer function of single exponential smoothing with factor `alpha`.
pub fn exponential_smoothing_filter<T: Float>(alpha: T) -> Result<TransferFunction<T>> {
    if !alpha.is_finite() || alpha <= T::zero() || alpha > T::one() {
        return Err(FilterError::invalid("alpha", "smoothing factor must lie in (0, 1]"));
    }
    TransferFunction::try_new(vec![T::one(), alpha - T::one()], vec![alpha])
}

/// Running sum of `x` (pure integrator).
pub fn cumulative_sum<T: Float>(x: &[T]) -> Result<Vec<T>> {
    TransferFunction::try_new(vec![T::one(), -T::one()], vec![T::one()])?.apply(x, None)
}
