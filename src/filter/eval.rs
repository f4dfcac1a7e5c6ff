//! Direct-form evaluation of a rational transfer function `B(z) / A(z)`.
//!
//! ```text
//! a[0]·y[n] = b[0]·x[n] + … + b[M]·x[n−M] − a[1]·y[n−1] − … − a[N]·y[n−N]
//! ```
//!
//! Samples before the start of `x` (and outputs before the start of `y`) are
//! exactly zero: no wraparound, no reflection.
//!
//! The initial state `si` is written into the first `max(len(a), len(b)) − 1`
//! slots of the output buffer and the recurrence then accumulates into those
//! same slots. Seeded values therefore act as history that later samples read
//! back through the feedback taps.
use std::borrow::Cow;

use log::{debug, trace};
use ndarray::{Array1, ArrayView1};
use num_traits::Float;

use crate::error::{FilterError, Result};

/// Filter `x` through `B(z) / A(z)`.
///
/// * `a`  – denominator (feedback) coefficients, non-empty with `a[0] != 0`.
/// * `b`  – numerator (feed-forward) coefficients, non-empty.
/// * `x`  – input sequence, any length.
/// * `si` – initial state of length `max(len(a), len(b)) − 1`; `None` is the
///   same as passing zeros of that length.
///
/// Returns a freshly allocated sequence with `x.len()` samples.
///
/// # Errors
///
/// [`FilterError::InvalidArgument`] if `a` or `b` is empty, if `a[0] == 0`, or
/// if `si` has the wrong length. Nothing is computed when validation fails.
///
/// # Examples
///
/// ```
/// use smoothkit::filter::evaluate;
///
/// // Pure integrator: y[n] = x[n] + y[n-1]
/// let y = evaluate(&[1.0, -1.0], &[1.0], &[1.0, 1.0, 1.0, 1.0], None).unwrap();
/// assert_eq!(y, vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn evaluate<T: Float>(a: &[T], b: &[T], x: &[T], si: Option<&[T]>) -> Result<Vec<T>> {
    check_coefficients(a, b)?;
    let n_si = state_len(a.len(), b.len());
    if let Some(si) = si {
        check_state(si, n_si)?;
    }

    debug!(
        "evaluate: len(a)={} len(b)={} len(x)={} seeded={}",
        a.len(),
        b.len(),
        x.len(),
        si.is_some()
    );

    // Normalise by the leading denominator term; c[0] == 1 and is never read.
    let norm = a[0];
    let c: Vec<T> = a.iter().map(|&v| v / norm).collect();
    let d: Vec<T> = b.iter().map(|&v| v / norm).collect();

    let mut y = vec![T::zero(); x.len()];

    if let Some(si) = si {
        let n_seed = n_si.min(y.len());
        trace!("seeding {n_seed} of {n_si} state values into output");
        y[..n_seed].copy_from_slice(&si[..n_seed]);
    }

    run_recurrence(&c, &d, x, &mut y);
    Ok(y)
}

/// [`evaluate`] for inputs of mixed element types.
///
/// Every sequence is promoted to the common real type `T` before any
/// arithmetic runs, so the recurrence never mixes precisions. Combinations
/// with no lossless conversion into `T` (e.g. `f64` data into `f32`) do not
/// type-check.
///
/// ```
/// use smoothkit::filter::evaluate_promoted;
///
/// let x: [i32; 3] = [2, 4, 6];
/// let y = evaluate_promoted::<f64, _, _, _, f32>(&[2_i32], &[1.0_f32], &x, None).unwrap();
/// assert_eq!(y, vec![1.0, 2.0, 3.0]);
/// ```
pub fn evaluate_promoted<T, A, B, X, S>(
    a: &[A],
    b: &[B],
    x: &[X],
    si: Option<&[S]>,
) -> Result<Vec<T>>
where
    T: Float,
    A: Copy + Into<T>,
    B: Copy + Into<T>,
    X: Copy + Into<T>,
    S: Copy + Into<T>,
{
    let a = promote(a);
    let b = promote(b);
    let x = promote(x);
    let si = si.map(promote);
    evaluate(&a, &b, &x, si.as_deref())
}

/// [`evaluate`] over `ndarray` vectors.
///
/// Non-contiguous views are copied into a contiguous buffer first.
pub fn evaluate_array<T: Float>(
    a: &[T],
    b: &[T],
    x: ArrayView1<'_, T>,
    si: Option<ArrayView1<'_, T>>,
) -> Result<Array1<T>> {
    let x = contiguous(&x);
    let si = si.as_ref().map(contiguous);
    let y = evaluate(a, b, &x, si.as_deref())?;
    Ok(Array1::from_vec(y))
}

/// Required initial-state length for coefficient vectors of the given sizes.
///
/// `max(len_a, len_b) − 1`, saturating at zero.
pub fn state_len(len_a: usize, len_b: usize) -> usize {
    len_a.max(len_b).saturating_sub(1)
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Seed-then-accumulate recurrence over normalised coefficients.
///
/// `y` must be `x.len()` long and already hold the seeded prefix. Each slot
/// only reads earlier slots, so the pass is strictly left to right.
fn run_recurrence<T: Float>(c: &[T], d: &[T], x: &[T], y: &mut [T]) {
    for n in 0..x.len() {
        let mut acc = y[n];
        // Feed-forward: k ≤ n keeps x[n-k] in range.
        for (k, &dk) in d.iter().enumerate().take(n + 1) {
            acc = acc + dk * x[n - k];
        }
        // Feedback: y[n-k] for k ≥ 1 is already final.
        for (k, &ck) in c.iter().enumerate().take(n + 1).skip(1) {
            acc = acc - ck * y[n - k];
        }
        y[n] = acc;
    }
}

pub(crate) fn check_coefficients<T: Float>(a: &[T], b: &[T]) -> Result<()> {
    if a.is_empty() {
        return Err(FilterError::invalid("a", "denominator must have at least one coefficient"));
    }
    if b.is_empty() {
        return Err(FilterError::invalid("b", "numerator must have at least one coefficient"));
    }
    if a[0].is_zero() {
        return Err(FilterError::invalid("a", "a[0] must be non-zero"));
    }
    Ok(())
}

pub(crate) fn check_state<T>(si: &[T], expected: usize) -> Result<()> {
    if si.len() != expected {
        return Err(FilterError::invalid(
            "si",
            format!(
                "initial state must have length max(len(a), len(b)) - 1 = {expected}, got {}",
                si.len()
            ),
        ));
    }
    Ok(())
}

fn promote<T, U>(v: &[U]) -> Vec<T>
where
    U: Copy + Into<T>,
{
    v.iter().map(|&e| e.into()).collect()
}

fn contiguous<'a, T: Float>(v: &'a ArrayView1<'_, T>) -> Cow<'a, [T]> {
    match v.as_slice() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(v.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{s, Array1};

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert_abs_diff_eq!(*g, *w, epsilon = 1e-12);
        }
    }

    #[test]
    fn three_point_moving_average() {
        let b = [1.0 / 3.0; 3];
        let y = evaluate(&[1.0], &b, &[1.0, 2.0, 3.0, 4.0, 5.0], None).unwrap();
        assert_close(&y, &[1.0 / 3.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn integrator_is_cumulative_sum() {
        let y = evaluate(&[1.0, -1.0], &[1.0], &[1.0; 4], Some(&[0.0])).unwrap();
        assert_close(&y, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn seeded_state_is_accumulated_into() {
        // y[0] = si[0] + x[0]/3
        // y[1] = si[1] + (x[1] + x[0])/3
        let b = [1.0 / 3.0; 3];
        let y = evaluate(&[1.0], &b, &[3.0, 6.0, 9.0, 12.0], Some(&[10.0, 20.0])).unwrap();
        assert_close(&y, &[11.0, 23.0, 6.0, 9.0]);
    }

    #[test]
    fn seeded_state_feeds_back() {
        // a = [1, -1]: y[0] = 5 + 1, then each step adds x[n] to y[n-1].
        let y = evaluate(&[1.0, -1.0], &[1.0], &[1.0, 1.0, 1.0], Some(&[5.0])).unwrap();
        assert_close(&y, &[6.0, 7.0, 8.0]);
    }

    #[test]
    fn leading_denominator_normalises() {
        let y = evaluate(&[2.0], &[4.0], &[1.0, 2.0], None).unwrap();
        assert_close(&y, &[2.0, 4.0]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let y = evaluate(&[1.0, 0.5], &[1.0, 1.0, 1.0], &[], Some(&[1.0, 2.0])).unwrap();
        assert!(y.is_empty());
    }

    #[test]
    fn short_input_truncates_seed() {
        let y = evaluate(&[1.0], &[1.0, 0.0, 0.0, 0.0], &[1.0, 1.0], Some(&[5.0, 6.0, 7.0]))
            .unwrap();
        assert_close(&y, &[6.0, 7.0]);
    }

    #[test]
    fn empty_input_still_validates_state() {
        let err = evaluate(&[1.0], &[1.0, 1.0], &[], Some(&[])).unwrap_err();
        assert_eq!(err.arg(), "si");
    }

    #[test]
    fn rejects_zero_leading_denominator() {
        let err = evaluate(&[0.0, 1.0], &[1.0], &[1.0, 2.0], None).unwrap_err();
        assert_eq!(err.arg(), "a");
    }

    #[test]
    fn rejects_empty_coefficients() {
        assert_eq!(evaluate::<f64>(&[], &[1.0], &[1.0], None).unwrap_err().arg(), "a");
        assert_eq!(evaluate::<f64>(&[1.0], &[], &[1.0], None).unwrap_err().arg(), "b");
    }

    #[test]
    fn state_len_uses_longer_vector() {
        assert_eq!(state_len(1, 1), 0);
        assert_eq!(state_len(3, 1), 2);
        assert_eq!(state_len(2, 5), 4);
        assert_eq!(state_len(0, 0), 0);
    }

    #[test]
    fn promoted_matches_native() {
        let x_i: Vec<i32> = vec![1, -2, 3, -4, 5];
        let x_f: Vec<f64> = x_i.iter().map(|&v| v as f64).collect();
        let a = [1.0_f32, -0.5];
        let b = [1_i32, 1];

        let got = evaluate_promoted::<f64, _, _, _, f32>(&a, &b, &x_i, Some(&[0.25])).unwrap();
        let want = evaluate(&[1.0, -0.5], &[1.0, 1.0], &x_f, Some(&[0.25])).unwrap();
        assert_close(&got, &want);
    }

    #[test]
    fn array_view_handles_strided_input() {
        let backing = Array1::from(vec![1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
        let x = backing.slice(s![..;2]);
        let y = evaluate_array(&[1.0, -1.0], &[1.0], x, None).unwrap();
        assert_close(y.as_slice().unwrap(), &[1.0, 3.0, 6.0]);
    }

    #[test]
    fn works_in_single_precision() {
        let y = evaluate(&[1.0_f32, -1.0], &[0.5_f32], &[2.0_f32; 3], None).unwrap();
        assert_eq!(y, vec![1.0_f32, 2.0, 3.0]);
    }
}
