//! Validated numerator/denominator pair.
//!
//! [`TransferFunction`] checks its coefficients once at construction so the
//! same filter can be applied to many sequences without re-validating `a`
//! and `b` on every call.
use num_traits::Float;

use super::eval::{check_coefficients, evaluate, state_len};
use crate::error::Result;

/// Rational transfer function `B(z) / A(z)` in direct form.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction<T> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T: Float> TransferFunction<T> {
    /// Build from denominator `a` and numerator `b`, in the same order as
    /// [`evaluate`].
    ///
    /// Fails if either vector is empty or `a[0] == 0`.
    pub fn try_new(a: Vec<T>, b: Vec<T>) -> Result<Self> {
        check_coefficients(&a, &b)?;
        Ok(Self { b, a })
    }

    /// Pure feed-forward filter (`a = [1]`).
    pub fn fir(b: Vec<T>) -> Result<Self> {
        Self::try_new(vec![T::one()], b)
    }

    /// Numerator coefficients.
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Denominator coefficients.
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// `max(len(a), len(b)) − 1`.
    pub fn order(&self) -> usize {
        state_len(self.a.len(), self.b.len())
    }

    /// Length the initial state passed to [`apply`](Self::apply) must have.
    pub fn state_len(&self) -> usize {
        self.order()
    }

    /// All-zero initial state of the right length.
    pub fn zero_state(&self) -> Vec<T> {
        vec![T::zero(); self.state_len()]
    }

    /// `true` when there is no feedback path.
    pub fn is_fir(&self) -> bool {
        self.a.iter().skip(1).all(|v| v.is_zero())
    }

    /// Coefficients divided by `a[0]`, so the returned denominator starts with `1`.
    pub fn normalized(&self) -> Self {
        let norm = self.a[0];
        Self {
            b: self.b.iter().map(|&v| v / norm).collect(),
            a: self.a.iter().map(|&v| v / norm).collect(),
        }
    }

    /// Filter `x`, optionally starting from initial state `si`.
    ///
    /// See [`evaluate`] for how the state is seeded.
    pub fn apply(&self, x: &[T], si: Option<&[T]>) -> Result<Vec<T>> {
        evaluate(&self.a, &self.b, x, si)
    }
}
