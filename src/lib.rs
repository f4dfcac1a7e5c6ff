//! # smoothkit — direct-form linear filtering for signal smoothing
//!
//! `smoothkit` evaluates a linear, time-invariant digital filter given by a
//! rational transfer function `B(z) / A(z)` over a finite sequence, with
//! support for non-zero initial conditions. The smoothers in [`smooth`] are
//! built on that one primitive.
//!
//! ## Overview
//!
//! ```text
//! (a, b, x, si?)
//!   │
//!   ├─ validate        a, b non-empty · a[0] ≠ 0 · len(si) = max(len(a), len(b)) − 1
//!   ├─ normalise       c = a / a[0],  d = b / a[0]
//!   ├─ seed            y[..len(si)] = si
//!   └─ recurrence      y[n] += Σ d[k]·x[n−k] − Σ c[k]·y[n−k]   (n ascending)
//!        │
//!        └─→ Vec<T>   (same length as x)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use smoothkit::evaluate;
//!
//! // 3-point moving average, zero history.
//! let b = [1.0_f64 / 3.0; 3];
//! let y = evaluate(&[1.0], &b, &[1.0, 2.0, 3.0, 4.0, 5.0], None).unwrap();
//! assert_eq!(y.len(), 5);
//! assert!((y[4] - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Reusing a filter
//!
//! ```
//! use smoothkit::TransferFunction;
//!
//! let tf = TransferFunction::try_new(vec![1.0, -0.5], vec![0.5]).unwrap();
//! let y = tf.apply(&[2.0, 2.0], Some(tf.zero_state().as_slice())).unwrap();
//! assert_eq!(y, vec![1.0, 1.5]);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod smooth;

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config
pub use config::FilterConfig;

// error
pub use error::{FilterError, Result};

// filter — evaluator + validated coefficients
pub use filter::{evaluate, evaluate_array, evaluate_promoted, state_len, TransferFunction};

// smooth
pub use smooth::{cumulative_sum, exponential_smoothing, moving_average};
