//! Linear filter evaluation.
//!
//! - [`eval`]: the direct-form recurrence with initial state, plus promoting
//!   and `ndarray` entry points.
//! - [`transfer`]: [`TransferFunction`], a validated `(b, a)` pair for
//!   applying the same filter repeatedly.

pub mod eval;
pub mod transfer;

pub use eval::{evaluate, evaluate_array, evaluate_promoted, state_len};
pub use transfer::TransferFunction;
