/// Shared helpers for fixture generation and comparison.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by every randomised test so failures reproduce.
pub const SEED: u64 = 0x5EED_F11E;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

#[allow(unused)]
/// `n` samples drawn uniformly from `[-1, 1)`.
pub fn random_vec(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[allow(unused)]
/// Denominator with `a[0]` bounded away from zero and small feedback taps,
/// so the recurrence stays bounded over test lengths.
pub fn random_denominator(rng: &mut StdRng, len: usize) -> Vec<f64> {
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let a0 = sign * rng.gen_range(0.5..2.0);
    let mut a = vec![a0];
    a.extend((1..len).map(|_| a0 * rng.gen_range(-0.3..0.3) / len as f64));
    a
}

#[allow(unused)]
/// Maximum absolute difference between two sequences of equal length.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch");
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}

#[allow(unused)]
/// Direct expansion of the seed-then-accumulate recurrence, written
/// independently of the library for cross-checking.
pub fn reference_filter(a: &[f64], b: &[f64], x: &[f64], si: &[f64]) -> Vec<f64> {
    let mut y = vec![0.0; x.len()];
    for (i, &s) in si.iter().enumerate().take(x.len()) {
        y[i] = s;
    }
    for n in 0..x.len() {
        let mut ff = 0.0;
        for k in 0..b.len() {
            if n >= k {
                ff += b[k] / a[0] * x[n - k];
            }
        }
        let mut fb = 0.0;
        for k in 1..a.len() {
            if n >= k {
                fb += a[k] / a[0] * y[n - k];
            }
        }
        y[n] += ff - fb;
    }
    y
}
