//! Numeric helpers for the statistics engine.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan compensated summation, so the average of a large
//!   population does not drift with accumulation order.
//! - **Median**: odd/even rule over pre-sorted data; the caller picks how the
//!   even-length midpoint is turned into a whole number.

/// Sums `data` with Kahan-Babuska compensation.
#[must_use]
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Computes the arithmetic mean.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
#[must_use]
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Median of **pre-sorted** data.
///
/// Odd length takes the middle element; even length takes the mean of the
/// two middle elements. The caller must guarantee non-decreasing order.
///
/// # Returns
/// - `None` if `sorted` is empty.
#[must_use]
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Rounds to `decimals` places, halves away from zero.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals.min(15) as i32);
    (value * factor).round() / factor
}
