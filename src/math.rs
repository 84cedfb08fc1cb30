//! Mathematical utilities for response and record calculations

use nalgebra::DVector;

pub type Vector = DVector<f64>;

/// Generate `n` linearly spaced values over `[start, end]` (inclusive)
///
/// # Arguments
/// * `start` - First value
/// * `end` - Last value
/// * `n` - Number of points (1 yields just `start`)
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }

    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Linear interpolation of `fp` at `x` over ascending abscissae `xp`
///
/// Values outside the abscissa range are clamped to the boundary
/// ordinates. `xp` must be sorted ascending and have the same length
/// as `fp`.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());

    if x <= xp[0] {
        return fp[0];
    }
    let last = xp.len() - 1;
    if x >= xp[last] {
        return fp[last];
    }

    // partition_point gives the first abscissa strictly above x
    let hi = xp.partition_point(|&v| v <= x);
    let lo = hi - 1;

    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}

/// Maximum absolute value of a sequence (0.0 for an empty sequence)
pub fn peak_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// Geometric mean of a sequence of non-negative values
///
/// A zero sample drives the result to zero; negative samples yield NaN.
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    (log_sum / values.len() as f64).exp()
}

/// Arithmetic mean of a sequence
pub fn mean(values: &[f64]) -> f64 {
    Vector::from_column_slice(values).mean()
}

/// Population standard deviation (divides by n, not n-1)
pub fn std_pop(values: &[f64]) -> f64 {
    Vector::from_column_slice(values).variance().sqrt()
}

/// Pearson correlation coefficient between two equal-length sequences
///
/// Returns NaN when either sequence has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    let n = x.len() as f64;
    let mx = mean(x);
    let my = mean(y);

    let cov: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - mx) * (b - my))
        .sum::<f64>()
        / n;

    cov / (std_pop(x) * std_pop(y))
}
