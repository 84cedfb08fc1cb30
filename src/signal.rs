//! Drift-history post-processing

use crate::error::{SolverError, SolverResult};

/// Indices of strict local maxima (larger than both neighbors)
pub fn local_maxima(values: &[f64]) -> Vec<usize> {
    let mut indices = Vec::new();
    for i in 1..values.len().saturating_sub(1) {
        if values[i] > values[i - 1] && values[i] > values[i + 1] {
            indices.push(i);
        }
    }
    indices
}

/// Indices of strict local minima (smaller than both neighbors)
pub fn local_minima(values: &[f64]) -> Vec<usize> {
    let mut indices = Vec::new();
    for i in 1..values.len().saturating_sub(1) {
        if values[i] < values[i - 1] && values[i] < values[i + 1] {
            indices.push(i);
        }
    }
    indices
}

/// Residual drift from a history that continues past the record
///
/// The analysis must have run free vibration after the record ended:
/// `drifts[record_len..]` is taken as the free-vibration tail, and the
/// residual drift is the mean absolute value of the tail's local maxima
/// and minima, which the oscillation straddles as it decays.
///
/// # Arguments
/// * `drifts` - Drift history including the free-vibration tail
/// * `record_len` - Number of samples driven by the record
pub fn residual_drift(drifts: &[f64], record_len: usize) -> SolverResult<f64> {
    if record_len >= drifts.len() {
        return Err(SolverError::InvalidInput(format!(
            "drift history has {} samples, none past the {}-sample record",
            drifts.len(),
            record_len
        )));
    }

    let tail = &drifts[record_len..];
    let maxima = local_maxima(tail);
    let minima = local_minima(tail);
    let count = maxima.len() + minima.len();
    if count == 0 {
        return Err(SolverError::InvalidInput(
            "no oscillation extrema in the free-vibration tail".to_string(),
        ));
    }

    let sum: f64 = maxima
        .iter()
        .chain(minima.iter())
        .map(|&i| tail[i].abs())
        .sum();
    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decaying_tail(offset: f64, amplitude: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| offset + amplitude * (-0.05 * i as f64).exp() * (0.3 * i as f64).cos())
            .collect()
    }

    #[test]
    fn test_local_extrema_indices() {
        let values = [0.0, 1.0, 0.0, 2.0, -1.0, 0.5];
        assert_eq!(local_maxima(&values), vec![1, 3]);
        assert_eq!(local_minima(&values), vec![2, 4]);
    }

    #[test]
    fn test_extrema_of_short_and_flat_sequences() {
        assert!(local_maxima(&[]).is_empty());
        assert!(local_maxima(&[1.0, 2.0]).is_empty());
        assert!(local_maxima(&[1.0, 1.0, 1.0, 1.0]).is_empty());
        assert!(local_minima(&[1.0, 1.0, 1.0, 1.0]).is_empty());
    }

    #[test]
    fn test_residual_drift_recovers_the_offset() {
        // 100 driven samples, then free vibration decaying about 0.01
        let mut drifts = vec![0.0; 100];
        drifts.extend(decaying_tail(0.01, 0.004, 200));

        let residual = residual_drift(&drifts, 100).unwrap();
        assert!((residual - 0.01).abs() < 2e-3, "residual = {residual}");
    }

    #[test]
    fn test_residual_drift_ignores_the_driven_phase() {
        // Large drifts during the record must not affect the estimate
        let mut drifts: Vec<f64> = (0..100).map(|i| (i as f64 * 0.4).sin() * 0.5).collect();
        drifts.extend(decaying_tail(-0.02, 0.003, 150));

        let residual = residual_drift(&drifts, 100).unwrap();
        assert!((residual - 0.02).abs() < 2e-3, "residual = {residual}");
    }

    #[test]
    fn test_rejects_history_without_tail() {
        let drifts = vec![0.1; 50];
        assert!(matches!(
            residual_drift(&drifts, 50),
            Err(SolverError::InvalidInput(_))
        ));
        assert!(matches!(
            residual_drift(&drifts, 80),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_flat_tail() {
        let mut drifts = vec![0.1; 50];
        drifts.extend(vec![0.03; 20]);
        assert!(matches!(
            residual_drift(&drifts, 50),
            Err(SolverError::InvalidInput(_))
        ));
    }
}
