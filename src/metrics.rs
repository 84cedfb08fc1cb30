//! Goodness-of-fit metrics between simulated and observed series

use crate::error::{SolverError, SolverResult};
use crate::math::{mean, pearson, std_pop};

fn validate_pair(prediction: &[f64], observation: &[f64]) -> SolverResult<()> {
    if prediction.len() != observation.len() {
        return Err(SolverError::InvalidInput(format!(
            "length mismatch: prediction has {} samples, observation has {}",
            prediction.len(),
            observation.len()
        )));
    }
    if observation.len() < 2 {
        return Err(SolverError::InvalidInput(
            "series must hold at least two samples".to_string(),
        ));
    }
    Ok(())
}

/// Normalized Nash-Sutcliffe efficiency
///
/// The classic efficiency ns1 = 1 - Σ(obs-pred)²/Σ(obs-mean(obs))² is
/// mapped through 1/(2-ns1), giving 1.0 for a perfect match and values
/// falling toward 0 as the fit degrades. Predicting the observed mean
/// everywhere scores exactly 0.5.
pub fn nse(prediction: &[f64], observation: &[f64]) -> SolverResult<f64> {
    validate_pair(prediction, observation)?;

    let obs_mean = mean(observation);
    let denom: f64 = observation.iter().map(|o| (o - obs_mean).powi(2)).sum();
    if denom == 0.0 {
        return Err(SolverError::InvalidInput(
            "observation series is constant".to_string(),
        ));
    }

    let num: f64 = observation
        .iter()
        .zip(prediction.iter())
        .map(|(o, p)| (o - p).powi(2))
        .sum();

    let ns1 = 1.0 - num / denom;
    Ok(1.0 / (2.0 - ns1))
}

/// Kling-Gupta efficiency
///
/// kge = 1 - sqrt((r-1)² + (σp/σo-1)² + (μp/μo-1)²) with Pearson r and
/// population standard deviations. 1.0 is a perfect match; any
/// correlation, dispersion or bias error pulls the score down.
pub fn kge(prediction: &[f64], observation: &[f64]) -> SolverResult<f64> {
    validate_pair(prediction, observation)?;

    let obs_std = std_pop(observation);
    if obs_std == 0.0 {
        return Err(SolverError::InvalidInput(
            "observation series is constant".to_string(),
        ));
    }
    let pred_std = std_pop(prediction);
    if pred_std == 0.0 {
        return Err(SolverError::InvalidInput(
            "prediction series is constant".to_string(),
        ));
    }
    let obs_mean = mean(observation);
    if obs_mean == 0.0 {
        return Err(SolverError::InvalidInput(
            "observation series has zero mean".to_string(),
        ));
    }

    let cr = pearson(prediction, observation) - 1.0;
    let cs = pred_std / obs_std - 1.0;
    let cm = mean(prediction) / obs_mean - 1.0;

    Ok(1.0 - (cr * cr + cs * cs + cm * cm).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn observation() -> Vec<f64> {
        (0..50).map(|i| 1.0 + (i as f64 * 0.3).sin() * 0.4).collect()
    }

    #[test]
    fn test_perfect_prediction_scores_one() {
        let obs = observation();
        assert_eq!(nse(&obs, &obs).unwrap(), 1.0);
        assert_relative_eq!(kge(&obs, &obs).unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mean_prediction_scores_half_nse() {
        let obs = observation();
        let obs_mean = mean(&obs);
        let pred = vec![obs_mean; obs.len()];
        assert_eq!(nse(&pred, &obs).unwrap(), 0.5);
    }

    #[test]
    fn test_nse_degrades_with_noise() {
        let obs = observation();
        let slightly_off: Vec<f64> = obs.iter().map(|o| o + 0.05).collect();
        let badly_off: Vec<f64> = obs.iter().map(|o| o + 2.0).collect();

        let good = nse(&slightly_off, &obs).unwrap();
        let bad = nse(&badly_off, &obs).unwrap();
        assert!(good > bad);
        assert!(good < 1.0);
        assert!(bad > 0.0);
    }

    #[test]
    fn test_kge_of_scaled_prediction() {
        let obs = observation();
        let doubled: Vec<f64> = obs.iter().map(|o| o * 2.0).collect();

        // r = 1, dispersion and bias terms are both 1
        let score = kge(&doubled, &obs).unwrap();
        assert_relative_eq!(score, 1.0 - 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_any_mismatch_scores_below_one() {
        let obs = observation();
        let shifted: Vec<f64> = obs.iter().map(|o| o + 0.01).collect();
        assert!(kge(&shifted, &obs).unwrap() < 1.0);
        assert!(nse(&shifted, &obs).unwrap() < 1.0);
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let obs = observation();
        assert!(matches!(
            nse(&obs[..10], &obs),
            Err(SolverError::InvalidInput(_))
        ));
        assert!(matches!(
            kge(&obs[..10], &obs),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_degenerate_series() {
        let constant = vec![3.0; 20];
        let obs = observation();
        assert!(matches!(
            nse(&obs[..20], &constant),
            Err(SolverError::InvalidInput(_))
        ));
        assert!(matches!(
            kge(&constant, &obs[..20]),
            Err(SolverError::InvalidInput(_))
        ));

        // Zero-mean observation breaks the KGE bias ratio
        let zero_mean = vec![-1.0, 1.0, -1.0, 1.0];
        assert!(matches!(
            kge(&[0.5, 1.0, 0.5, 1.0], &zero_mean),
            Err(SolverError::InvalidInput(_))
        ));
    }
}
