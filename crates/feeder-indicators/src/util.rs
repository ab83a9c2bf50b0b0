//! Shared rolling-window, EMA and z-score helpers.
//!
//! All helpers return a vector of the input length with NaN at every
//! position where the value is undefined. A NaN inside a window makes
//! that window's output NaN (undefined-in, undefined-out).

/// Rolling arithmetic mean over `window` values.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    let divisor = window as f64;
    for (i, w) in values.windows(window).enumerate() {
        out[i + window - 1] = w.iter().sum::<f64>() / divisor;
    }
    out
}

/// Rolling maximum over `window` values.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<f64> {
    rolling_extremum(values, window, f64::max)
}

/// Rolling minimum over `window` values.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    rolling_extremum(values, window, f64::min)
}

fn rolling_extremum(values: &[f64], window: usize, pick: fn(f64, f64) -> f64) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    for (i, w) in values.windows(window).enumerate() {
        // f64::max/min would silently skip NaN operands
        out[i + window - 1] = if w.iter().any(|v| v.is_nan()) {
            f64::NAN
        } else {
            w.iter().copied().reduce(pick).unwrap_or(f64::NAN)
        };
    }
    out
}

/// Lagged difference: `values[t] - values[t - lag]`.
pub fn diff(values: &[f64], lag: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if lag == 0 {
        return out;
    }
    for t in lag..values.len() {
        out[t] = values[t] - values[t - lag];
    }
    out
}

/// SMA-seeded exponential moving average with alpha = 2 / (window + 1).
///
/// Leading NaN entries are skipped so the warm-up counts from the first
/// defined value; this lets the MACD signal line run over the NaN-prefixed
/// MACD line. An interior NaN propagates through the recurrence.
pub fn ema(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 {
        return out;
    }
    let offset = values.iter().take_while(|v| v.is_nan()).count();
    if values.len() < offset + window {
        return out;
    }
    let alpha = 2.0 / (window as f64 + 1.0);
    let seed = values[offset..offset + window].iter().sum::<f64>() / window as f64;
    out[offset + window - 1] = seed;
    let mut prev = seed;
    for t in (offset + window)..values.len() {
        prev = values[t] * alpha + prev * (1.0 - alpha);
        out[t] = prev;
    }
    out
}

/// Mean and sample standard deviation over the defined entries.
///
/// Returns None with fewer than two defined entries.
pub fn mean_std(values: &[f64]) -> Option<(f64, f64)> {
    let defined: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if defined.len() < 2 {
        return None;
    }
    let n = defined.len() as f64;
    let mean = defined.iter().sum::<f64>() / n;
    let var = defined.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some((mean, var.sqrt()))
}

/// Full-series z-score: `(x - mean) / std` over the defined entries.
///
/// NaN positions stay NaN. A constant series (std == 0) or one with fewer
/// than two defined entries normalizes to all-NaN.
pub fn z_score(values: &[f64]) -> Vec<f64> {
    match mean_std(values) {
        Some((mean, std)) if std > 0.0 => values.iter().map(|v| (v - mean) / std).collect(),
        _ => vec![f64::NAN; values.len()],
    }
}

/// Apply the z-score when the normalization flag is set.
pub fn maybe_normalize(values: Vec<f64>, normalize: bool) -> Vec<f64> {
    if normalize {
        z_score(&values)
    } else {
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_rolling_mean() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert!(out[0].is_nan() && out[1].is_nan());
        assert!((out[2] - 2.0).abs() < 1e-10);
        assert!((out[3] - 3.0).abs() < 1e-10);
        assert!((out[4] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_mean_nan_poisons_window() {
        let out = rolling_mean(&[1.0, NAN, 3.0, 4.0, 5.0], 2);
        assert!(out[1].is_nan() && out[2].is_nan());
        assert!((out[3] - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_extrema() {
        let highs = [3.0, 1.0, 4.0, 1.0, 5.0];
        let max = rolling_max(&highs, 3);
        let min = rolling_min(&highs, 3);
        assert!((max[2] - 4.0).abs() < 1e-10);
        assert!((min[2] - 1.0).abs() < 1e-10);
        assert!((max[4] - 5.0).abs() < 1e-10);
        assert!((min[4] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_extrema_nan_window() {
        let out = rolling_max(&[1.0, NAN, 3.0], 2);
        assert!(out[1].is_nan() && out[2].is_nan());
    }

    #[test]
    fn test_diff() {
        let out = diff(&[1.0, 3.0, 6.0, 10.0], 2);
        assert!(out[0].is_nan() && out[1].is_nan());
        assert!((out[2] - 5.0).abs() < 1e-10);
        assert!((out[3] - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_seed_is_sma() {
        // alpha = 0.5 for window 3
        let out = ema(&[1.0, 2.0, 3.0, 4.0], 3);
        assert!(out[0].is_nan() && out[1].is_nan());
        assert!((out[2] - 2.0).abs() < 1e-10);
        assert!((out[3] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_skips_leading_nan() {
        let out = ema(&[NAN, NAN, 1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out.iter().take_while(|v| v.is_nan()).count(), 4);
        assert!((out[4] - 2.0).abs() < 1e-10);
        assert!((out[5] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_short_input() {
        assert!(ema(&[1.0, 2.0], 3).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_z_score_ignores_undefined() {
        let values = [NAN, 1.0, 2.0, 3.0];
        let out = z_score(&values);
        assert!(out[0].is_nan());
        // mean 2, sample std 1
        assert!((out[1] + 1.0).abs() < 1e-10);
        assert!((out[2] - 0.0).abs() < 1e-10);
        assert!((out[3] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_z_score_constant_series() {
        let out = z_score(&[2.0, 2.0, 2.0]);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_z_score_round_trip() {
        let values = [NAN, 10.0, 12.0, 9.0, 14.0];
        let (mean, std) = mean_std(&values).unwrap();
        let normalized = z_score(&values);
        for (orig, z) in values.iter().zip(normalized.iter()) {
            if orig.is_nan() {
                assert!(z.is_nan());
            } else {
                assert!((z * std + mean - orig).abs() < 1e-10);
            }
        }
    }
}
