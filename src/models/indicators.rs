//! Derived series and performance metrics for the fetched table.
//!
//! Everything here is a function of the held records and is recomputed on
//! every render; nothing is cached between fetches.

use crate::constants::TRADING_DAYS_PER_YEAR;

/// Day-over-day percentage change of closing prices.
///
/// Absent at index 0 (no previous close) and wherever the previous close is
/// zero.
///
/// # Returns
/// * One entry per input value: `Some(close[i] / close[i-1] - 1)` or `None`
pub fn daily_returns(closes: &[f64]) -> Vec<Option<f64>> {
    let mut returns = Vec::with_capacity(closes.len());

    for (i, &close) in closes.iter().enumerate() {
        if i == 0 {
            returns.push(None);
            continue;
        }
        let prev = closes[i - 1];
        if prev == 0.0 {
            returns.push(None);
        } else {
            returns.push(Some(close / prev - 1.0));
        }
    }

    returns
}

/// Trailing mean over a fixed window.
///
/// # Arguments
/// * `values` - Input series in date order
/// * `window` - Window length (e.g. 30)
///
/// # Returns
/// * One entry per input value; absent until a full window exists
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut averages = vec![None; values.len()];

    if window == 0 || values.len() < window {
        return averages;
    }

    for i in (window - 1)..values.len() {
        let start = i + 1 - window;
        let sum: f64 = values[start..=i].iter().sum();
        averages[i] = Some(sum / window as f64);
    }

    averages
}

/// Return on investment over the held period, as a fraction:
/// `close[last] / close[first] - 1`
pub fn roi(closes: &[f64]) -> Option<f64> {
    let first = *closes.first()?;
    let last = *closes.last()?;
    if first == 0.0 {
        return None;
    }
    Some(last / first - 1.0)
}

/// Annualized volatility: sample standard deviation of the observed daily
/// returns scaled by the square root of the trading days per year.
///
/// Zero exactly when every observed return is identical (a constant-price
/// series); absent with fewer than two observed returns.
pub fn annualized_volatility(returns: &[Option<f64>]) -> Option<f64> {
    let observed: Vec<f64> = returns.iter().flatten().copied().collect();
    sample_std(&observed).map(|std| std * TRADING_DAYS_PER_YEAR.sqrt())
}

/// Arithmetic mean. Absent for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (ddof = 1). Absent with fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_daily_returns() {
        let closes = vec![100.0, 110.0, 99.0];
        let returns = daily_returns(&closes);

        assert_eq!(returns[0], None); // No previous close
        assert!((returns[1].unwrap() - 0.10).abs() < EPS); // 110/100 - 1
        assert!((returns[2].unwrap() - (-0.10)).abs() < EPS); // 99/110 - 1
    }

    #[test]
    fn test_daily_returns_zero_previous_close() {
        let returns = daily_returns(&[0.0, 10.0]);
        assert_eq!(returns, vec![None, None]);
    }

    #[test]
    fn test_moving_average_window_boundary() {
        let values = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        let ma3 = moving_average(&values, 3);

        assert_eq!(ma3[0], None); // Not enough data
        assert_eq!(ma3[1], None); // Not enough data
        assert_eq!(ma3[2], Some(11.0)); // (10+11+12)/3
        assert_eq!(ma3[3], Some(12.0)); // (11+12+13)/3
        assert_eq!(ma3[5], Some(14.0)); // (13+14+15)/3
    }

    #[test]
    fn test_moving_average_short_series() {
        let ma30 = moving_average(&[1.0, 2.0, 3.0], 30);
        assert_eq!(ma30, vec![None, None, None]);
    }

    #[test]
    fn test_roi() {
        assert!((roi(&[100.0, 90.0, 150.0]).unwrap() - 0.5).abs() < EPS);
        assert_eq!(roi(&[]), None);
        assert_eq!(roi(&[0.0, 10.0]), None);
    }

    #[test]
    fn test_annualized_volatility_constant_series_is_zero() {
        let returns = daily_returns(&[50.0, 50.0, 50.0, 50.0]);
        assert_eq!(annualized_volatility(&returns), Some(0.0));
    }

    #[test]
    fn test_annualized_volatility_scales_sample_std() {
        let returns = vec![None, Some(0.01), Some(-0.01), Some(0.03)];
        let std = sample_std(&[0.01, -0.01, 0.03]).unwrap();
        let vol = annualized_volatility(&returns).unwrap();

        assert!(vol >= 0.0);
        assert!((vol - std * 252.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_sample_std() {
        // Known sample std: values 2, 4, 4, 4, 5, 5, 7, 9 -> variance 32/7
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = sample_std(&values).unwrap();
        assert!((std - (32.0_f64 / 7.0).sqrt()).abs() < EPS);

        assert_eq!(sample_std(&[1.0]), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }
}
