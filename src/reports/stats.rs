//! Descriptive statistics shared by the summary and feature pages.

use serde::Serialize;

use crate::models::indicators::{mean, sample_std};

/// Descriptive statistics for one numeric column, in the shape of a
/// dataframe `describe()` row: count, mean, std, min, quartiles, max.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Describe one column. Absent for an empty column.
///
/// Std follows the sample convention (ddof = 1) and quantiles use linear
/// interpolation, matching the dataframe library the dashboard's numbers
/// are compared against.
pub fn describe(column: &str, values: &[f64]) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(ColumnSummary {
        column: column.to_string(),
        count: values.len(),
        mean: mean(values).unwrap_or(0.0),
        std: sample_std(values).unwrap_or(0.0),
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear-interpolation quantile over pre-sorted values
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (position - lower as f64) * (sorted[upper] - sorted[lower])
    }
}

/// Pearson correlation over index-aligned pairs where both sides are
/// present. Absent with fewer than two complete pairs or a constant side.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        covariance += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(covariance / (var_x.sqrt() * var_y.sqrt()))
}

/// One bar of an equal-width histogram
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram over the observed values. A constant series folds
/// into a single bin; the maximum lands in the last bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let mut index = ((value - min) / width) as usize;
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_describe_known_series() {
        let summary = describe("Close", &[1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(summary.count, 4);
        assert!((summary.mean - 2.5).abs() < EPS);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        // Linear interpolation: q25 = 1.75, median = 2.5, q75 = 3.25
        assert!((summary.q25 - 1.75).abs() < EPS);
        assert!((summary.median - 2.5).abs() < EPS);
        assert!((summary.q75 - 3.25).abs() < EPS);
    }

    #[test]
    fn test_describe_empty_column() {
        assert!(describe("Close", &[]).is_none());
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[7.0], 0.25), 7.0);
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let xs: Vec<Option<f64>> = vec![Some(1.0), Some(2.0), Some(3.0)];
        let ys: Vec<Option<f64>> = vec![Some(3.0), Some(5.0), Some(7.0)]; // y = 2x + 1
        assert!((pearson(&xs, &ys).unwrap() - 1.0).abs() < EPS);

        let inverse: Vec<Option<f64>> = vec![Some(-1.0), Some(-2.0), Some(-3.0)];
        assert!((pearson(&xs, &inverse).unwrap() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_pearson_skips_incomplete_pairs() {
        let xs = vec![None, Some(1.0), Some(2.0), Some(3.0)];
        let ys = vec![Some(9.0), Some(1.0), None, Some(3.0)];
        // Complete pairs: (1,1) and (3,3)
        assert!((pearson(&xs, &ys).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_pearson_constant_side_is_undefined() {
        let xs = vec![Some(1.0), Some(2.0), Some(3.0)];
        let ys = vec![Some(5.0), Some(5.0), Some(5.0)];
        assert_eq!(pearson(&xs, &ys), None);
    }

    #[test]
    fn test_histogram_bin_counts() {
        let values = vec![0.0, 0.1, 0.2, 0.9, 1.0];
        let bins = histogram(&values, 2);

        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].count, 3); // 0.0, 0.1, 0.2
        assert_eq!(bins[1].count, 2); // 0.9, 1.0 (max in last bin)
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn test_histogram_constant_series() {
        let bins = histogram(&[2.0, 2.0, 2.0], 20);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }
}
