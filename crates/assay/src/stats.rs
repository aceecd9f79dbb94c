//! Statistics primitives shared by the checks.
//!
//! All functions are total: degenerate input (empty sequences, mismatched
//! lengths, zero variance) yields `0.0` rather than an error or `NaN`.

/// Arithmetic mean. Empty input yields `0.0`.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation (divides by `n`). Empty input yields `0.0`.
pub fn standard_deviation(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let mu = mean(xs);
    let sum_sq: f64 = xs.iter().map(|x| (x - mu).powi(2)).sum();
    (sum_sq / xs.len() as f64).sqrt()
}

/// Pearson correlation coefficient of two paired samples.
///
/// Returns `0.0` when the lengths differ, either sample is empty, or either
/// sample has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.is_empty() {
        return 0.0;
    }

    let mx = mean(xs);
    let my = mean(ys);

    let mut num = 0.0;
    let mut dx = 0.0;
    let mut dy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let ex = x - mx;
        let ey = y - my;
        num += ex * ey;
        dx += ex * ex;
        dy += ey * ey;
    }

    if dx == 0.0 || dy == 0.0 {
        return 0.0;
    }
    num / (dx * dy).sqrt()
}

/// Location and spread of one column (or one column within a class).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnStats {
    pub mean: f64,
    pub std: f64,
}

impl ColumnStats {
    /// Compute mean and population standard deviation of the values.
    pub fn from_values(xs: &[f64]) -> Self {
        Self {
            mean: mean(xs),
            std: standard_deviation(xs),
        }
    }

    /// Whether `value` lies more than `z` standard deviations from the mean.
    ///
    /// A column without spread has no outliers.
    pub fn deviates(&self, value: f64, z: f64) -> bool {
        self.std > 0.0 && (value - self.mean).abs() > z * self.std
    }
}
