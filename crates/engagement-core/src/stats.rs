// File: crates/engagement-core/src/stats.rs
// Summary: Quantiles (linear interpolation between order statistics), quartile summaries, means.

/// Five-number summary of one group.
/// Contract: `min <= q1 <= median <= q3 <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuartileSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl QuartileSummary {
    /// Summarize unsorted values. `NaN`s are skipped; `None` when nothing is left.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_numbers(values);
        Self::from_sorted(&sorted)
    }

    /// Summarize values already sorted ascending and free of `NaN`.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            min: *sorted.first()?,
            q1: quantile_sorted(sorted, 0.25)?,
            median: quantile_sorted(sorted, 0.5)?,
            q3: quantile_sorted(sorted, 0.75)?,
            max: *sorted.last()?,
        })
    }

    pub fn iqr(&self) -> f64 { self.q3 - self.q1 }

    pub fn values(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Quantile `p` of ascending `sorted` values.
///
/// Uses index `p * (n - 1)` and interpolates between the two neighbours.
/// `p` outside `[0, 1]` clamps to the ends.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }
    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[i0 + 1];
    Some(v0 + (v1 - v0) * (i - i0 as f64))
}

/// Quantile of unsorted values, skipping `NaN`.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    quantile_sorted(&sorted_numbers(values), p)
}

pub fn median(values: &[f64]) -> Option<f64> { quantile(values, 0.5) }

/// Arithmetic mean, skipping `NaN`.
pub fn mean(values: &[f64]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// `(min, max)` skipping `NaN`.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().filter(|v| !v.is_nan()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Largest value skipping `NaN`.
pub fn max<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    extent(values).map(|(_, hi)| hi)
}

fn sorted_numbers(values: &[f64]) -> Vec<f64> {
    let mut v: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    v.sort_by(f64::total_cmp);
    v
}
