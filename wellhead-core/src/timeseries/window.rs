//! Row-wise and windowed transforms over a single column of observations.
//!
//! All functions take a slice and return a new vector of the same length.
//! Undefined cells (`NaN`) propagate: an output cell is undefined whenever
//! the inputs it depends on are undefined, or the window holds too few
//! observations.

use crate::table::{MISSING, is_missing};

/// Fractional change from `periods` rows earlier: `x[i] / x[i - periods] - 1`.
///
/// The first `periods` rows are undefined, as is any row where either operand
/// is undefined. No implicit fill is applied to gaps.
///
/// ```
/// use wellhead_core::timeseries::window::pct_change;
/// let out = pct_change(&[10.0, 11.0, 9.9], 1);
/// assert!(out[0].is_nan());
/// assert!((out[1] - 0.1).abs() < 1e-12);
/// assert!((out[2] + 0.1).abs() < 1e-12);
/// ```
#[must_use]
pub fn pct_change(values: &[f64], periods: usize) -> Vec<f64> {
    lagged(values, periods, |cur, prev| cur / prev - 1.0)
}

/// Difference from `periods` rows earlier: `x[i] - x[i - periods]`.
#[must_use]
pub fn diff(values: &[f64], periods: usize) -> Vec<f64> {
    lagged(values, periods, |cur, prev| cur - prev)
}

fn lagged<F>(values: &[f64], periods: usize, f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    values
        .iter()
        .enumerate()
        .map(|(i, &cur)| {
            if i < periods {
                return MISSING;
            }
            let prev = values[i - periods];
            if is_missing(cur) || is_missing(prev) {
                MISSING
            } else {
                f(cur, prev)
            }
        })
        .collect()
}

/// Natural log of one plus each value; turns simple returns into log returns.
#[must_use]
pub fn log1p(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.ln_1p()).collect()
}

/// Rolling arithmetic mean over the trailing `window` rows.
///
/// A row is defined once the window holds at least `min_periods` defined
/// observations (`min_periods` is clamped to `1..=window`). With
/// `min_periods == window` the first `window - 1` rows are undefined.
#[must_use]
pub fn rolling_mean(values: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    rolling(values, window, min_periods.max(1), |obs| {
        obs.iter().sum::<f64>() / obs.len() as f64
    })
}

/// Rolling sample standard deviation (`ddof = 1`) over the trailing `window` rows.
///
/// Needs at least two defined observations in addition to `min_periods`.
#[must_use]
pub fn rolling_std(values: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    rolling(values, window, min_periods.max(2), |obs| {
        sample_std_of(obs).unwrap_or(MISSING)
    })
}

fn rolling<F>(values: &[f64], window: usize, min_periods: usize, stat: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    if window == 0 {
        return vec![MISSING; values.len()];
    }
    let min_periods = min_periods.min(window);
    let mut obs: Vec<f64> = Vec::with_capacity(window);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            obs.clear();
            obs.extend(values[start..=i].iter().copied().filter(|v| !is_missing(*v)));
            if obs.len() >= min_periods {
                stat(&obs)
            } else {
                MISSING
            }
        })
        .collect()
}

/// Exponentially weighted mean without bias correction (`adjust = false`).
///
/// Recursive form `y_t = a * x_t + (1 - a) * y_{t-1}` with `a = 2 / (span + 1)`,
/// seeded by the first defined observation. Leading undefined rows stay
/// undefined. An undefined row in the middle repeats the previous mean, and
/// the gap still decays the weight of the history so the next observation
/// counts for more.
///
/// ```
/// use wellhead_core::timeseries::window::ewm_mean;
/// // a = 0.5 for span 3
/// let out = ewm_mean(&[f64::NAN, 2.0, 4.0, 8.0], 3);
/// assert!(out[0].is_nan());
/// assert_eq!(&out[1..], &[2.0, 3.0, 5.5]);
/// ```
#[must_use]
pub fn ewm_mean(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;

    let mut out = Vec::with_capacity(values.len());
    let mut weighted = MISSING;
    let mut old_wt = 1.0;
    for &cur in values {
        if is_missing(weighted) {
            weighted = cur;
        } else {
            old_wt *= decay;
            if !is_missing(cur) {
                if weighted != cur {
                    weighted = old_wt.mul_add(weighted, alpha * cur) / (old_wt + alpha);
                }
                old_wt = 1.0;
            }
        }
        out.push(weighted);
    }
    out
}

/// Carry the last defined observation forward over undefined cells.
///
/// Leading undefined cells stay undefined; nothing is back-filled.
#[must_use]
pub fn forward_fill(values: &[f64]) -> Vec<f64> {
    let mut last = MISSING;
    values
        .iter()
        .map(|&v| {
            if !is_missing(v) {
                last = v;
            }
            last
        })
        .collect()
}

/// Mean of the defined observations, or `None` if there are none.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    let (sum, n) = values
        .iter()
        .filter(|v| !is_missing(**v))
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Sample standard deviation (`ddof = 1`) of the defined observations, or
/// `None` if fewer than two exist.
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let obs: Vec<f64> = values.iter().copied().filter(|v| !is_missing(*v)).collect();
    sample_std_of(&obs)
}

// Shifted-data variance: subtracting the first observation keeps a constant
// window at exactly zero.
fn sample_std_of(obs: &[f64]) -> Option<f64> {
    let n = obs.len();
    if n < 2 {
        return None;
    }
    let k = obs[0];
    let (sum, sum_sq) = obs.iter().fold((0.0, 0.0), |(s, sq), &x| {
        let d = x - k;
        (s + d, d.mul_add(d, sq))
    });
    let n = n as f64;
    let var = (sum_sq - sum * sum / n) / (n - 1.0);
    Some(var.max(0.0).sqrt())
}
