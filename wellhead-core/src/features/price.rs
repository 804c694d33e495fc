use wellhead_types::{PriceFeatureParams, SpreadPair};

use crate::WellheadError;
use crate::names;
use crate::table::{Column, Table};
use crate::timeseries::window::{log1p, pct_change, rolling_mean, rolling_std};
use crate::validate::{require_column, require_positive};

/// Derive return, momentum, and volatility features from close-price columns.
///
/// For every symbol `s` (a close-price column), appends:
/// - `{s}_log_return`: `ln(1 + pct_change(s))`; first row undefined.
/// - `{s}_momentum`: `pct_change(s, momentum_periods)`.
/// - `{s}_volatility`: sample stddev of the log return over
///   `volatility_window` rows, once the window is full.
/// - `{s}_weekly_change_pct`: `pct_change(s, weekly_periods) * 100`.
/// - `{s}_mean{w}`: rolling mean of the close over `mean_window` rows.
///
/// With a spread pair, also appends `{a}-{b}_spread = a - b`, undefined on
/// rows where either side is undefined.
///
/// Periods count table rows, so on a trading-day table a 5-row lag spans a
/// trading week. The table is consumed and returned augmented; callers that
/// need the original pass a clone.
///
/// # Errors
/// - `WellheadError::ColumnNotFound` if a symbol or spread column is absent.
///   Every column is checked before any feature is computed.
/// - `WellheadError::InvalidArg` if a period or window is zero.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "wellhead::features",
        skip(table, params, spread),
        fields(rows = table.len()),
    )
)]
pub fn add_price_features(
    mut table: Table,
    symbols: &[String],
    params: &PriceFeatureParams,
    spread: Option<&SpreadPair>,
) -> Result<Table, WellheadError> {
    require_positive("momentum_periods", params.momentum_periods)?;
    require_positive("volatility_window", params.volatility_window)?;
    require_positive("weekly_periods", params.weekly_periods)?;
    require_positive("mean_window", params.mean_window)?;
    for s in symbols {
        require_column(&table, s)?;
    }
    if let Some(pair) = spread {
        require_column(&table, &pair.primary)?;
        require_column(&table, &pair.reference)?;
    }

    for s in symbols {
        let derived = price_features_for(require_column(&table, s)?.values(), s, params);
        for c in derived {
            table.put_column(c)?;
        }
    }

    if let Some(pair) = spread {
        let spread = price_spread(
            require_column(&table, &pair.primary)?.values(),
            require_column(&table, &pair.reference)?.values(),
        );
        table.put_column(Column::new(
            names::feature(&pair.label(), names::SPREAD),
            spread,
        ))?;
    }

    Ok(table)
}

fn price_features_for(close: &[f64], symbol: &str, params: &PriceFeatureParams) -> Vec<Column> {
    let log_return = log1p(&pct_change(close, 1));
    let volatility = rolling_std(
        &log_return,
        params.volatility_window,
        params.volatility_window,
    );
    let momentum = pct_change(close, params.momentum_periods);
    let weekly = pct_change(close, params.weekly_periods)
        .into_iter()
        .map(|v| v * 100.0)
        .collect();
    let mean = rolling_mean(close, params.mean_window, params.mean_window);

    let col = |feature: &str, values: Vec<f64>| Column::new(names::feature(symbol, feature), values);
    vec![
        col(names::LOG_RETURN, log_return),
        col(names::MOMENTUM, momentum),
        col(names::VOLATILITY, volatility),
        col(names::WEEKLY_CHANGE_PCT, weekly),
        col(&names::rolling_mean(params.mean_window), mean),
    ]
}

/// Row-wise difference of two aligned price columns.
///
/// Undefined wherever either side is undefined.
#[must_use]
pub fn price_spread(primary: &[f64], reference: &[f64]) -> Vec<f64> {
    primary.iter().zip(reference).map(|(a, b)| a - b).collect()
}
