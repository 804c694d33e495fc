//! Column naming convention for derived features: `{symbol}_{feature}`.
//!
//! Both symbols and feature labels may contain underscores. Splitting a
//! derived name back into its parts needs the list of known symbols; the
//! longest matching symbol wins.

/// `ln(1 + pct_change)`.
pub const LOG_RETURN: &str = "log_return";
/// `pct_change(k)`.
pub const MOMENTUM: &str = "momentum";
/// Rolling sample stddev of log returns.
pub const VOLATILITY: &str = "volatility";
/// `pct_change(5) * 100`.
pub const WEEKLY_CHANGE_PCT: &str = "weekly_change_pct";
/// Cross-symbol price difference.
pub const SPREAD: &str = "spread";
/// Upper Bollinger band.
pub const BB_UPPER: &str = "bb_upper";
/// Lower Bollinger band.
pub const BB_LOWER: &str = "bb_lower";
/// Relative strength index.
pub const RSI: &str = "rsi";
/// MACD line.
pub const MACD: &str = "macd";
/// MACD signal line.
pub const MACD_SIGNAL: &str = "macd_signal";
/// Period-over-period difference of the inventory level.
pub const WEEKLY_CHANGE: &str = "weekly_change";
/// Period-over-period fractional change of the inventory level.
pub const WEEKLY_PCT_CHANGE: &str = "weekly_pct_change";
/// Batch z-score.
pub const ZSCORE: &str = "zscore";

/// Full column name for a feature of a symbol.
#[must_use]
pub fn feature(symbol: &str, feature: &str) -> String {
    format!("{symbol}_{feature}")
}

/// Label of the short rolling mean computed on the price table, e.g. `mean7`.
#[must_use]
pub fn rolling_mean(window: usize) -> String {
    format!("mean{window}")
}

/// Label of a simple moving average indicator, e.g. `ma50`.
#[must_use]
pub fn moving_average(window: usize) -> String {
    format!("ma{window}")
}
