//! Configuration values owned by the feature engine.

use serde::{Deserialize, Serialize};

use crate::WellheadError;

/// Two benchmark symbols whose price difference is emitted as a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadPair {
    /// Minuend symbol (e.g. "WTI").
    pub primary: String,
    /// Subtrahend symbol (e.g. "Brent").
    pub reference: String,
}

impl SpreadPair {
    /// Convenience constructor.
    pub fn new(primary: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            reference: reference.into(),
        }
    }

    /// Symbol label used in column names and long-format rows, e.g. "WTI-Brent".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.primary, self.reference)
    }
}

/// Windows and periods used by the price feature calculator.
///
/// Periods count rows of the price table (trading days), not calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFeatureParams {
    /// Lag for `{symbol}_momentum` percent change.
    pub momentum_periods: usize,
    /// Window of the sample standard deviation of log returns.
    pub volatility_window: usize,
    /// Lag for `{symbol}_weekly_change_pct` (5 trading days ≈ 1 week).
    pub weekly_periods: usize,
    /// Window of the short rolling mean `{symbol}_mean{w}`.
    pub mean_window: usize,
}

impl Default for PriceFeatureParams {
    fn default() -> Self {
        Self {
            momentum_periods: 5,
            volatility_window: 7,
            weekly_periods: 5,
            mean_window: 7,
        }
    }
}

/// Windows used by the technical indicator library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Simple moving average windows; one column per window.
    pub ma_windows: Vec<usize>,
    /// Bollinger band window.
    pub bollinger_window: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_k: f64,
    /// RSI averaging window.
    pub rsi_window: usize,
    /// Fast EMA span of the MACD line.
    pub macd_fast: usize,
    /// Slow EMA span of the MACD line.
    pub macd_slow: usize,
    /// EMA span of the MACD signal line.
    pub macd_signal: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            ma_windows: vec![50, 200],
            bollinger_window: 20,
            bollinger_k: 2.0,
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorParams {
    /// Largest number of rows any configured indicator needs.
    #[must_use]
    pub fn max_window(&self) -> usize {
        self.ma_windows
            .iter()
            .copied()
            .chain([self.bollinger_window, self.rsi_window, self.macd_slow])
            .max()
            .unwrap_or(0)
    }

    /// Check windows for internal consistency.
    ///
    /// # Errors
    /// Returns `Err(WellheadError::InvalidArg)` if any window is zero, the
    /// band width is not a finite non-negative number, or `macd_fast >= macd_slow`.
    pub fn validate(&self) -> Result<(), WellheadError> {
        if self.ma_windows.contains(&0) {
            return Err(WellheadError::InvalidArg(
                "moving average windows must be > 0".into(),
            ));
        }
        for (label, w) in [
            ("bollinger_window", self.bollinger_window),
            ("rsi_window", self.rsi_window),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ] {
            if w == 0 {
                return Err(WellheadError::InvalidArg(format!("{label} must be > 0")));
            }
        }
        if !(self.bollinger_k.is_finite() && self.bollinger_k >= 0.0) {
            return Err(WellheadError::InvalidArg(format!(
                "bollinger_k must be finite and >= 0, got {}",
                self.bollinger_k
            )));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(WellheadError::InvalidArg(format!(
                "macd_fast ({}) must be < macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        Ok(())
    }
}

/// Immutable configuration of the feature engine.
///
/// Replaces module-level name sets: every symbol, window, and naming choice
/// the engine uses is carried here so alternate configurations can be tested
/// side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Price symbols (close columns) to derive price features for.
    pub symbols: Vec<String>,
    /// Benchmark pair for the cross-symbol spread; `None` disables it.
    pub spread: Option<SpreadPair>,
    /// Price feature windows.
    pub price: PriceFeatureParams,
    /// Symbols that receive technical indicators on the merged table. Empty
    /// means "the same as `symbols`".
    pub indicator_symbols: Vec<String>,
    /// Technical indicator windows.
    pub indicators: IndicatorParams,
    /// Inventory value column; `None` means "the table's only column".
    pub inventory_column: Option<String>,
    /// Market timezone used to map provider timestamps onto calendar dates.
    pub timezone: Option<chrono_tz::Tz>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            symbols: vec!["WTI".to_string(), "Brent".to_string()],
            indicator_symbols: Vec::new(),
            spread: Some(SpreadPair::new("WTI", "Brent")),
            price: PriceFeatureParams::default(),
            indicators: IndicatorParams::default(),
            inventory_column: None,
            timezone: None,
        }
    }
}

impl FeatureConfig {
    /// Symbols the indicator step runs on: `indicator_symbols`, or `symbols`
    /// when none are listed.
    #[must_use]
    pub fn effective_indicator_symbols(&self) -> &[String] {
        if self.indicator_symbols.is_empty() {
            &self.symbols
        } else {
            &self.indicator_symbols
        }
    }

    /// Validate the configuration as a whole.
    ///
    /// # Errors
    /// Returns `Err(WellheadError::InvalidArg)` if no symbols are configured,
    /// a price or indicator symbol is empty or listed twice, a price window is
    /// zero, the spread pair names a symbol outside `symbols` (or the same
    /// symbol twice), or the indicator windows are inconsistent.
    pub fn validate(&self) -> Result<(), WellheadError> {
        if self.symbols.is_empty() {
            return Err(WellheadError::InvalidArg(
                "at least one price symbol is required".into(),
            ));
        }
        check_symbol_list("symbol", &self.symbols)?;
        check_symbol_list("indicator symbol", &self.indicator_symbols)?;
        let p = &self.price;
        for (label, w) in [
            ("momentum_periods", p.momentum_periods),
            ("volatility_window", p.volatility_window),
            ("weekly_periods", p.weekly_periods),
            ("mean_window", p.mean_window),
        ] {
            if w == 0 {
                return Err(WellheadError::InvalidArg(format!("{label} must be > 0")));
            }
        }
        if let Some(pair) = &self.spread {
            if pair.primary == pair.reference {
                return Err(WellheadError::InvalidArg(format!(
                    "spread pair uses the same symbol twice: {}",
                    pair.primary
                )));
            }
            for s in [&pair.primary, &pair.reference] {
                if !self.symbols.contains(s) {
                    return Err(WellheadError::InvalidArg(format!(
                        "spread symbol {s} is not a configured price symbol"
                    )));
                }
            }
        }
        self.indicators.validate()
    }
}

fn check_symbol_list(what: &str, symbols: &[String]) -> Result<(), WellheadError> {
    for (i, s) in symbols.iter().enumerate() {
        if s.is_empty() {
            return Err(WellheadError::InvalidArg(format!("empty {what} name")));
        }
        if symbols[..i].contains(s) {
            return Err(WellheadError::InvalidArg(format!("duplicate {what}: {s}")));
        }
    }
    Ok(())
}
