use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use wellhead_core::{Column, Table, WellheadError};

use super::jitter;

/// First trading day in the price fixture.
pub const START: (i32, u32, u32) = (2023, 1, 2);

pub fn trading_days(n: usize) -> Vec<NaiveDate> {
    let (y, m, d) = START;
    let mut day = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(day);
        }
        day = day + Days::new(1);
    }
    out
}

fn wti_close(i: usize) -> f64 {
    let t = i as f64;
    78.0 + 7.5 * (t / 23.0).sin() + 2.5 * (t / 6.3).sin() + 0.015 * t + 1.4 * jitter(i, 1)
}

fn brent_close(i: usize) -> f64 {
    wti_close(i) + 4.2 + 0.6 * (i as f64 / 11.0).sin() + 0.3 * jitter(i, 2)
}

fn ovx_close(i: usize) -> f64 {
    34.0 + 6.0 * (i as f64 / 17.0).cos() + 1.5 * jitter(i, 3)
}

fn ohlcv(symbol: &str, close: &[f64], salt: usize) -> Vec<Column> {
    let open: Vec<f64> = close
        .iter()
        .enumerate()
        .map(|(i, c)| if i == 0 { *c } else { close[i - 1] + 0.4 * jitter(i, salt) })
        .collect();
    let high = open
        .iter()
        .zip(close)
        .enumerate()
        .map(|(i, (o, c))| o.max(*c) + 0.3 + 0.5 * (jitter(i, salt + 1) + 0.5))
        .collect();
    let low = open
        .iter()
        .zip(close)
        .enumerate()
        .map(|(i, (o, c))| o.min(*c) - 0.3 - 0.5 * (jitter(i, salt + 2) + 0.5))
        .collect();
    let volume = (0..close.len())
        .map(|i| (240_000.0 + 120_000.0 * (jitter(i, salt + 3) + 0.5)).round())
        .collect();
    vec![
        Column::new(format!("{symbol}_open"), open),
        Column::new(format!("{symbol}_high"), high),
        Column::new(format!("{symbol}_low"), low),
        Column::new(format!("{symbol}_volume"), volume),
    ]
}

fn columns(n: usize) -> Vec<Column> {
    let wti: Vec<f64> = (0..n).map(wti_close).collect();
    let brent: Vec<f64> = (0..n).map(brent_close).collect();
    let ovx: Vec<f64> = (0..n).map(ovx_close).collect();

    let bars = [ohlcv("WTI", &wti, 10), ohlcv("Brent", &brent, 20)];
    let mut cols = vec![
        Column::new("WTI", wti),
        Column::new("Brent", brent),
        Column::new("OVX", ovx),
    ];
    cols.extend(bars.into_iter().flatten());
    cols
}

// Settlement prints land at 19:30 UTC.
fn settlement(day: NaiveDate, hour: u32) -> DateTime<Utc> {
    day.and_hms_opt(hour, 30, 0)
        .unwrap_or(day.and_time(chrono::NaiveTime::MIN))
        .and_utc()
}

/// Daily settlement table over `n` trading days.
pub fn daily(n: usize) -> Result<Table, WellheadError> {
    let ts: Vec<DateTime<Utc>> = trading_days(n)
        .into_iter()
        .map(|d| settlement(d, 19))
        .collect();
    Table::from_timestamps(&ts, columns(n), None)
}

/// Three prints per trading day delivered newest first. The 19:30 print of
/// each day carries the settlement values of [`daily`].
pub fn intraday(n: usize) -> Result<Table, WellheadError> {
    let settle = columns(n);
    let days = trading_days(n);

    let mut ts = Vec::with_capacity(n * 3);
    let mut rows: Vec<(usize, f64)> = Vec::with_capacity(n * 3);
    for (i, day) in days.iter().enumerate().rev() {
        for (hour, drift) in [(19, 0.0), (17, 0.35), (15, -0.6)] {
            ts.push(settlement(*day, hour));
            rows.push((i, drift));
        }
    }
    let cols = settle
        .into_iter()
        .map(|c| {
            let (name, values) = c.into_parts();
            let is_volume = name.ends_with("_volume");
            let shifted = rows
                .iter()
                .map(|&(i, drift)| if is_volume || drift == 0.0 { values[i] } else { values[i] + drift })
                .collect();
            Column::new(name, shifted)
        })
        .collect();
    Table::from_timestamps(&ts, cols, None)
}
