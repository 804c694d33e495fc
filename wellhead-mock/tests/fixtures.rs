use chrono::{Datelike, Weekday};
use wellhead_core::SourceKind;
use wellhead_mock::{INVENTORY_COLUMN, INVENTORY_WEEKS, MockProvider, PRICE_SYMBOLS, TRADING_DAYS};

#[test]
fn default_provider_delivers_every_source() {
    let sources = MockProvider::new().sources().unwrap();
    assert_eq!(sources.len(), 3);

    let price = &sources[&SourceKind::Price];
    assert_eq!(price.len(), TRADING_DAYS);
    assert!(price.is_normalized());
    assert!(
        price
            .index()
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
    );
    for s in PRICE_SYMBOLS {
        assert!(price.contains(s), "missing {s}");
    }
    assert!(price.contains("WTI_volume"));

    let inventory = &sources[&SourceKind::Inventory];
    assert_eq!(inventory.len(), INVENTORY_WEEKS);
    assert_eq!(inventory.columns().len(), 1);
    assert!(inventory.contains(INVENTORY_COLUMN));

    assert_eq!(sources[&SourceKind::RigCount].len(), 1);
}

#[test]
fn fixtures_are_deterministic() {
    let a = MockProvider::new().sources().unwrap();
    let b = MockProvider::new().sources().unwrap();
    assert_eq!(a, b);
}

#[test]
fn bars_bracket_the_close() {
    let price = MockProvider::new()
        .fetch(SourceKind::Price)
        .unwrap()
        .unwrap();
    let close = price.column("WTI").unwrap().values();
    let high = price.column("WTI_high").unwrap().values();
    let low = price.column("WTI_low").unwrap().values();
    for i in 0..close.len() {
        assert!(low[i] < close[i] && close[i] < high[i]);
    }
}

#[test]
fn toggles_omit_and_empty_sources() {
    let sources = MockProvider::new()
        .without(SourceKind::RigCount)
        .empty(SourceKind::Inventory)
        .sources()
        .unwrap();
    assert!(!sources.contains_key(&SourceKind::RigCount));
    let inventory = &sources[&SourceKind::Inventory];
    assert!(inventory.is_empty());
    assert!(inventory.contains(INVENTORY_COLUMN));
}

#[test]
fn intraday_feed_collapses_to_settlement() {
    let provider = MockProvider::new().trading_days(20);
    let intraday = provider
        .clone()
        .intraday(true)
        .fetch(SourceKind::Price)
        .unwrap()
        .unwrap();
    assert_eq!(intraday.len(), 60);
    assert!(!intraday.is_normalized());

    let daily = provider.fetch(SourceKind::Price).unwrap().unwrap();
    assert_eq!(intraday.normalize(), daily);
}
