//! Integration tests for historical fact resolution against the embedded tables.
//!
//! Scenario tests pin concrete dates; property tests use `proptest` to check
//! granularity selection, idempotence and fail-soft behavior across inputs.

use std::sync::Arc;

use async_trait::async_trait;
use keepsake_facts::{
    CurrentSnapshotProvider, ExtendedTable, FactKey, FactMap, FactSource, FactTables, FactsError,
    HistoricalFactResolver, LiveFetchStatus, StaticSnapshotProvider, YearMonth, EXTENDED_LAST_YEAR,
};
use proptest::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

struct UnavailableProvider;

#[async_trait]
impl CurrentSnapshotProvider for UnavailableProvider {
    fn id(&self) -> &'static str {
        "UNAVAILABLE"
    }

    async fn fetch_current(&self) -> Result<FactMap, FactsError> {
        Err(FactsError::LiveFetch {
            provider: "UNAVAILABLE".to_string(),
            message: "connection refused".to_string(),
        })
    }
}

fn today() -> StaticSnapshotProvider {
    [
        ("GALLON OF GASOLINE", "$3.15"),
        ("PRESIDENT", "Donald Trump"),
        ("VICE PRESIDENT", "JD Vance"),
        ("OUNCE OF GOLD", "$4,210.00"),
        ("Cup of Coffee", "$5.00"),
    ]
    .into_iter()
    .collect()
}

fn resolver() -> HistoricalFactResolver {
    HistoricalFactResolver::new(Arc::new(today()))
}

fn offline_resolver() -> HistoricalFactResolver {
    HistoricalFactResolver::new(Arc::new(UnavailableProvider))
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

fn value(facts: &FactMap, key: FactKey) -> Option<&str> {
    facts.get(&key).map(|v| v.as_ref())
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn resolves_1971_from_extended_table() {
    let facts = resolver().resolve("1971-11-15").await;

    assert_eq!(value(&facts, FactKey::President), Some("Richard Nixon"));
    assert_eq!(value(&facts, FactKey::VicePresident), Some("Spiro Agnew"));
    assert_eq!(value(&facts, FactKey::Gasoline), Some("$0.364"));
    assert_eq!(
        value(&facts, FactKey::WorldSeries),
        Some("Pittsburgh Pirates")
    );
    // Live-only keys pass through untouched.
    assert_eq!(value(&facts, FactKey::from("Cup of Coffee")), Some("$5.00"));
}

#[tokio::test]
async fn resolves_march_2020_from_monthly_table() {
    let detailed = resolver().resolve_detailed("2020-03-15").await;

    assert_eq!(
        detailed.get(&FactKey::Gasoline).map(|v| v.as_ref()),
        Some("$2.17")
    );
    assert_eq!(detailed.source(&FactKey::Gasoline), Some(FactSource::Monthly));
    assert_eq!(
        detailed.get(&FactKey::President).map(|v| v.as_ref()),
        Some("Donald Trump")
    );
    assert_eq!(detailed.source(&FactKey::President), Some(FactSource::Monthly));
}

#[tokio::test]
async fn extended_value_beats_yearly_value() {
    let tables = FactTables::embedded();
    assert_eq!(
        tables.yearly.get(&FactKey::Gasoline, 1971).map(|v| v.as_ref()),
        Some("$0.36")
    );

    let detailed = resolver().resolve_detailed("1971-11-15").await;
    assert_eq!(detailed.source(&FactKey::Gasoline), Some(FactSource::Extended));
    assert_eq!(
        detailed.get(&FactKey::Gasoline).map(|v| v.as_ref()),
        Some("$0.364")
    );
}

#[tokio::test]
async fn extended_table_is_not_consulted_after_2004() {
    let embedded = FactTables::embedded();
    let tampered = FactTables::new(
        embedded.monthly.clone(),
        embedded.yearly.clone(),
        ExtendedTable::embedded()
            .with_explicit(FactKey::Gasoline, [(2010, "$99.99")])
            .with_explicit(FactKey::WorldSeries, [(2010, "Should Not Appear")]),
    );
    let resolver = HistoricalFactResolver::with_tables(
        Arc::new(tampered),
        Arc::new(StaticSnapshotProvider::empty()),
    );

    let detailed = resolver.resolve_detailed("2010-05-05").await;
    assert_eq!(
        detailed.get(&FactKey::Gasoline).map(|v| v.as_ref()),
        Some("$2.79")
    );
    assert_eq!(detailed.source(&FactKey::Gasoline), Some(FactSource::Yearly));
    assert!(detailed.get(&FactKey::WorldSeries).is_none());
    assert!(detailed
        .facts
        .values()
        .all(|fact| fact.source != FactSource::Extended));
}

#[tokio::test]
async fn vice_president_is_unknown_between_tables() {
    // 2010 is past the extended window and the yearly table has no vice
    // president, so only the live value can supply one.
    let offline = offline_resolver().resolve("2010-05-05").await;
    assert!(!offline.contains_key(&FactKey::VicePresident));

    let online = resolver().resolve_detailed("2010-05-05").await;
    assert_eq!(
        online.source(&FactKey::VicePresident),
        Some(FactSource::Current)
    );
}

#[tokio::test]
async fn malformed_date_returns_current_snapshot() {
    let expected = today().fetch_current().await.unwrap();

    for input in ["not-a-date", "", "1971-11-31", "1971/11/15", "15-11-1971"] {
        let detailed = resolver().resolve_detailed(input).await;
        assert!(detailed.date.is_none(), "{input:?}");
        assert_eq!(detailed.historical_count(), 0, "{input:?}");
        assert_eq!(detailed.into_map(), expected, "{input:?}");
    }
}

#[tokio::test]
async fn live_failure_keeps_historical_facts() {
    let detailed = offline_resolver().resolve_detailed("1971-11-15").await;

    assert!(matches!(detailed.live, LiveFetchStatus::Failed { .. }));
    assert!(!detailed.facts.is_empty());
    assert_eq!(
        detailed.get(&FactKey::President).map(|v| v.as_ref()),
        Some("Richard Nixon")
    );
    assert!(detailed.get(&FactKey::from("Cup of Coffee")).is_none());
}

#[tokio::test]
async fn live_failure_with_malformed_date_is_empty_not_an_error() {
    let facts = offline_resolver().resolve("garbage").await;
    assert!(facts.is_empty());
}

#[tokio::test]
async fn songs_absent_before_charts_existed() {
    let facts = offline_resolver().resolve("1920-07-04").await;
    assert_eq!(value(&facts, FactKey::President), Some("Woodrow Wilson"));
    assert!(!facts.contains_key(&FactKey::NumberOneSong));
}

#[tokio::test]
async fn dates_past_the_monthly_table_fall_back_to_current() {
    let detailed = resolver().resolve_detailed("2031-01-01").await;
    assert_eq!(detailed.historical_count(), 0);
    assert_eq!(
        detailed.get(&FactKey::Gasoline).map(|v| v.as_ref()),
        Some("$3.15")
    );
}

#[tokio::test]
async fn resolved_facts_serialize_with_sources() {
    let detailed = resolver().resolve_detailed("1971-11-15").await;
    let json = serde_json::to_value(&detailed).unwrap();

    assert_eq!(json["date"], "1971-11-15");
    assert_eq!(json["live"]["status"], "fetched");
    assert_eq!(json["facts"]["PRESIDENT"]["value"], "Richard Nixon");
    assert_eq!(json["facts"]["PRESIDENT"]["source"], "EXTENDED");
    assert_eq!(json["facts"]["Cup of Coffee"]["source"], "CURRENT");
}

// =============================================================================
// Properties
// =============================================================================

fn keys_in_both_tables() -> Vec<FactKey> {
    let tables = FactTables::embedded();
    let mut keys: Vec<FactKey> = tables
        .monthly
        .keys()
        .filter(|key| tables.yearly.keys().any(|other| other == *key))
        .cloned()
        .collect();
    keys.sort();
    keys
}

#[test]
fn granularity_switches_at_2020() {
    let resolver = offline_resolver();
    let tables = FactTables::embedded();
    let january: YearMonth = "2020-01".parse().unwrap();

    let before = resolver.historical_facts("2019-12-31");
    let after = resolver.historical_facts("2020-01-01");

    let keys = keys_in_both_tables();
    assert!(!keys.is_empty());
    for key in keys {
        assert_eq!(before.get(&key), tables.yearly.get(&key, 2019), "{key}");
        assert_eq!(after.get(&key), tables.monthly.get(&key, january), "{key}");
    }
}

proptest! {
    #[test]
    fn resolution_is_idempotent(year in 1900i32..2030, month in 1u32..=12, day in 1u32..=28) {
        let date = format!("{year:04}-{month:02}-{day:02}");
        let resolver = resolver();
        let rt = runtime();

        let first = rt.block_on(resolver.resolve(&date));
        let second = rt.block_on(resolver.resolve(&date));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_strings_never_inject_history(input in "\\PC{0,16}") {
        prop_assume!(keepsake_facts::TargetDate::parse(&input).is_err());
        let resolver = resolver();
        let rt = runtime();

        let detailed = rt.block_on(resolver.resolve_detailed(&input));
        prop_assert_eq!(detailed.historical_count(), 0);
        prop_assert_eq!(detailed.facts.len(), 5);
    }

    #[test]
    fn day_of_month_does_not_matter(year in 1914i32..2026, month in 1u32..=12, day in 2u32..=28) {
        let resolver = offline_resolver();
        let first = resolver.historical_facts(&format!("{year:04}-{month:02}-01"));
        let other = resolver.historical_facts(&format!("{year:04}-{month:02}-{day:02}"));
        prop_assert_eq!(first, other);
    }

    #[test]
    fn extended_years_always_carry_extended_values(year in 1914i32..=EXTENDED_LAST_YEAR) {
        let resolver = offline_resolver();
        let facts = resolver.historical_facts(&format!("{year:04}-06-15"));
        let extended = ExtendedTable::embedded().values_for_year(year);

        prop_assert!(!extended.is_empty());
        for (key, value) in extended {
            prop_assert_eq!(facts.get(&key), Some(&value));
        }
    }
}
