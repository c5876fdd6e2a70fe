//! Rate fetch tests: loading flag, table replacement, swallowed failures,
//! stale-token handling.

mod common;

use common::store_with_mirror;
use crosspay_wallet_core::RateError;
use std::collections::HashMap;

#[tokio::test]
async fn fetch_replaces_the_rate_table_and_clears_loading() {
    let (mut store, _mirror, rates) = store_with_mirror();
    rates.push_ok(&[("NGN", 1500.0), ("EUR", 0.92)]);

    store.fetch_rates("USD").await;

    assert!(!store.is_loading_rates());
    assert_eq!(store.exchange_rates().len(), 2);
    assert_eq!(store.exchange_rates().get("NGN"), Some(&1500.0));
}

#[tokio::test]
async fn a_second_fetch_replaces_the_table_wholesale() {
    let (mut store, _mirror, rates) = store_with_mirror();
    rates.push_ok(&[("NGN", 1500.0), ("EUR", 0.92)]);
    store.fetch_rates("USD").await;

    rates.push_ok(&[("USD", 0.0006)]);
    store.fetch_rates("NGN").await;

    assert_eq!(store.exchange_rates().len(), 1);
    assert_eq!(store.exchange_rates().get("USD"), Some(&0.0006));
    assert!(store.exchange_rates().get("NGN").is_none());
}

#[tokio::test]
async fn fetch_failure_keeps_the_last_known_rates() {
    let (mut store, _mirror, rates) = store_with_mirror();
    rates.push_ok(&[("NGN", 1500.0)]);
    store.fetch_rates("USD").await;

    rates.push_err();
    store.fetch_rates("USD").await;

    assert!(!store.is_loading_rates());
    assert_eq!(store.exchange_rates().get("NGN"), Some(&1500.0));
}

#[tokio::test]
async fn fetch_failure_on_an_empty_table_leaves_it_empty() {
    let (mut store, _mirror, rates) = store_with_mirror();
    rates.push_err();

    store.fetch_rates("USD").await;

    assert!(!store.is_loading_rates());
    assert!(store.exchange_rates().is_empty());
}

#[test]
fn the_loading_flag_is_observable_between_begin_and_complete() {
    let (mut store, _mirror, _rates) = store_with_mirror();

    let token = store.begin_rates_fetch();
    assert!(store.is_loading_rates());

    store.complete_rates_fetch(token, Ok(HashMap::new()));
    assert!(!store.is_loading_rates());
}

#[test]
fn a_stale_response_never_overwrites_a_newer_one() {
    let (mut store, _mirror, _rates) = store_with_mirror();
    let first = store.begin_rates_fetch();
    let second = store.begin_rates_fetch();

    store.complete_rates_fetch(second, Ok(rate_table(&[("NGN", 1600.0)])));
    assert!(!store.is_loading_rates());

    // the older request resolves late; its payload must not apply
    store.complete_rates_fetch(first, Ok(rate_table(&[("NGN", 1500.0)])));

    assert_eq!(store.exchange_rates().get("NGN"), Some(&1600.0));
    assert!(!store.is_loading_rates());
}

#[test]
fn the_flag_stays_on_until_the_latest_request_settles() {
    let (mut store, _mirror, _rates) = store_with_mirror();
    let first = store.begin_rates_fetch();
    let second = store.begin_rates_fetch();

    store.complete_rates_fetch(first, Err(RateError::Malformed("stale".to_string())));
    assert!(store.is_loading_rates());

    store.complete_rates_fetch(second, Ok(HashMap::new()));
    assert!(!store.is_loading_rates());
}

fn rate_table(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries.iter().map(|(c, r)| (c.to_string(), *r)).collect()
}
