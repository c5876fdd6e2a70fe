//! Analytics aggregation tests.

use chrono::{NaiveDate, TimeZone, Utc};
use crosspay_wallet_core::analytics::{self, ActivitySummary};
use crosspay_wallet_core::{Transaction, TransactionType, Wallet};
use pretty_assertions::assert_eq;

fn txn_on(type_: TransactionType, amount: f64, month: u32, day: u32, hour: u32) -> Transaction {
    let time_stamp = Utc.with_ymd_and_hms(2026, month, day, hour, 0, 0).unwrap();
    Transaction {
        id: time_stamp.timestamp_millis().to_string(),
        type_,
        from_currency: Some("USD".to_string()),
        to_currency: None,
        amount,
        converted_amount: None,
        to_address: None,
        time_stamp,
    }
}

fn swap_on(from: &str, to: &str, month: u32, day: u32, hour: u32) -> Transaction {
    Transaction {
        from_currency: Some(from.to_string()),
        to_currency: Some(to.to_string()),
        converted_amount: Some(1.0),
        ..txn_on(TransactionType::Swap, 1.0, month, day, hour)
    }
}

#[test]
fn volume_by_day_fills_the_trailing_window() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let transactions = vec![
        txn_on(TransactionType::Deposit, 100.0, 8, 6, 9),
        txn_on(TransactionType::Send, 25.5, 8, 6, 12),
        txn_on(TransactionType::Deposit, 10.0, 8, 4, 8),
        // outside the window
        txn_on(TransactionType::Deposit, 99.0, 7, 20, 8),
    ];

    let volume = analytics::volume_by_day(&transactions, 7, today);

    assert_eq!(volume.len(), 7);
    assert_eq!(volume[0].date, NaiveDate::from_ymd_opt(2026, 7, 31).unwrap());
    assert_eq!(volume[6].date, today);
    assert_eq!(volume[6].volume, 125.5);
    assert_eq!(volume[4].volume, 10.0);
    let quiet_days = volume.iter().filter(|d| d.volume == 0.0).count();
    assert_eq!(quiet_days, 5);
}

#[test]
fn type_breakdown_counts_in_first_seen_order() {
    let transactions = vec![
        txn_on(TransactionType::Deposit, 10.0, 8, 1, 9),
        swap_on("USD", "NGN", 8, 1, 10),
        txn_on(TransactionType::Deposit, 10.0, 8, 2, 9),
    ];

    let breakdown = analytics::type_breakdown(&transactions);

    assert_eq!(
        breakdown,
        vec![(TransactionType::Deposit, 2), (TransactionType::Swap, 1)]
    );
}

#[test]
fn balances_are_rounded_to_cents() {
    let wallets = vec![
        Wallet {
            id: "1".to_string(),
            currency: "USD".to_string(),
            balance: 10.456,
            address: "0xAddr1".to_string(),
        },
        Wallet {
            id: "2".to_string(),
            currency: "NGN".to_string(),
            balance: 0.0,
            address: "0xAddr1".to_string(),
        },
    ];

    let balances = analytics::balance_by_currency(&wallets);

    assert_eq!(balances[0].currency, "USD");
    assert_eq!(balances[0].balance, 10.46);
    assert_eq!(balances[1].balance, 0.0);
}

#[test]
fn top_swap_pairs_rank_by_count_and_cap() {
    let transactions = vec![
        swap_on("USD", "NGN", 8, 1, 9),
        swap_on("USD", "EUR", 8, 1, 10),
        swap_on("USD", "NGN", 8, 2, 9),
        swap_on("GBP", "USD", 8, 2, 10),
        txn_on(TransactionType::Deposit, 10.0, 8, 2, 11),
    ];

    let pairs = analytics::top_swap_pairs(&transactions, 5);
    assert_eq!(pairs[0].pair, "USD/NGN");
    assert_eq!(pairs[0].count, 2);
    assert_eq!(pairs.len(), 3);

    let capped = analytics::top_swap_pairs(&transactions, 1);
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].pair, "USD/NGN");
}

#[test]
fn activity_summary_counts_each_type() {
    let transactions = vec![
        txn_on(TransactionType::Deposit, 10.0, 8, 1, 9),
        txn_on(TransactionType::Deposit, 10.0, 8, 1, 10),
        swap_on("USD", "NGN", 8, 1, 11),
        txn_on(TransactionType::Send, 5.0, 8, 1, 12),
    ];

    assert_eq!(
        analytics::activity_summary(&transactions),
        ActivitySummary {
            total: 4,
            deposits: 2,
            swaps: 1,
            sends: 1,
        }
    );
}

#[test]
fn recent_orders_newest_first_and_caps() {
    let transactions = vec![
        txn_on(TransactionType::Deposit, 1.0, 8, 1, 9),
        txn_on(TransactionType::Deposit, 2.0, 8, 3, 9),
        txn_on(TransactionType::Deposit, 3.0, 8, 2, 9),
    ];

    let recent = analytics::recent(&transactions, 2);

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].amount, 2.0);
    assert_eq!(recent[1].amount, 3.0);
}
