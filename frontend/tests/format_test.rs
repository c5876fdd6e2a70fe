//! Display helper tests (no Dioxus required for logic).

use chrono::{TimeZone, Utc};
use crosspay_frontend::format;
use crosspay_wallet_core::{Transaction, TransactionType};
use pretty_assertions::assert_eq;

fn txn(type_: TransactionType) -> Transaction {
    Transaction {
        id: "1754290800000".to_string(),
        type_,
        from_currency: Some("USD".to_string()),
        to_currency: None,
        amount: 10.0,
        converted_amount: None,
        to_address: None,
        time_stamp: Utc.with_ymd_and_hms(2026, 8, 6, 14, 5, 0).unwrap(),
    }
}

#[test]
fn describes_a_deposit() {
    let deposit = txn(TransactionType::Deposit);
    assert_eq!(format::transaction_description(&deposit), "Deposited 10.00 USD");
}

#[test]
fn describes_a_swap_with_the_converted_amount() {
    let swap = Transaction {
        to_currency: Some("NGN".to_string()),
        converted_amount: Some(15000.0),
        ..txn(TransactionType::Swap)
    };
    assert_eq!(
        format::transaction_description(&swap),
        "Swapped 10.00 USD to 15000.00 NGN"
    );
}

#[test]
fn describes_a_send_with_a_truncated_address() {
    let send = Transaction {
        to_address: Some("0xE536aF7A65B20d6d4CAfA25e05A7906D0".to_string()),
        ..txn(TransactionType::Send)
    };
    assert_eq!(
        format::transaction_description(&send),
        "Sent 10.00 USD to 0xE536aF7A..."
    );
}

#[test]
fn short_addresses_are_left_alone() {
    assert_eq!(format::short_address("0xAddr1"), "0xAddr1");
    assert_eq!(format::short_address("0123456789"), "0123456789");
    assert_eq!(format::short_address("0123456789a"), "0123456789...");
}

#[test]
fn signed_amounts_follow_the_type() {
    assert_eq!(format::signed_amount(&txn(TransactionType::Deposit)), "+10.00 USD");
    assert_eq!(format::signed_amount(&txn(TransactionType::Send)), "-10.00 USD");
    assert_eq!(format::signed_amount(&txn(TransactionType::Swap)), "10.00 USD");
}

#[test]
fn timestamps_render_short_and_unpadded() {
    let deposit = txn(TransactionType::Deposit);
    assert_eq!(format::timestamp(&deposit.time_stamp), "Aug 6, 2026 14:05");
}

#[test]
fn capitalize_uppercases_the_first_letter() {
    assert_eq!(format::capitalize("deposit"), "Deposit");
    assert_eq!(format::capitalize(""), "");
}
