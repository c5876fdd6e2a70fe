//! Display helpers shared by the screens. Logic only, no Dioxus.

use chrono::{DateTime, Utc};
use crosspay_wallet_core::{Transaction, TransactionType};

/// Two-decimal amount, the app-wide display convention.
pub fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// "Aug 6, 2026 14:05".
pub fn timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

/// One-line history description, e.g. "Swapped 10.00 USD to 15000.00 NGN".
pub fn transaction_description(txn: &Transaction) -> String {
    match txn.type_ {
        TransactionType::Deposit => format!(
            "Deposited {} {}",
            amount(txn.amount),
            txn.from_currency.as_deref().unwrap_or("?")
        ),
        TransactionType::Swap => format!(
            "Swapped {} {} to {} {}",
            amount(txn.amount),
            txn.from_currency.as_deref().unwrap_or("?"),
            amount(txn.converted_amount.unwrap_or(0.0)),
            txn.to_currency.as_deref().unwrap_or("?")
        ),
        TransactionType::Send => format!(
            "Sent {} {} to {}",
            amount(txn.amount),
            txn.from_currency.as_deref().unwrap_or("?"),
            short_address(txn.to_address.as_deref().unwrap_or(""))
        ),
    }
}

/// Signed history amount: deposits credit, sends debit, swaps neither.
pub fn signed_amount(txn: &Transaction) -> String {
    let sign = match txn.type_ {
        TransactionType::Deposit => "+",
        TransactionType::Send => "-",
        TransactionType::Swap => "",
    };
    format!(
        "{}{} {}",
        sign,
        amount(txn.amount),
        txn.from_currency.as_deref().unwrap_or("")
    )
}

/// First ten characters of an address, elided when longer.
pub fn short_address(address: &str) -> String {
    if address.chars().count() <= 10 {
        return address.to_string();
    }
    let prefix: String = address.chars().take(10).collect();
    format!("{}...", prefix)
}

/// Uppercase first letter, for the history type column.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
