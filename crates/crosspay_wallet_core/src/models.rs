//! Data models for wallets and ledger transactions.
//! JSON field names match the persisted blob format (camelCase, `type` tag).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-currency balance record with a display address. Wallets are only ever
/// created as a batch by the store and never deleted; balance is the single
/// mutable field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    pub currency: String,
    pub balance: f64,
    pub address: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Swap,
    Send,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Swap => "swap",
            TransactionType::Send => "send",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One append-only ledger entry. Optional fields are present per type:
/// swaps carry both currencies and the converted amount, sends carry the
/// recipient address, deposits only the source currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    pub time_stamp: DateTime<Utc>,
}

impl Transaction {
    pub fn deposit(currency: &str, amount: f64) -> Self {
        Transaction {
            from_currency: Some(currency.to_string()),
            amount,
            ..Transaction::blank(TransactionType::Deposit)
        }
    }

    pub fn swap(from: &str, to: &str, amount: f64, converted_amount: f64) -> Self {
        Transaction {
            from_currency: Some(from.to_string()),
            to_currency: Some(to.to_string()),
            amount,
            converted_amount: Some(converted_amount),
            ..Transaction::blank(TransactionType::Swap)
        }
    }

    pub fn send(from: &str, to_address: &str, amount: f64) -> Self {
        Transaction {
            from_currency: Some(from.to_string()),
            amount,
            to_address: Some(to_address.to_string()),
            ..Transaction::blank(TransactionType::Send)
        }
    }

    // Id is derived from the creation time, like the rest of the record.
    fn blank(type_: TransactionType) -> Self {
        let now = Utc::now();
        Transaction {
            id: now.timestamp_millis().to_string(),
            type_,
            from_currency: None,
            to_currency: None,
            amount: 0.0,
            converted_amount: None,
            to_address: None,
            time_stamp: now,
        }
    }
}
