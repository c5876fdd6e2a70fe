//! Pure aggregations over the ledger slices, feeding the dashboard panel.
//! No side effects, easy to test.

use crate::models::{Transaction, TransactionType, Wallet};
use chrono::{Days, NaiveDate};

#[derive(Clone, Debug, PartialEq)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub volume: f64,
}

/// Total transaction volume per calendar day over the trailing `days`
/// window ending at `today`, oldest first, zero-filled.
pub fn volume_by_day(
    transactions: &[Transaction],
    days: usize,
    today: NaiveDate,
) -> Vec<DailyVolume> {
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
        .map(|date| {
            let volume: f64 = transactions
                .iter()
                .filter(|t| t.time_stamp.date_naive() == date)
                .map(|t| t.amount)
                .sum();
            DailyVolume {
                date,
                volume: round2(volume),
            }
        })
        .collect()
}

/// Count per transaction type, in order of first appearance.
pub fn type_breakdown(transactions: &[Transaction]) -> Vec<(TransactionType, usize)> {
    let mut counts: Vec<(TransactionType, usize)> = Vec::new();
    for t in transactions {
        match counts.iter_mut().find(|(type_, _)| *type_ == t.type_) {
            Some((_, n)) => *n += 1,
            None => counts.push((t.type_, 1)),
        }
    }
    counts
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyBalance {
    pub currency: String,
    pub balance: f64,
}

pub fn balance_by_currency(wallets: &[Wallet]) -> Vec<CurrencyBalance> {
    wallets
        .iter()
        .map(|w| CurrencyBalance {
            currency: w.currency.clone(),
            balance: round2(w.balance),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwapPair {
    pub pair: String,
    pub count: usize,
}

/// Most-traded "FROM/TO" pairs, busiest first, capped at `limit`.
pub fn top_swap_pairs(transactions: &[Transaction], limit: usize) -> Vec<SwapPair> {
    let mut pairs: Vec<SwapPair> = Vec::new();
    for t in transactions
        .iter()
        .filter(|t| t.type_ == TransactionType::Swap)
    {
        if let (Some(from), Some(to)) = (&t.from_currency, &t.to_currency) {
            let key = format!("{}/{}", from, to);
            match pairs.iter_mut().find(|p| p.pair == key) {
                Some(p) => p.count += 1,
                None => pairs.push(SwapPair { pair: key, count: 1 }),
            }
        }
    }
    pairs.sort_by(|a, b| b.count.cmp(&a.count));
    pairs.truncate(limit);
    pairs
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivitySummary {
    pub total: usize,
    pub deposits: usize,
    pub swaps: usize,
    pub sends: usize,
}

pub fn activity_summary(transactions: &[Transaction]) -> ActivitySummary {
    let mut summary = ActivitySummary {
        total: transactions.len(),
        ..Default::default()
    };
    for t in transactions {
        match t.type_ {
            TransactionType::Deposit => summary.deposits += 1,
            TransactionType::Swap => summary.swaps += 1,
            TransactionType::Send => summary.sends += 1,
        }
    }
    summary
}

/// Newest-first view, capped at `limit`, for the dashboard history table.
pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut list: Vec<&Transaction> = transactions.iter().collect();
    list.sort_by(|a, b| b.time_stamp.cmp(&a.time_stamp));
    list.truncate(limit);
    list
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
