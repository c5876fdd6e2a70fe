use crate::format;
use crate::theme::{AppColors, CHART_COLORS};
use crate::widgets::{GradientCard, StatCard};
use chrono::Utc;
use crosspay_wallet_core::{analytics, WalletStore};
use dioxus::prelude::*;

// One horizontal bar: label, pre-formatted fill percent, display value.
struct BarRow {
    label: String,
    percent: String,
    value: String,
}

struct CountRow {
    color: &'static str,
    label: String,
    count: usize,
}

fn bar_rows(entries: Vec<(String, f64)>) -> Vec<BarRow> {
    let max = entries
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    entries
        .into_iter()
        .map(|(label, value)| BarRow {
            label,
            percent: format!("{:.0}", value / max * 100.0),
            value: format::amount(value),
        })
        .collect()
}

/// Chart-free rendering of the transaction-history aggregates: plain bars
/// and stat cards.
#[component]
pub fn AnalyticsPanel(is_dark: bool, store: Signal<WalletStore>) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let volume_color = CHART_COLORS[0];
    let balance_color = CHART_COLORS[1];
    let pair_color = CHART_COLORS[2];

    let snapshot = store.read();
    let transactions = snapshot.transactions().to_vec();
    let wallets = snapshot.wallets().to_vec();
    drop(snapshot);

    if transactions.is_empty() {
        return rsx! {
            GradientCard { is_dark,
                p { style: "color: {on_surface}; opacity: 0.6; text-align: center;",
                    "No transaction data available yet. Start trading to see analytics!"
                }
            }
        };
    }

    let volume = bar_rows(
        analytics::volume_by_day(&transactions, 7, Utc::now().date_naive())
            .into_iter()
            .map(|d| (d.date.format("%b %-d").to_string(), d.volume))
            .collect(),
    );
    let balances = bar_rows(
        analytics::balance_by_currency(&wallets)
            .into_iter()
            .map(|b| (b.currency, b.balance))
            .collect(),
    );
    let breakdown: Vec<CountRow> = analytics::type_breakdown(&transactions)
        .into_iter()
        .enumerate()
        .map(|(i, (type_, count))| CountRow {
            color: CHART_COLORS[i % CHART_COLORS.len()],
            label: format::capitalize(type_.as_str()),
            count,
        })
        .collect();
    let pairs = analytics::top_swap_pairs(&transactions, 5);
    let summary = analytics::activity_summary(&transactions);

    rsx! {
        div { style: "margin-top: 24px;",
            h2 { style: "color: {on_surface}; font-size: 1.25rem; margin-bottom: 8px;", "FX Analytics" }

            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 4px;",
                GradientCard { is_dark,
                    h3 { style: "color: {on_surface}; margin: 0 0 12px; font-size: 1rem;", "Transaction Volume (Last 7 Days)" }
                    for row in volume.iter() {
                        div { style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                            span { style: "color: {on_surface}; opacity: 0.6; font-size: 0.8rem; min-width: 52px;", "{row.label}" }
                            div { style: "flex: 1; background: rgba(147,143,153,0.2); border-radius: 4px;",
                                div { style: "width: {row.percent}%; height: 8px; border-radius: 4px; background: {volume_color};" }
                            }
                            span { style: "color: {on_surface}; font-size: 0.8rem; min-width: 56px; text-align: right;", "{row.value}" }
                        }
                    }
                }

                GradientCard { is_dark,
                    h3 { style: "color: {on_surface}; margin: 0 0 12px; font-size: 1rem;", "Transaction Breakdown" }
                    for row in breakdown.iter() {
                        div { style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                            span { style: "width: 10px; height: 10px; border-radius: 50%; background: {row.color};" }
                            span { style: "color: {on_surface}; flex: 1;", "{row.label}" }
                            span { style: "color: {on_surface}; font-weight: 500;", "{row.count}" }
                        }
                    }
                }

                GradientCard { is_dark,
                    h3 { style: "color: {on_surface}; margin: 0 0 12px; font-size: 1rem;", "Wallet Balances by Currency" }
                    for row in balances.iter() {
                        div { style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                            span { style: "color: {on_surface}; opacity: 0.6; font-size: 0.8rem; min-width: 52px;", "{row.label}" }
                            div { style: "flex: 1; background: rgba(147,143,153,0.2); border-radius: 4px;",
                                div { style: "width: {row.percent}%; height: 8px; border-radius: 4px; background: {balance_color};" }
                            }
                            span { style: "color: {on_surface}; font-size: 0.8rem; min-width: 56px; text-align: right;", "{row.value}" }
                        }
                    }
                }

                if !pairs.is_empty() {
                    GradientCard { is_dark,
                        h3 { style: "color: {on_surface}; margin: 0 0 12px; font-size: 1rem;", "Most Active Swap Pairs" }
                        for pair in pairs.iter() {
                            div { style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                                span { style: "color: {on_surface}; flex: 1;", "{pair.pair}" }
                                span { style: "color: {pair_color}; font-weight: 500;", "{pair.count}" }
                            }
                        }
                    }
                }
            }

            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 4px; margin-top: 4px;",
                StatCard { is_dark, label: "Total Transactions", value: "{summary.total}" }
                StatCard { is_dark, label: "Total Deposits", value: "{summary.deposits}" }
                StatCard { is_dark, label: "Total Swaps", value: "{summary.swaps}" }
                StatCard { is_dark, label: "Total Sends", value: "{summary.sends}" }
            }
        }
    }
}
