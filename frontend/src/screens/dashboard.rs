use crate::app::Route;
use crate::format;
use crate::screens::AnalyticsPanel;
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};
use crosspay_wallet_core::{analytics, Transaction, TransactionType, WalletStore};
use dioxus::prelude::*;

#[component]
pub fn DashboardScreen(
    is_dark: bool,
    store: Signal<WalletStore>,
    on_navigate: EventHandler<Route>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);

    let snapshot = store.read();
    let wallets = snapshot.wallets().to_vec();
    let recent: Vec<Transaction> = analytics::recent(snapshot.transactions(), 10)
        .into_iter()
        .cloned()
        .collect();
    drop(snapshot);

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 24px; max-width: 900px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 24px;", "Dashboard" }

                h2 { style: "color: {on_surface}; font-size: 1.1rem; margin-bottom: 8px;", "Balance" }
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 4px; margin-bottom: 16px;",
                    for wallet in wallets.iter() {
                        GradientCard { is_dark,
                            h3 { style: "color: {on_surface}; margin: 0 0 8px; font-size: 1rem;", "{wallet.currency}" }
                            p { style: "color: {on_surface}; font-size: 1.25rem; font-weight: bold; margin: 0;",
                                "{format::amount(wallet.balance)}"
                            }
                        }
                    }
                }

                div { style: "display: flex; gap: 12px; margin-bottom: 24px;",
                    button {
                        onclick: move |_| on_navigate.call(Route::Deposit),
                        style: "padding: 10px 20px; border-radius: 8px; background: {primary}; color: #381E1E; font-weight: 600; border: none; cursor: pointer;",
                        "Deposit"
                    }
                    button {
                        onclick: move |_| on_navigate.call(Route::Swap),
                        style: "padding: 10px 20px; border-radius: 8px; background: transparent; color: {on_surface}; border: 1px solid #938F99; cursor: pointer;",
                        "Swap"
                    }
                    button {
                        onclick: move |_| on_navigate.call(Route::Send),
                        style: "padding: 10px 20px; border-radius: 8px; background: transparent; color: {on_surface}; border: 1px solid #938F99; cursor: pointer;",
                        "Send"
                    }
                }

                if recent.is_empty() {
                    GradientCard { is_dark,
                        p { style: "color: {on_surface}; opacity: 0.6; text-align: center;",
                            "No transactions yet. Start by depositing funds!"
                        }
                    }
                } else {
                    h2 { style: "color: {on_surface}; font-size: 1.1rem; margin-bottom: 8px;", "Recent Transactions" }
                    for txn in recent.iter() {
                        GradientCard { is_dark,
                            div { style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                                span { style: "color: {on_surface}; font-weight: 600; min-width: 70px;",
                                    "{format::capitalize(txn.type_.as_str())}"
                                }
                                span { style: "color: {on_surface}; flex: 1;",
                                    "{format::transaction_description(txn)}"
                                }
                                span { style: "color: {on_surface}; opacity: 0.6; font-size: 0.85rem;",
                                    "{format::timestamp(&txn.time_stamp)}"
                                }
                                span {
                                    style: "color: {amount_color(txn, is_dark)}; font-weight: 500;",
                                    "{format::signed_amount(txn)}"
                                }
                            }
                        }
                    }
                }

                AnalyticsPanel { is_dark, store }
            }
        }
    }
}

fn amount_color(txn: &Transaction, is_dark: bool) -> &'static str {
    match txn.type_ {
        TransactionType::Deposit => AppColors::success(is_dark),
        TransactionType::Send => AppColors::error(is_dark),
        TransactionType::Swap => AppColors::on_surface(is_dark),
    }
}
