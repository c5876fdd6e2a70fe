use crate::app::Route;
use crate::format;
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};
use crosspay_wallet_core::WalletStore;
use dioxus::prelude::*;

/// Demo funding amount credited to the USD wallet per deposit.
const DEMO_DEPOSIT_USD: f64 = 10.0;

#[component]
pub fn DepositScreen(
    is_dark: bool,
    store: Signal<WalletStore>,
    on_navigate: EventHandler<Route>,
) -> Element {
    let mut selected = use_signal(|| "USD".to_string());
    let mut notice = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let success = AppColors::success(is_dark);

    let snapshot = store.read();
    let wallets = snapshot.wallets().to_vec();
    let balance = snapshot
        .wallet(&selected())
        .map(|w| w.balance)
        .unwrap_or(0.0);
    drop(snapshot);

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 24px; max-width: 640px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Deposit" }
                p { style: "color: {on_surface}; opacity: 0.6; margin-bottom: 24px;",
                    "For testing purposes you can only deposit stable coin via USD alone"
                }

                div { style: "display: flex; gap: 4px; background: {primary}; padding: 8px; border-radius: 8px; margin-bottom: 16px;",
                    for wallet in wallets.iter() {
                        button {
                            onclick: {
                                let currency = wallet.currency.clone();
                                move |_| selected.set(currency.clone())
                            },
                            style: if wallet.currency == selected() {
                                "flex: 1; padding: 8px; border-radius: 6px; border: none; cursor: pointer; background: rgba(255,255,255,0.5); color: #1C1B1F; font-weight: 600;"
                            } else {
                                "flex: 1; padding: 8px; border-radius: 6px; border: none; cursor: pointer; background: transparent; color: #1C1B1F;"
                            },
                            "{wallet.currency}"
                        }
                    }
                }

                div { style: "text-align: center; margin-bottom: 16px;",
                    p { style: "color: {on_surface}; opacity: 0.75; margin: 0 0 4px;", "Available balance" }
                    p { style: "color: {on_surface}; font-size: 1.25rem; font-weight: bold; margin: 0;",
                        "{selected()} {format::amount(balance)}"
                    }
                }

                if let Some(ref msg) = notice() {
                    p { style: "color: {success}; text-align: center; margin-bottom: 12px;", "{msg}" }
                }

                if selected() == "USD" {
                    GradientCard { is_dark,
                        h3 { style: "color: {on_surface}; margin: 0 0 8px;", "Add via Stable Coin" }
                        p { style: "color: {on_surface}; opacity: 0.8; font-size: 0.9rem; margin-bottom: 12px;",
                            "Fund your account in USDT; funds arrive within 5 - 10 mins"
                        }
                        p { style: "color: {on_surface}; font-size: 0.875rem; margin: 4px 0;", "Network: BEP 20" }
                        p { style: "color: {on_surface}; font-size: 0.875rem; margin: 4px 0;",
                            "USDT Address: 0xE536aF7A65B20d6d4CAfA25e05A7906D09E2724b"
                        }
                        p { style: "color: {on_surface}; opacity: 0.8; font-size: 0.875rem; margin: 4px 0;",
                            "A 0.8% instant funding fee applies (minimum $2, maximum $10)"
                        }
                        p { style: "color: {on_surface}; opacity: 0.8; font-size: 0.875rem; margin: 4px 0 12px;",
                            "Demo: hitting Deposit adds $10 to your US account"
                        }
                        button {
                            onclick: move |_| {
                                let mut store = store;
                                store.write().deposit("USD", DEMO_DEPOSIT_USD);
                                notice.set(Some(format!("Deposited {} USD", format::amount(DEMO_DEPOSIT_USD))));
                            },
                            style: "padding: 10px 20px; border-radius: 8px; background: {primary}; color: #381E1E; font-weight: 600; border: none; cursor: pointer;",
                            "Deposit"
                        }
                    }
                }

                div { style: "display: flex; gap: 12px; margin-top: 16px;",
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
                    button {
                        onclick: move |_| on_navigate.call(Route::Dashboard),
                        style: "padding: 10px 20px; border-radius: 8px; background: transparent; color: {on_surface}; border: 1px solid #938F99; cursor: pointer;",
                        "Back to Dashboard"
                    }
                }
            }
        }
    }
}
