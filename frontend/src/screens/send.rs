use crate::app::Route;
use crate::format;
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};
use crosspay_wallet_core::WalletStore;
use dioxus::prelude::*;

#[component]
pub fn SendScreen(
    is_dark: bool,
    store: Signal<WalletStore>,
    on_navigate: EventHandler<Route>,
) -> Element {
    let mut currency = use_signal(|| "USD".to_string());
    let mut recipient = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let error_color = AppColors::error(is_dark);

    let snapshot = store.read();
    let wallets = snapshot.wallets().to_vec();
    let balance = snapshot
        .wallet(&currency())
        .map(|w| w.balance)
        .unwrap_or(0.0);
    drop(snapshot);

    let parsed = amount().parse::<f64>().unwrap_or(0.0);

    let submit = move |_| {
        let send_amount = amount().parse::<f64>().unwrap_or(0.0);
        if send_amount <= 0.0 {
            error.set(Some("Please enter a valid amount".to_string()));
            return;
        }
        let available = store
            .read()
            .wallet(&currency())
            .map(|w| w.balance)
            .unwrap_or(0.0);
        if available < send_amount {
            error.set(Some("Insufficient balance".to_string()));
            return;
        }
        if recipient().chars().count() < 10 {
            error.set(Some("Please enter a valid recipient address".to_string()));
            return;
        }
        let mut store = store;
        store.write().send(&currency(), &recipient(), send_amount);
        amount.set(String::new());
        recipient.set(String::new());
        on_navigate.call(Route::Dashboard);
    };

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 24px; max-width: 480px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Send" }
                p { style: "color: {on_surface}; opacity: 0.6; margin-bottom: 24px;",
                    "Send funds cross-border to another wallet"
                }
                GradientCard { is_dark,
                    form {
                        onsubmit: move |ev| { ev.prevent_default(); },
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Currency" }
                            select {
                                value: "{currency()}",
                                oninput: move |ev| currency.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box;",
                                for wallet in wallets.iter() {
                                    option { value: "{wallet.currency}",
                                        "{wallet.currency} - Balance: {format::amount(wallet.balance)}"
                                    }
                                }
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Recipient Address" }
                            input {
                                r#type: "text",
                                placeholder: "0x...",
                                value: "{recipient()}",
                                oninput: move |ev| recipient.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box;",
                            }
                            p { style: "color: {on_surface}; opacity: 0.6; font-size: 0.8rem; margin: 4px 0 0;",
                                "Enter the wallet address of the recipient"
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Amount" }
                            input {
                                r#type: "number",
                                step: "0.01",
                                placeholder: "Enter amount",
                                value: "{amount()}",
                                oninput: move |ev| amount.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box;",
                            }
                            p { style: "color: {on_surface}; opacity: 0.6; font-size: 0.8rem; margin: 4px 0 0;",
                                "Available: {format::amount(balance)} {currency()}"
                            }
                        }

                        if parsed > 0.0 {
                            div { style: "padding: 12px; border-radius: 8px; border: 1px solid {primary}; margin-bottom: 16px;",
                                p { style: "color: {on_surface}; opacity: 0.6; font-size: 0.8rem; margin: 0 0 4px;", "Transaction Summary" }
                                p { style: "color: {on_surface}; font-weight: 500; margin: 0 0 4px;",
                                    "Sending: {format::amount(parsed)} {currency()}"
                                }
                                p { style: "color: {on_surface}; font-size: 0.875rem; margin: 0;",
                                    "To: {recipient()}"
                                }
                            }
                        }

                        if let Some(ref e) = error() {
                            p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
                        }

                        div { style: "display: flex; gap: 12px;",
                            button {
                                r#type: "submit",
                                onclick: submit,
                                style: "padding: 10px 20px; border-radius: 8px; background: {primary}; color: #381E1E; font-weight: 600; border: none; cursor: pointer;",
                                "Send"
                            }
                            button {
                                onclick: move |_| on_navigate.call(Route::Deposit),
                                style: "padding: 10px 20px; border-radius: 8px; background: transparent; color: {on_surface}; border: 1px solid #938F99; cursor: pointer;",
                                "Back to Deposit"
                            }
                        }
                    }
                }
            }
        }
    }
}
