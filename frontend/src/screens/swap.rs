use crate::app::Route;
use crate::format;
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};
use crosspay_wallet_core::WalletStore;
use dioxus::prelude::*;

#[component]
pub fn SwapScreen(
    is_dark: bool,
    store: Signal<WalletStore>,
    on_navigate: EventHandler<Route>,
) -> Element {
    let mut from_currency = use_signal(|| "USD".to_string());
    let mut to_currency = use_signal(|| "NGN".to_string());
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let error_color = AppColors::error(is_dark);

    // Refresh the rate table whenever the source currency changes. The async
    // call runs outside any store borrow; the token keeps a slow, stale
    // response from clobbering a newer one.
    use_effect(move || {
        let base = from_currency();
        let mut store = store;
        spawn(async move {
            let (token, source) = {
                let mut s = store.write();
                (s.begin_rates_fetch(), s.rate_source())
            };
            let outcome = source.fetch_rates(&base).await;
            store.write().complete_rates_fetch(token, outcome);
        });
    });

    let snapshot = store.read();
    let wallets = snapshot.wallets().to_vec();
    let balance = snapshot
        .wallet(&from_currency())
        .map(|w| w.balance)
        .unwrap_or(0.0);
    let rate = snapshot
        .exchange_rates()
        .get(&to_currency())
        .copied()
        .unwrap_or(0.0);
    let loading = snapshot.is_loading_rates();
    drop(snapshot);

    let parsed = amount().parse::<f64>().unwrap_or(0.0);
    let projected = parsed * rate;

    let submit = move |_| {
        let swap_amount = amount().parse::<f64>().unwrap_or(0.0);
        if swap_amount <= 0.0 {
            error.set(Some("Please enter a valid amount".to_string()));
            return;
        }
        let available = store
            .read()
            .wallet(&from_currency())
            .map(|w| w.balance)
            .unwrap_or(0.0);
        if available < swap_amount {
            error.set(Some("Insufficient balance".to_string()));
            return;
        }
        if from_currency() == to_currency() {
            error.set(Some("Please select different currencies".to_string()));
            return;
        }
        let mut store = store;
        let outcome = store
            .write()
            .swap(&from_currency(), &to_currency(), swap_amount);
        match outcome {
            Ok(()) => {
                amount.set(String::new());
                on_navigate.call(Route::Dashboard);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 24px; max-width: 480px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Swap" }
                p { style: "color: {on_surface}; opacity: 0.6; margin-bottom: 24px;",
                    "Exchange between your available currencies at live rates"
                }
                GradientCard { is_dark,
                    form {
                        onsubmit: move |ev| { ev.prevent_default(); },
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "From" }
                            select {
                                value: "{from_currency()}",
                                oninput: move |ev| from_currency.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box;",
                                for wallet in wallets.iter() {
                                    option { value: "{wallet.currency}",
                                        "{wallet.currency} - Balance: {format::amount(wallet.balance)}"
                                    }
                                }
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
                                "Available: {format::amount(balance)}"
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "To" }
                            select {
                                value: "{to_currency()}",
                                oninput: move |ev| to_currency.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box;",
                                for wallet in wallets.iter() {
                                    option { value: "{wallet.currency}",
                                        "{wallet.currency} - Balance: {format::amount(wallet.balance)}"
                                    }
                                }
                            }
                        }

                        if loading {
                            p { style: "color: {on_surface}; opacity: 0.6; font-size: 0.875rem; margin-bottom: 12px;",
                                "Loading exchange rates..."
                            }
                        } else if rate > 0.0 {
                            div { style: "padding: 12px; border-radius: 8px; border: 1px solid {primary}; margin-bottom: 16px;",
                                p { style: "color: {on_surface}; font-size: 0.875rem; margin: 0 0 4px;",
                                    "Exchange Rate: 1 {from_currency()} = {rate:.4} {to_currency()}"
                                }
                                p { style: "color: {on_surface}; font-weight: 500; margin: 0;",
                                    "You will receive: {format::amount(projected)} {to_currency()}"
                                }
                            }
                        }

                        if let Some(ref e) = error() {
                            p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
                        }

                        div { style: "display: flex; gap: 12px;",
                            button {
                                r#type: "submit",
                                disabled: loading,
                                onclick: submit,
                                style: "padding: 10px 20px; border-radius: 8px; background: {primary}; color: #381E1E; font-weight: 600; border: none; cursor: pointer;",
                                "Swap"
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
