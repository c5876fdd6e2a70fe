use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};
use crosspay_wallet_core::WalletStore;
use dioxus::prelude::*;

#[component]
pub fn OnboardingScreen(
    is_dark: bool,
    store: Signal<WalletStore>,
    on_created: EventHandler<String>,
) -> Element {
    let mut email = use_signal(String::new);

    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    rsx! {
        GradientBackground { is_dark,
            div { style: "min-height: 100vh; display: grid; place-items: center; padding: 24px;",
                div { style: "max-width: 400px; width: 100%; text-align: center;",
                    h1 { style: "font-size: 1.75rem; font-weight: bold; color: {on_surface}; margin-bottom: 24px;",
                        "Create Your Wallet"
                    }
                    GradientCard { is_dark,
                        form {
                            onsubmit: move |ev| { ev.prevent_default(); },
                            input {
                                r#type: "email",
                                placeholder: "Email",
                                value: "{email()}",
                                oninput: move |ev| email.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #938F99; background: transparent; color: {on_surface}; box-sizing: border-box; margin-bottom: 16px;",
                            }
                            button {
                                r#type: "submit",
                                onclick: move |_| {
                                    let mut store = store;
                                    store.write().create_wallet_set();
                                    on_created.call(email());
                                },
                                style: "width: 100%; padding: 12px; border-radius: 8px; background: {primary}; color: #381E1E; font-weight: 600; border: none; cursor: pointer;",
                                "Create Wallet"
                            }
                        }
                    }
                }
            }
        }
    }
}
