use dioxus::prelude::*;
use std::rc::Rc;

use crate::screens::{DashboardScreen, DepositScreen, OnboardingScreen, SendScreen, SwapScreen};
use crosspay_wallet_core::{ExchangeRateApi, MemoryStore, OfflineStore, WalletStore};

#[derive(Clone, Copy, PartialEq)]
pub enum Route {
    Onboarding,
    Dashboard,
    Deposit,
    Send,
    Swap,
}

#[component]
pub fn App() -> Element {
    let mut route = use_signal(|| Route::Onboarding);
    let is_dark = use_signal(|| true);
    let store = use_signal(build_store);
    let mut email = use_signal(|| Option::<String>::None);

    let current_screen = match route() {
        Route::Onboarding => rsx! {
            OnboardingScreen {
                is_dark: is_dark(),
                store,
                on_created: move |address: String| {
                    email.set(Some(address));
                    route.set(Route::Dashboard);
                },
            }
        },
        Route::Dashboard => rsx! {
            DashboardScreen {
                is_dark: is_dark(),
                store,
                on_navigate: move |r| route.set(r),
            }
        },
        Route::Deposit => rsx! {
            DepositScreen {
                is_dark: is_dark(),
                store,
                on_navigate: move |r| route.set(r),
            }
        },
        Route::Send => rsx! {
            SendScreen {
                is_dark: is_dark(),
                store,
                on_navigate: move |r| route.set(r),
            }
        },
        Route::Swap => rsx! {
            SwapScreen {
                is_dark: is_dark(),
                store,
                on_navigate: move |r| route.set(r),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {current_screen}
        }
    }
}

fn build_store() -> WalletStore {
    let rates = ExchangeRateApi::from_env().unwrap_or_else(|| ExchangeRateApi::new(""));
    WalletStore::new(offline_store(), Rc::new(rates))
}

#[cfg(not(target_arch = "wasm32"))]
fn offline_store() -> Box<dyn OfflineStore> {
    use crosspay_wallet_core::FileStore;
    FileStore::default_dir()
        .and_then(|dir| FileStore::create(dir).ok())
        .map(|s| Box::new(s) as Box<dyn OfflineStore>)
        .unwrap_or_else(|| Box::new(MemoryStore::default()))
}

// Browser builds keep the mirror in memory for the session.
#[cfg(target_arch = "wasm32")]
fn offline_store() -> Box<dyn OfflineStore> {
    Box::new(MemoryStore::default())
}
