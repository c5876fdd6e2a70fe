//! The wallet ledger: in-memory state, mutating operations, offline mirror.
//!
//! The store is a plain constructible object with injected collaborators
//! (persistence and rate lookup), so tests build isolated instances. It owns
//! the wallet and transaction lists; every mutation replaces state, mirrors
//! it synchronously through the [`OfflineStore`], and notifies subscribers.
//!
//! Validation contract: the store trusts its caller. Amount sign, balance
//! sufficiency, and recipient address shape are screen-level pre-checks; a
//! mutation against an unknown currency changes no balance but still appends
//! its ledger entry. The one in-store failure is a swap against a currency
//! the rate table has no entry for.

use crate::error::{LedgerError, RateError};
use crate::models::{Transaction, Wallet};
use crate::rates::RateSource;
use crate::storage::{OfflineStore, TRANSACTIONS_KEY, WALLETS_KEY};
use std::collections::HashMap;
use std::rc::Rc;

/// Currencies seeded by [`WalletStore::create_wallet_set`], in display order.
pub const WALLET_CURRENCIES: [&str; 4] = ["USD", "NGN", "EUR", "GBP"];

const WALLET_ADDRESS: &str = "0xE536aF7A65B20d6d4CAfA25e05A7906D0";

type Listener = Box<dyn Fn()>;

pub struct WalletStore {
    wallets: Vec<Wallet>,
    transactions: Vec<Transaction>,
    exchange_rates: HashMap<String, f64>,
    loading_rates: bool,
    // Last issued rate-fetch token; only a response carrying it may apply.
    rates_token: u64,
    storage: Box<dyn OfflineStore>,
    rates: Rc<dyn RateSource>,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

impl WalletStore {
    /// Builds a store over the given collaborators and restores any state
    /// the offline mirror holds (missing keys leave the lists empty).
    pub fn new(storage: Box<dyn OfflineStore>, rates: Rc<dyn RateSource>) -> Self {
        let mut store = WalletStore {
            wallets: Vec::new(),
            transactions: Vec::new(),
            exchange_rates: HashMap::new(),
            loading_rates: false,
            rates_token: 0,
            storage,
            rates,
            listeners: Vec::new(),
            next_listener: 0,
        };
        store.load_offline_data();
        store
    }

    // Reads

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn wallet(&self, currency: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.currency == currency)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn exchange_rates(&self) -> &HashMap<String, f64> {
        &self.exchange_rates
    }

    pub fn is_loading_rates(&self) -> bool {
        self.loading_rates
    }

    /// Handle on the injected rate source, for callers that drive the
    /// begin/complete fetch cycle themselves.
    pub fn rate_source(&self) -> Rc<dyn RateSource> {
        Rc::clone(&self.rates)
    }

    // Mutations

    /// Replaces the wallet list with the fixed four-currency set, all at
    /// zero balance. Destructive: any existing wallets are discarded. The
    /// transaction log is untouched.
    pub fn create_wallet_set(&mut self) {
        self.wallets = WALLET_CURRENCIES
            .iter()
            .enumerate()
            .map(|(i, currency)| Wallet {
                id: (i + 1).to_string(),
                currency: currency.to_string(),
                balance: 0.0,
                address: WALLET_ADDRESS.to_string(),
            })
            .collect();
        self.persist();
        self.notify();
    }

    /// Credits the wallet matching `currency` and appends a deposit entry.
    pub fn deposit(&mut self, currency: &str, amount: f64) {
        for wallet in &mut self.wallets {
            if wallet.currency == currency {
                wallet.balance += amount;
            }
        }
        self.transactions.push(Transaction::deposit(currency, amount));
        self.persist();
        self.notify();
    }

    /// Converts `amount` of `from_currency` into `to_currency` at the rate
    /// the current table holds for `to_currency`. The table is scoped to
    /// whatever base was last fetched; keeping it aligned with
    /// `from_currency` is the caller's job. Fails before any mutation when
    /// the rate is missing.
    pub fn swap(
        &mut self,
        from_currency: &str,
        to_currency: &str,
        amount: f64,
    ) -> Result<(), LedgerError> {
        let rate = *self
            .exchange_rates
            .get(to_currency)
            .ok_or_else(|| LedgerError::RateUnavailable(to_currency.to_string()))?;
        let converted_amount = round3(amount * rate);

        // Both sides computed off the pre-mutation list in one pass.
        for wallet in &mut self.wallets {
            if wallet.currency == from_currency {
                wallet.balance -= amount;
            } else if wallet.currency == to_currency {
                wallet.balance += converted_amount;
            }
        }
        self.transactions.push(Transaction::swap(
            from_currency,
            to_currency,
            amount,
            converted_amount,
        ));
        self.persist();
        self.notify();
        Ok(())
    }

    /// Debits the wallet matching `from_currency` and appends a send entry
    /// with the recipient address.
    pub fn send(&mut self, from_currency: &str, to_address: &str, amount: f64) {
        for wallet in &mut self.wallets {
            if wallet.currency == from_currency {
                wallet.balance -= amount;
            }
        }
        self.transactions
            .push(Transaction::send(from_currency, to_address, amount));
        self.persist();
        self.notify();
    }

    // Rate fetch. Decomposed so a UI can run the async call outside any
    // borrow of the store; `fetch_rates` wraps the full cycle.

    /// Raises the loading flag and issues the token for a new fetch.
    pub fn begin_rates_fetch(&mut self) -> u64 {
        self.loading_rates = true;
        self.rates_token += 1;
        self.notify();
        self.rates_token
    }

    /// Applies a fetch outcome. A stale token (a newer fetch was issued
    /// since) is dropped outright, leaving the flag to the newer request.
    /// The latest token clears the flag and, on success, replaces the whole
    /// rate table; failure is logged and the table keeps its last value.
    pub fn complete_rates_fetch(
        &mut self,
        token: u64,
        outcome: Result<HashMap<String, f64>, RateError>,
    ) {
        if token != self.rates_token {
            log::debug!("dropping stale rate response (token {})", token);
            return;
        }
        self.loading_rates = false;
        match outcome {
            Ok(rates) => self.exchange_rates = rates,
            Err(e) => log::error!("exchange rate fetch failed: {}", e),
        }
        self.notify();
    }

    /// Full fetch cycle against the injected source. Never fails; a fetch
    /// error is swallowed after the loading flag is cleared.
    pub async fn fetch_rates(&mut self, base_currency: &str) {
        let token = self.begin_rates_fetch();
        let source = Rc::clone(&self.rates);
        let outcome = source.fetch_rates(base_currency).await;
        self.complete_rates_fetch(token, outcome);
    }

    // Offline mirror

    /// Explicit mirror of both lists, independent of the per-mutation
    /// writes.
    pub fn save_offline_data(&self) {
        self.persist();
    }

    /// Restores whichever lists the mirror holds; a missing or unreadable
    /// blob leaves the corresponding list as-is.
    pub fn load_offline_data(&mut self) {
        if let Some(json) = self.storage.get(WALLETS_KEY) {
            match serde_json::from_str(&json) {
                Ok(wallets) => self.wallets = wallets,
                Err(e) => log::warn!("offline wallets blob unreadable: {}", e),
            }
        }
        if let Some(json) = self.storage.get(TRANSACTIONS_KEY) {
            match serde_json::from_str(&json) {
                Ok(transactions) => self.transactions = transactions,
                Err(e) => log::warn!("offline transactions blob unreadable: {}", e),
            }
        }
        self.notify();
    }

    // Subscriptions

    /// Registers a change callback; returns the handle for `unsubscribe`.
    pub fn subscribe(&mut self, callback: impl Fn() + 'static) -> u64 {
        self.next_listener += 1;
        self.listeners.push((self.next_listener, Box::new(callback)));
        self.next_listener
    }

    pub fn unsubscribe(&mut self, handle: u64) {
        self.listeners.retain(|(id, _)| *id != handle);
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener();
        }
    }

    fn persist(&self) {
        self.write_blob(WALLETS_KEY, &self.wallets);
        self.write_blob(TRANSACTIONS_KEY, &self.transactions);
    }

    // Mirror failures are logged and otherwise ignored; the in-memory
    // mutation stands.
    fn write_blob<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => {
                if let Err(e) = self.storage.set(key, &json) {
                    log::warn!("offline mirror write failed for {}: {}", key, e);
                }
            }
            Err(e) => log::warn!("offline mirror encode failed for {}: {}", key, e),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
