//! Crosspay wallet core: ledger store, offline persistence, rate lookup,
//! analytics aggregations. UI-free; the frontend crate consumes this.

pub mod analytics;
pub mod error;
pub mod ledger;
pub mod models;
pub mod rates;
pub mod storage;

pub use error::{LedgerError, RateError, StorageError};
pub use ledger::WalletStore;
pub use models::{Transaction, TransactionType, Wallet};
pub use rates::{ExchangeRateApi, RateSource};
pub use storage::{MemoryStore, OfflineStore};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
