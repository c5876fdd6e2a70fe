//! Shared test fixtures: scripted rate source and store builders.
#![allow(dead_code)]

use async_trait::async_trait;
use crosspay_wallet_core::{MemoryStore, RateError, RateSource, WalletStore};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Rate source that pops one queued outcome per fetch. An empty queue
/// answers with a failure so a forgotten script shows up as one.
pub struct StubRates {
    responses: RefCell<VecDeque<Result<HashMap<String, f64>, RateError>>>,
}

impl StubRates {
    pub fn new() -> Rc<Self> {
        Rc::new(StubRates {
            responses: RefCell::new(VecDeque::new()),
        })
    }

    pub fn push_ok(&self, rates: &[(&str, f64)]) {
        let map = rates.iter().map(|(c, r)| (c.to_string(), *r)).collect();
        self.responses.borrow_mut().push_back(Ok(map));
    }

    pub fn push_err(&self) {
        self.responses
            .borrow_mut()
            .push_back(Err(RateError::Malformed("stub failure".to_string())));
    }
}

#[async_trait(?Send)]
impl RateSource for StubRates {
    async fn fetch_rates(&self, _base_currency: &str) -> Result<HashMap<String, f64>, RateError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RateError::Malformed("no scripted response".to_string())))
    }
}

/// Fresh store plus handles on its shared memory mirror and rate stub.
pub fn store_with_mirror() -> (WalletStore, MemoryStore, Rc<StubRates>) {
    let mirror = MemoryStore::default();
    let rates = StubRates::new();
    let store = WalletStore::new(Box::new(mirror.clone()), rates.clone());
    (store, mirror, rates)
}

pub fn fresh_store() -> WalletStore {
    store_with_mirror().0
}
