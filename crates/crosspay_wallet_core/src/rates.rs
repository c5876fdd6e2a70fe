//! Exchange-rate lookup: one GET per call, no caching, no retry.

use crate::error::RateError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Advisory currency-rate lookup. Returns the full code → rate mapping for
/// the given base currency.
#[async_trait(?Send)]
pub trait RateSource {
    async fn fetch_rates(&self, base_currency: &str) -> Result<HashMap<String, f64>, RateError>;
}

const ENDPOINT: &str = "https://v6.exchangerate-api.com/v6";

/// Environment variable holding the exchangerate-api access key.
pub const API_KEY_VAR: &str = "CROSSPAY_RATES_API_KEY";

/// exchangerate-api.com v6 client. The success payload is expected to carry
/// a `conversion_rates` object of numeric rates.
pub struct ExchangeRateApi {
    client: reqwest::Client,
    api_key: String,
}

impl ExchangeRateApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        ExchangeRateApi {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Reads the access key from [`API_KEY_VAR`].
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_VAR).ok().map(Self::new)
    }
}

#[async_trait(?Send)]
impl RateSource for ExchangeRateApi {
    async fn fetch_rates(&self, base_currency: &str) -> Result<HashMap<String, f64>, RateError> {
        let url = format!("{}/{}/latest/{}", ENDPOINT, self.api_key, base_currency);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }
        let body: serde_json::Value = resp.json().await?;
        let rates = body
            .get("conversion_rates")
            .and_then(|v| v.as_object())
            .ok_or_else(|| RateError::Malformed("missing conversion_rates".to_string()))?;
        rates
            .iter()
            .map(|(code, v)| {
                v.as_f64()
                    .map(|rate| (code.clone(), rate))
                    .ok_or_else(|| RateError::Malformed(format!("non-numeric rate for {}", code)))
            })
            .collect()
    }
}
