use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    models::{CoinPrice, UpstreamError},
    Config,
};

/// Client for the CoinGecko compatible price provider.
/// Holds a pooled HTTP client, so one instance is shared by all requests.
pub struct External {
    client: Client,
    simple_price_url: String,
    currency: String,
    timeout_seconds: u64,
}

impl External {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(External {
            client,
            simple_price_url: config.simple_price_url(),
            currency: config.default_currency.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Fetches price, market cap and 24h change of `coin` with a single GET.
    /// Failed calls are not retried.
    pub async fn get_simple_price(&self, coin: &str) -> Result<CoinPrice, UpstreamError> {
        debug!("Requesting {} price of {coin:?}", self.currency);
        let response = self
            .client
            .get(&self.simple_price_url)
            .query(&[
                ("ids", coin),
                ("vs_currencies", self.currency.as_str()),
                ("include_market_cap", "true"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        parse_simple_price(&body, coin, &self.currency)
    }

    fn transport_error(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::Timeout(self.timeout_seconds)
        } else {
            UpstreamError::Unreachable(error)
        }
    }
}

/// Maps a simple price payload such as
/// `{"bitcoin":{"usd":65000.5,"usd_market_cap":1.2e12,"usd_24h_change":1.75}}`
/// to a [CoinPrice]. Market cap and 24h change may be missing or null.
pub fn parse_simple_price(
    body: &str,
    coin: &str,
    currency: &str,
) -> Result<CoinPrice, UpstreamError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| UpstreamError::MalformedResponse(format!("invalid JSON: {e}")))?;
    let payload = payload.as_object().ok_or_else(|| {
        UpstreamError::MalformedResponse("expected a JSON object".to_string())
    })?;

    let entry = payload
        .get(coin)
        .ok_or_else(|| UpstreamError::CoinNotFound(coin.to_string()))?
        .as_object()
        .ok_or_else(|| {
            UpstreamError::MalformedResponse(format!("entry for '{coin}' is not an object"))
        })?;

    let price = entry.get(currency).and_then(Value::as_f64).ok_or_else(|| {
        UpstreamError::MalformedResponse(format!("no '{currency}' price for '{coin}'"))
    })?;

    Ok(CoinPrice {
        coin: coin.to_string(),
        price,
        market_cap: entry
            .get(&format!("{currency}_market_cap"))
            .and_then(Value::as_f64),
        change_24h: entry
            .get(&format!("{currency}_24h_change"))
            .and_then(Value::as_f64),
    })
}
