/// Price snapshot of a single coin in the configured currency, as reported upstream.
/// Built per request and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinPrice {
    pub coin: String,
    pub price: f64,
    pub market_cap: Option<f64>,
    pub change_24h: Option<f64>,
}
