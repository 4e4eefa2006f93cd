use crate::models::CoinPrice;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CryptoPriceResponse {
    #[schema(example = "bitcoin")]
    pub coin: String,
    #[schema(example = 65000.5)]
    pub price: f64,
    #[schema(example = 1.2e12)]
    pub market_cap: Option<f64>,
    #[schema(example = 1.75)]
    pub change_24h: Option<f64>,
}

impl From<CoinPrice> for CryptoPriceResponse {
    fn from(price: CoinPrice) -> Self {
        Self {
            coin: price.coin,
            price: price.price,
            market_cap: price.market_cap,
            change_24h: price.change_24h,
        }
    }
}
