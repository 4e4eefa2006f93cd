pub mod coin_price;
pub mod dto;
pub mod error;
pub use coin_price::CoinPrice;
pub use error::{Error, UpstreamError};
