use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response body of `/coins/{id}?localization=false`, narrowed to the
/// fields the pipeline keeps. Everything outside the identity triple is
/// optional: CoinGecko omits or nulls market fields for thin assets.
#[derive(Debug, Deserialize)]
pub struct CoinGeckoInfo {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub market_cap_rank: Option<i32>,
    pub sentiment_votes_up_percentage: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub market_data: Option<CoinGeckoMarketData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CoinGeckoMarketData {
    #[serde(default)]
    pub current_price: UsdQuote,
    #[serde(default)]
    pub market_cap: UsdQuote,
    #[serde(default)]
    pub total_volume: UsdQuote,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
}

/// The per-currency quote maps (`current_price`, `market_cap`,
/// `total_volume`) reduced to their `usd` entry.
#[derive(Debug, Default, Deserialize)]
pub struct UsdQuote {
    pub usd: Option<f64>,
}
