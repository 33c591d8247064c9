use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `asset_snapshot` table: the market state of a single
/// asset at fetch time. Market fields stay `None` when the source omits
/// them; only the identity columns are guaranteed.
#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct AssetSnapshot {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    pub change_24h_pct: Option<f64>,
    pub change_7d_pct: Option<f64>,
    pub rank: Option<i32>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub sentiment_votes_up_percentage: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}
