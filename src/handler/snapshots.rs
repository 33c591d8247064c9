use tracing::{info, warn};

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::AssetSnapshot,
    provider::HTTP,
    types::CoinGeckoInfo,
};

/// Sequential fetch over the configured identifiers. Identifiers that do
/// not resolve are dropped; result order follows input order.
pub async fn fetch(
    http: &HTTP,
    coin_ids: &[String],
) -> Result<Vec<AssetSnapshot>, Error> {
    let mut batch = Vec::with_capacity(coin_ids.len());

    for coin_id in coin_ids {
        if let Some(info) = http.get_coin_info(coin_id).await? {
            batch.push(normalize(info));
        }
    }

    if batch.len() < coin_ids.len() {
        warn!(
            "{} of {} identifiers resolved",
            batch.len(),
            coin_ids.len()
        );
    }

    Ok(batch)
}

/// Flattens a coin payload into one table row. A missing `market_data`
/// object or subfield turns into a NULL column, never an error.
pub fn normalize(info: CoinGeckoInfo) -> AssetSnapshot {
    let market = info.market_data.unwrap_or_default();

    AssetSnapshot {
        id: info.id,
        symbol: info.symbol,
        name: info.name,
        price_usd: market.current_price.usd,
        market_cap_usd: market.market_cap.usd,
        volume_24h_usd: market.total_volume.usd,
        change_24h_pct: market.price_change_percentage_24h,
        change_7d_pct: market.price_change_percentage_7d,
        rank: info.market_cap_rank,
        circulating_supply: market.circulating_supply,
        total_supply: market.total_supply,
        sentiment_votes_up_percentage: info.sentiment_votes_up_percentage,
        last_updated: info.last_updated,
    }
}

pub async fn insert(
    app_state: AppState<State>,
    batch: &[AssetSnapshot],
) -> Result<(), Error> {
    app_state.database.asset_snapshot.replace_all(batch).await?;

    let (count,) = app_state.database.asset_snapshot.count().await?;
    info!("{} row(s) written to \"asset_snapshot\"", count);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn full_payload() -> CoinGeckoInfo {
        serde_json::from_str(
            r#"{
                "id": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "market_cap_rank": 1,
                "sentiment_votes_up_percentage": 74.5,
                "last_updated": "2024-06-01T12:30:00Z",
                "market_data": {
                    "current_price": {"usd": 64000.0},
                    "market_cap": {"usd": 1260000000000.0},
                    "total_volume": {"usd": 35000000000.0},
                    "price_change_percentage_24h": -1.2,
                    "price_change_percentage_7d": 3.4,
                    "circulating_supply": 19700000.0,
                    "total_supply": 21000000.0
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_full_payload() {
        let snapshot = normalize(full_payload());

        assert_eq!(snapshot.id, "bitcoin");
        assert_eq!(snapshot.symbol, "btc");
        assert_eq!(snapshot.name, "Bitcoin");
        assert_eq!(snapshot.price_usd, Some(64000.0));
        assert_eq!(snapshot.market_cap_usd, Some(1260000000000.0));
        assert_eq!(snapshot.volume_24h_usd, Some(35000000000.0));
        assert_eq!(snapshot.change_24h_pct, Some(-1.2));
        assert_eq!(snapshot.change_7d_pct, Some(3.4));
        assert_eq!(snapshot.rank, Some(1));
        assert_eq!(snapshot.circulating_supply, Some(19700000.0));
        assert_eq!(snapshot.total_supply, Some(21000000.0));
        assert_eq!(snapshot.sentiment_votes_up_percentage, Some(74.5));
        assert_eq!(
            snapshot.last_updated,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_normalize_missing_subfield_only_nulls_that_field() {
        let info: CoinGeckoInfo = serde_json::from_str(
            r#"{
                "id": "ripple",
                "symbol": "xrp",
                "name": "XRP",
                "market_cap_rank": 6,
                "market_data": {
                    "current_price": {"usd": 0.52},
                    "market_cap": {},
                    "total_volume": {"usd": 1200000000.0},
                    "price_change_percentage_24h": 0.8,
                    "circulating_supply": 55000000000.0
                }
            }"#,
        )
        .unwrap();

        let snapshot = normalize(info);

        assert_eq!(snapshot.market_cap_usd, None);
        assert_eq!(snapshot.change_7d_pct, None);
        assert_eq!(snapshot.total_supply, None);
        assert_eq!(snapshot.sentiment_votes_up_percentage, None);
        assert_eq!(snapshot.last_updated, None);

        assert_eq!(snapshot.id, "ripple");
        assert_eq!(snapshot.price_usd, Some(0.52));
        assert_eq!(snapshot.volume_24h_usd, Some(1200000000.0));
        assert_eq!(snapshot.change_24h_pct, Some(0.8));
        assert_eq!(snapshot.rank, Some(6));
        assert_eq!(snapshot.circulating_supply, Some(55000000000.0));
    }

    #[test]
    fn test_normalize_without_market_data_keeps_identity() {
        let info: CoinGeckoInfo = serde_json::from_str(
            r#"{"id": "cardano", "symbol": "ada", "name": "Cardano"}"#,
        )
        .unwrap();

        let snapshot = normalize(info);

        assert_eq!(snapshot.id, "cardano");
        assert_eq!(snapshot.symbol, "ada");
        assert_eq!(snapshot.name, "Cardano");
        assert_eq!(snapshot.price_usd, None);
        assert_eq!(snapshot.market_cap_usd, None);
        assert_eq!(snapshot.volume_24h_usd, None);
        assert_eq!(snapshot.rank, None);
    }
}
