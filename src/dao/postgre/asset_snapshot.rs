use super::DataBase;
use crate::model::{AssetSnapshot, Table};
use sqlx::{error::Error, QueryBuilder};

impl Table<AssetSnapshot> {
    /// Full-replace write: every prior row is removed and the batch is
    /// inserted in the same transaction, so readers only ever observe a
    /// complete run. An empty batch leaves the table empty.
    pub async fn replace_all(
        &self,
        data: &[AssetSnapshot],
    ) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(r#"DELETE FROM "asset_snapshot""#)
            .execute(&mut *tx)
            .await?;

        if !data.is_empty() {
            let mut query_builder: QueryBuilder<DataBase> = QueryBuilder::new(
                r#"
                INSERT INTO "asset_snapshot" (
                    "id",
                    "symbol",
                    "name",
                    "price_usd",
                    "market_cap_usd",
                    "volume_24h_usd",
                    "change_24h_pct",
                    "change_7d_pct",
                    "rank",
                    "circulating_supply",
                    "total_supply",
                    "sentiment_votes_up_percentage",
                    "last_updated"
                )"#,
            );

            query_builder.push_values(data, |mut b, row| {
                b.push_bind(&row.id)
                    .push_bind(&row.symbol)
                    .push_bind(&row.name)
                    .push_bind(row.price_usd)
                    .push_bind(row.market_cap_usd)
                    .push_bind(row.volume_24h_usd)
                    .push_bind(row.change_24h_pct)
                    .push_bind(row.change_7d_pct)
                    .push_bind(row.rank)
                    .push_bind(row.circulating_supply)
                    .push_bind(row.total_supply)
                    .push_bind(row.sentiment_votes_up_percentage)
                    .push_bind(row.last_updated);
            });

            let query = query_builder.build();
            query.execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<(i64,), Error> {
        sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM "asset_snapshot"
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }
}
