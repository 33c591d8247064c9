use tracing::info;

use crate::{
    configuration::Config,
    dao::{PoolOption, PoolType},
    error::Error,
    helpers::redact_database_url,
    model::{AssetSnapshot, Table},
};

#[derive(Debug)]
pub struct DatabasePool {
    pub asset_snapshot: Table<AssetSnapshot>,
    pub pool: PoolType,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        info!(
            "Connecting to {}",
            redact_database_url(&config.database_url)?
        );

        let pool = PoolOption::new()
            .max_connections(5)
            .connect(config.database_url.as_str())
            .await?;

        Ok(DatabasePool {
            asset_snapshot: Table::new(pool.clone()),
            pool,
        })
    }
}
