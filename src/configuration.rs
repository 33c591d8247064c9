use std::{env, fs, ops::Deref, sync::Arc};

use anyhow::Context as _;

use crate::{
    dao::get_path,
    error::Error,
    helpers::{formatter, Formatter},
    provider::{DatabasePool, HTTP},
};

/// The identifier list is part of the pipeline definition, not runtime
/// configuration: the downstream table is modelled around exactly this set.
pub const COIN_IDS: [&str; 5] =
    ["bitcoin", "ethereum", "ripple", "solana", "cardano"];

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub database: DatabasePool,
    pub http: HTTP,
}

impl State {
    pub async fn new(
        config: Config,
        database: DatabasePool,
        http: HTTP,
    ) -> Result<State, Error> {
        Self::init_migrations(&database).await?;
        Ok(Self {
            config,
            database,
            http,
        })
    }

    /// Schema provisioning. Every statement is `CREATE TABLE IF NOT
    /// EXISTS`, so re-running against an already provisioned store is a
    /// no-op.
    async fn init_migrations(database: &DatabasePool) -> Result<(), Error> {
        let files = vec!["asset_snapshot.sql"];

        let dir = env!("CARGO_MANIFEST_DIR");

        for file in files {
            let path = get_path(dir, file);
            let data = fs::read_to_string(&path).with_context(|| {
                format!("migration file {}", path.display())
            })?;
            sqlx::query(data.as_str()).execute(&database.pool).await?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub coingecko_host: String,
    pub database_url: String,
    pub coin_ids: Vec<String>,
}

impl Config {
    pub fn get_coin_info_url(&self, coin_id: &str) -> String {
        formatter(
            "$0/coins/$1?localization=false".to_string(),
            &[
                Formatter::Str(self.coingecko_host.to_owned()),
                Formatter::Str(coin_id.to_owned()),
            ],
        )
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let coingecko_host = env::var("COINGECKO_HOST")?;
    let database_url = env::var("DATABASE_URL")?;
    let coin_ids = COIN_IDS.iter().map(|id| (*id).to_owned()).collect();

    Ok(Config {
        coingecko_host,
        database_url,
        coin_ids,
    })
}

pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    let config_string = fs::read_to_string(path)?;

    parse_config_string(config_string)?;

    Ok(())
}

fn parse_config_string(config: String) -> Result<(), Error> {
    let params: Vec<Option<(&str, &str)>> = config
        .split('\n')
        .map(|s| {
            let element = s.find('=');
            if let Some(e) = element {
                return Some(s.split_at(e));
            }
            None
        })
        .map(|value| {
            if let Some((k, v)) = value {
                return Some((k, &v[1..]));
            }
            None
        })
        .collect();

    for (key, value) in params.into_iter().flatten() {
        let parsed_value = match key {
            // The connection string in .env carries a `$0` placeholder;
            // the secret itself only ever lives in DB_PASSWORD.
            "DATABASE_URL" => {
                let password = env::var("DB_PASSWORD")?;
                formatter(value.to_owned(), &[Formatter::Str(password)])
            },
            _ => value.to_owned(),
        };
        std::env::set_var(key, parsed_value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            coingecko_host: "https://api.coingecko.com/api/v3".to_string(),
            database_url:
                "postgresql://postgres:pw@localhost:5432/cryptoproject"
                    .to_string(),
            coin_ids: COIN_IDS.iter().map(|id| (*id).to_owned()).collect(),
        }
    }

    #[test]
    fn test_coin_info_url_shape() {
        let config = test_config();
        assert_eq!(
            config.get_coin_info_url("bitcoin"),
            "https://api.coingecko.com/api/v3/coins/bitcoin?localization=false"
        );
    }

    #[test]
    fn test_coin_ids_are_unique() {
        let config = test_config();
        let mut ids = config.coin_ids.clone();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), config.coin_ids.len());
    }
}
