use reqwest::Client;
use tracing::{info, warn};

use crate::{configuration::Config, error::Error, types::CoinGeckoInfo};

#[derive(Debug)]
pub struct HTTP {
    pub config: Config,
    client: Client,
}

impl HTTP {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::builder().build()?;
        Ok(HTTP { config, client })
    }

    /// One read of the coin endpoint. `Ok(None)` means the identifier did
    /// not resolve or returned an undecodable body; the caller drops it
    /// from the batch. Transport errors still abort the run.
    pub async fn get_coin_info(
        &self,
        coin_id: &str,
    ) -> Result<Option<CoinGeckoInfo>, Error> {
        let url = self.config.get_coin_info_url(coin_id);
        info!("{}", &url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!("{}: dropped, status {}", coin_id, response.status());
            return Ok(None);
        }

        match response.json::<CoinGeckoInfo>().await {
            Ok(info) => Ok(Some(info)),
            Err(err) => {
                warn!("{}: dropped, undecodable body: {}", coin_id, err);
                Ok(None)
            },
        }
    }
}
