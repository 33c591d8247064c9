use tracing::{error, info, Level};

use crypto_etl::{
    configuration::{
        get_configuration, set_configuration, AppState, Config, State,
    },
    error::Error,
    handler::snapshots,
    provider::{DatabasePool, HTTP},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match init() {
        Ok(config) => config,
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let http = HTTP::new(config.clone())?;

    info!("Collecting CoinGecko data...");
    let batch = snapshots::fetch(&http, &config.coin_ids).await?;

    info!("Creating the database table...");
    let database = DatabasePool::new(&config).await?;
    let state = State::new(config, database, http).await?;
    let app_state = AppState::new(state);

    info!("Inserting data into the database...");
    snapshots::insert(app_state.clone(), &batch).await?;

    info!("Pipeline completed. Ready for the BI consumer.");
    println!("{}", serde_json::to_string_pretty(&batch)?);

    Ok(())
}

fn init() -> Result<Config, Error> {
    set_configuration()?;
    get_configuration()
}
