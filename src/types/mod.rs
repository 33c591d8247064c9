pub use self::coin_gecko_info::{
    CoinGeckoInfo, CoinGeckoMarketData, UsdQuote,
};

mod coin_gecko_info;
