use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    finnhub_api_key: String,
    database_url: String,
    bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let finnhub_api_key = std::env::var("FINNHUB_API_KEY")
            .with_context(|| "Missing FINNHUB_API_KEY in environment")?;
        let database_url =
            std::env::var("DATABASE_URL").with_context(|| "Missing DATABASE_URL in environment")?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self::new(finnhub_api_key, database_url, bind_addr))
    }
}
