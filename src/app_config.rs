use anyhow::{anyhow, Context};
use std::env;

#[derive(Debug, Clone)]
pub enum StoreConfig {
    File { path: String },
    Redis { url: String, key: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub seeds_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<AppConfig> {
        let host = env::var("HOST").unwrap_or_else(|_| "localhost".to_owned());
        let port = env::var("PORT")
            .map(|x| x.parse::<u16>())
            .unwrap_or(Ok(8080))
            .context("PORT")?;
        let store = match env::var("STORE_KIND").context("STORE_KIND")?.as_str() {
            "FILE" => {
                let path = env::var("STORE_FILE_PATH").context("STORE_FILE_PATH")?;
                StoreConfig::File { path }
            }
            "REDIS" => {
                let url = env::var("STORE_REDIS_URL").context("STORE_REDIS_URL")?;
                let key =
                    env::var("STORE_REDIS_KEY").unwrap_or_else(|_| "showcase:builds".to_owned());
                StoreConfig::Redis { url, key }
            }
            _ => Err(anyhow!("Invalid store kind"))?,
        };
        let seeds_path = env::var("SEEDS_PATH").ok();

        Ok(AppConfig {
            host,
            port,
            store,
            seeds_path,
        })
    }
}
