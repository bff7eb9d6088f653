use std::{env, path::PathBuf, str::FromStr};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::logging;

const CONFIG_PATH: &str = "app.json";

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct App {
    #[serde(default)]
    pub quote_service: QuoteService,
    #[serde(default)]
    pub search: Search,
}

const QUOTE_SERVICE_ORIGIN: &str = "QUOTE_SERVICE_ORIGIN";
const QUOTE_SERVICE_CONNECT_TIMEOUT_SECS: &str = "QUOTE_SERVICE_CONNECT_TIMEOUT_SECS";
const QUOTE_SERVICE_TIMEOUT_SECS: &str = "QUOTE_SERVICE_TIMEOUT_SECS";

/// 後端報價服務
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuoteService {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for QuoteService {
    fn default() -> Self {
        QuoteService {
            origin: default_origin(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_origin() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    8
}

fn default_timeout_secs() -> u64 {
    15
}

const SEARCH_DEFAULT_SYMBOL: &str = "SEARCH_DEFAULT_SYMBOL";
const SEARCH_DEBOUNCE_MS: &str = "SEARCH_DEBOUNCE_MS";

/// 搜尋框
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Search {
    #[serde(default = "default_symbol")]
    pub default_symbol: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for Search {
    fn default() -> Self {
        Search {
            default_symbol: default_symbol(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_symbol() -> String {
    "MSFT".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

pub static SETTINGS: Lazy<App> = Lazy::new(|| {
    App::get().unwrap_or_else(|why| {
        logging::error_file_async(format!(
            "I can't read the config context because {:?}",
            why
        ));
        App::default().override_with_env()
    })
});

impl App {
    fn get() -> Result<Self> {
        let config_path = config_path();
        if config_path.exists() {
            let config: App = config_config::builder()
                .add_source(config_file::from(config_path))
                .build()?
                .try_deserialize()?;
            return Ok(config.override_with_env());
        }

        Ok(App::default().override_with_env())
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(mut self) -> Self {
        if let Ok(origin) = env::var(QUOTE_SERVICE_ORIGIN) {
            self.quote_service.origin = origin;
        }

        if let Ok(secs) = env::var(QUOTE_SERVICE_CONNECT_TIMEOUT_SECS) {
            self.quote_service.connect_timeout_secs =
                u64::from_str(&secs).unwrap_or_else(|_| default_connect_timeout_secs());
        }

        if let Ok(secs) = env::var(QUOTE_SERVICE_TIMEOUT_SECS) {
            self.quote_service.timeout_secs =
                u64::from_str(&secs).unwrap_or_else(|_| default_timeout_secs());
        }

        if let Ok(symbol) = env::var(SEARCH_DEFAULT_SYMBOL) {
            self.search.default_symbol = symbol;
        }

        if let Ok(ms) = env::var(SEARCH_DEBOUNCE_MS) {
            self.search.debounce_ms = u64::from_str(&ms).unwrap_or_else(|_| default_debounce_ms());
        }

        self
    }
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}
