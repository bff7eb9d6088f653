//! # 本機報價服務
//!
//! 對應同一台機器上執行的 REST 服務，路徑為 `/stock/{symbol}/`，
//! 成功時回傳報價 JSON，找不到代號時回傳 404。

/// 測試用的假報價服務
#[cfg(test)]
pub(crate) mod fake;
/// 報價查詢子模組
pub mod quote;

use crate::config::SETTINGS;

/// 本機報價服務的採集器
#[derive(Debug, Clone)]
pub struct Localhost {
    origin: String,
}

impl Localhost {
    pub fn new<S: Into<String>>(origin: S) -> Self {
        Localhost {
            origin: origin.into(),
        }
    }

    /// 使用設定檔中的服務位址
    pub fn from_settings() -> Self {
        Self::new(SETTINGS.quote_service.origin.as_str())
    }

    fn quote_url(&self, stock_symbol: &str) -> String {
        format!(
            "{origin}/stock/{symbol}/",
            origin = self.origin.trim_end_matches('/'),
            symbol = urlencoding::encode(stock_symbol)
        )
    }
}
