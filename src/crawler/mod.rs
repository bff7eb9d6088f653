use async_trait::async_trait;
use thiserror::Error;

use crate::declare;

/// 本機的報價服務 (127.0.0.1:8000)
pub mod localhost;

/// 查詢報價時可能遇到的錯誤，全部都會在搜尋元件內轉成畫面上的錯誤訊息
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    /// 服務回應 404
    #[error("ticker not found: {0}")]
    NotFound(String),

    /// 其他非 2xx 的狀態碼，細節只寫進 log
    #[error("failed to fetch data from the server")]
    Server(u16),

    /// 連線失敗、逾時或回應內容無法解析
    #[error("{0}")]
    Transport(String),
}

#[async_trait]
pub trait StockQuote: Send + Sync {
    /// 取得股票目前的報價，每次呼叫只會送出一次請求
    async fn fetch_quote(&self, stock_symbol: &str) -> Result<declare::Quote, FetchError>;
}
