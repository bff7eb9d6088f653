use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    crawler::{localhost::Localhost, FetchError, StockQuote},
    declare, logging, util,
};

#[async_trait]
impl StockQuote for Localhost {
    async fn fetch_quote(&self, stock_symbol: &str) -> Result<declare::Quote, FetchError> {
        let url = self.quote_url(stock_symbol);
        let response = util::http::get_response(&url, Some(util::http::accept_json()))
            .await
            .map_err(|why| FetchError::Transport(why.to_string()))?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            // 服務端會在 body 帶上原因，只留在 log
            let reason = response.text().await.unwrap_or_default();
            logging::warn_file_async(format!("{} not found: {}", stock_symbol, reason));
            return Err(FetchError::NotFound(stock_symbol.to_string()));
        }

        if !status.is_success() {
            logging::error_file_async(format!(
                "Failed to fetch quote({}) because status {}",
                stock_symbol, status
            ));
            return Err(FetchError::Server(status.as_u16()));
        }

        response
            .json::<declare::Quote>()
            .await
            .map_err(|why| FetchError::Transport(why.to_string()))
    }
}
