use crate::declare::Quote;

/// 一次查詢在畫面上的狀態。
///
/// 載入中與錯誤是不同的變體，所以「載入中但還留著上一次的錯誤」這種組合不存在。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    /// 搜尋框是空的，或還沒送出任何請求
    #[default]
    Idle,
    /// 已送出請求，等待回應
    Loading(String),
    /// 請求失敗，內容是要顯示的訊息
    Error(String),
    /// 成功取得報價
    Success(Quote),
}

impl Outcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, Outcome::Loading(_))
    }

    /// 請求已結束 (成功或失敗)
    pub fn is_settled(&self) -> bool {
        matches!(self, Outcome::Success(_) | Outcome::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Outcome::Success(quote) => Some(quote),
            _ => None,
        }
    }
}

/// 搜尋元件對外發布的畫面狀態
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// 搜尋框目前的內容，永遠是大寫
    pub text: String,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let quote = Quote {
            symbol: "MSFT".to_string(),
            long_name: "Microsoft Corporation".to_string(),
            regular_market_price: 410.5,
            dividend_yield: Some(0.8),
        };

        assert!(!Outcome::Idle.is_loading());
        assert!(!Outcome::Idle.is_settled());
        assert!(Outcome::Loading("MSFT".to_string()).is_loading());
        assert_eq!(Outcome::Loading("MSFT".to_string()).error(), None);
        assert_eq!(Outcome::Error("boom".to_string()).error(), Some("boom"));
        assert!(Outcome::Error("boom".to_string()).is_settled());
        assert_eq!(Outcome::Success(quote.clone()).quote(), Some(&quote));
        assert_eq!(Outcome::Error("boom".to_string()).quote(), None);
    }
}
