use serde::{Deserialize, Serialize};

/// 報價服務回傳的個股快照
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quote {
    /// 股票代號
    pub symbol: String,
    /// 公司全名
    #[serde(rename = "longName")]
    pub long_name: String,
    /// 目前股價
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: f64,
    /// 殖利率(%)，可能不存在
    #[serde(rename = "dividendYield", default)]
    pub dividend_yield: Option<f64>,
}

impl Quote {
    /// 有配息的殖利率，缺值或不大於零時回傳 None
    pub fn paying_dividend_yield(&self) -> Option<f64> {
        self.dividend_yield.filter(|y| *y > 0.0)
    }
}
