use std::fmt::Write as _;

use crate::search::outcome::{Outcome, ViewState};

const TITLE: &str = "Search US stocks";

/// 把畫面狀態轉成文字畫面
pub fn render(view: &ViewState) -> String {
    let mut screen = String::with_capacity(256);
    let _ = writeln!(screen, "{}", TITLE);
    let _ = writeln!(screen, "> {}", view.text);

    match &view.outcome {
        Outcome::Idle => {}
        Outcome::Loading(_) => {
            let _ = writeln!(screen, "Searching...");
        }
        Outcome::Error(msg) => {
            let _ = writeln!(screen, "Error: {}", msg);
        }
        Outcome::Success(quote) => {
            let _ = writeln!(
                screen,
                "Name: {} Symbol: {}",
                quote.long_name, quote.symbol
            );
            let _ = writeln!(screen, "Price: ${}", quote.regular_market_price);
            let _ = match quote.paying_dividend_yield() {
                Some(dividend_yield) => {
                    writeln!(screen, "Dividend yield: {:.2}% per year", dividend_yield)
                }
                None => writeln!(screen, "No dividend paid (or no data)"),
            };
        }
    }

    screen
}
