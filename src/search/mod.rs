//! # 股票搜尋元件
//!
//! 使用者在搜尋框輸入代號，元件把文字轉成大寫，等輸入停頓一段安靜期後
//! 才向報價服務查詢，並把「載入中 / 錯誤 / 報價」發布成畫面狀態。
//!
//! - `debounce`：單一槽位的延遲計時
//! - `outcome`：畫面狀態
//! - `render`：文字畫面

pub mod debounce;
pub mod outcome;
pub mod render;

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use scopeguard::ScopeGuard;
use tokio::sync::watch;

use crate::{config::SETTINGS, crawler::StockQuote, logging};

use self::{
    debounce::Debouncer,
    outcome::{Outcome, ViewState},
};

/// 查詢任務在回應前被中斷 (panic 或 runtime 關閉) 時顯示的訊息
const INTERRUPTED: &str = "the request was interrupted";

/// 元件與查詢任務共用的狀態。
///
/// 每次送出請求都會拿到一張遞增的序號，只有序號仍是最新的結果才會寫回畫面；
/// 清空搜尋框與卸載元件也會推進序號，讓晚到的結果直接丟棄。
struct Shared {
    view: watch::Sender<ViewState>,
    generation: AtomicU64,
}

impl Shared {
    fn set_text(&self, text: &str) {
        self.view.send_modify(|view| view.text = text.to_string());
    }

    /// 回到 idle，並讓進行中的請求失效
    fn clear(&self) {
        self.view.send_modify(|view| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            view.outcome = Outcome::Idle;
        });
    }

    fn invalidate(&self) {
        self.view.send_modify(|_| {
            self.generation.fetch_add(1, Ordering::SeqCst);
        });
    }

    /// 進入載入中並回傳這次請求的序號。
    ///
    /// 計時觸發後搜尋框已被改掉 (例如清空) 時回傳 None，不送出請求。
    fn begin(&self, symbol: &str) -> Option<u64> {
        let mut ticket = None;
        self.view.send_if_modified(|view| {
            if view.text != symbol {
                return false;
            }
            ticket = Some(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
            view.outcome = Outcome::Loading(symbol.to_string());
            true
        });
        ticket
    }

    /// 只有序號仍是最新時才寫入結果
    fn finish(&self, ticket: u64, outcome: Outcome) -> bool {
        self.view.send_if_modified(|view| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                return false;
            }
            view.outcome = outcome;
            true
        })
    }
}

/// 送出一次查詢並把結果寫回共用狀態。
///
/// guard 保證任務不論怎麼結束，畫面都會離開載入中。
async fn dispatch(shared: Arc<Shared>, site: Arc<dyn StockQuote>, symbol: String) {
    let Some(ticket) = shared.begin(&symbol) else {
        logging::debug_file_async(format!("Skipped quote {}, search text changed", symbol));
        return;
    };
    logging::info_file_async(format!("Fetching quote {} (#{})", symbol, ticket));

    let guard = scopeguard::guard(Arc::clone(&shared), move |shared| {
        if shared.finish(ticket, Outcome::Error(INTERRUPTED.to_string())) {
            logging::error_file_async(format!("Fetching quote #{} was interrupted", ticket));
        }
    });

    let outcome = match site.fetch_quote(&symbol).await {
        Ok(quote) => Outcome::Success(quote),
        Err(why) => {
            logging::error_file_async(format!(
                "Failed to fetch quote {} because {:?}",
                symbol, why
            ));
            Outcome::Error(why.to_string())
        }
    };

    let shared = ScopeGuard::into_inner(guard);
    if !shared.finish(ticket, outcome) {
        logging::warn_file_async(format!(
            "Discarded stale quote {} (#{})",
            symbol, ticket
        ));
    }
}

/// 股票搜尋元件
pub struct StockSearch {
    text: String,
    shared: Arc<Shared>,
    debouncer: Debouncer,
    site: Arc<dyn StockQuote>,
}

impl StockSearch {
    /// 建立元件並以 `initial` 作為搜尋框的初始內容，必須在 tokio runtime 內呼叫
    pub fn mount(site: Arc<dyn StockQuote>, initial: &str, delay: Duration) -> Self {
        let (view, _) = watch::channel(ViewState::default());
        let mut search = StockSearch {
            text: String::new(),
            shared: Arc::new(Shared {
                view,
                generation: AtomicU64::new(0),
            }),
            debouncer: Debouncer::new(delay),
            site,
        };

        search.apply(initial.to_uppercase());
        search
    }

    /// 使用設定檔中的預設代號與安靜期
    pub fn mount_with_settings(site: Arc<dyn StockQuote>) -> Self {
        Self::mount(
            site,
            &SETTINGS.search.default_symbol,
            Duration::from_millis(SETTINGS.search.debounce_ms),
        )
    }

    /// 搜尋框內容改變
    pub fn on_text_changed(&mut self, raw_input: &str) {
        let text = raw_input.to_uppercase();
        if text == self.text {
            return;
        }

        self.apply(text);
    }

    fn apply(&mut self, text: String) {
        self.text = text;
        self.shared.set_text(&self.text);

        if self.text.is_empty() {
            self.debouncer.cancel();
            self.shared.clear();
            return;
        }

        let shared = Arc::clone(&self.shared);
        let site = Arc::clone(&self.site);
        let symbol = self.text.clone();
        self.debouncer.schedule(move || {
            // 查詢獨立成一個任務，之後取消計時不會中斷已送出的請求
            tokio::spawn(dispatch(shared, site, symbol));
        });
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 目前的畫面狀態
    pub fn view(&self) -> ViewState {
        self.shared.view.borrow().clone()
    }

    /// 訂閱畫面狀態的變化
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.view.subscribe()
    }

    /// 是否有尚未觸發的查詢
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// 卸載元件：取消計時，並丟棄之後才回來的結果 (實際工作在 `Drop`)
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for StockSearch {
    fn drop(&mut self) {
        self.debouncer.cancel();
        self.shared.invalidate();
        logging::debug_file_async(format!("StockSearch unmounted at {}", self.text));
    }
}
