pub mod config;
pub mod crawler;
pub mod declare;
pub mod logging;
pub mod search;
pub mod util;

use std::{env, sync::Arc, time::Duration};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    config::SETTINGS,
    crawler::localhost::Localhost,
    search::{render::render, StockSearch},
};

#[cfg(all(target_os = "linux", target_env = "musl"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    logging::info_file_async(format!(
        "StockSearch 已啟動\r\nRust OS/Arch: {}/{}\r\nQuote service: {}\r\n",
        env::consts::OS,
        env::consts::ARCH,
        SETTINGS.quote_service.origin
    ));

    let site = Arc::new(Localhost::from_settings());
    let mut search = StockSearch::mount_with_settings(site);
    let mut rx = search.subscribe();

    // 每次畫面狀態改變就重畫一次
    let renderer = tokio::spawn(async move {
        loop {
            let screen = render(&rx.borrow_and_update());
            println!("{}", screen);

            if rx.changed().await.is_err() {
                break;
            }
        }
    });

    // 每一行輸入都視為搜尋框的完整內容
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(text)) => search.on_text_changed(&text),
                Ok(None) => break,
                Err(why) => {
                    logging::error_file_async(format!("Failed to read stdin because {:?}", why));
                    continue;
                }
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    search.unmount();
    renderer.abort();
    logging::info_file_async("StockSearch 已結束");

    // 讓背景線程把 log 寫完
    tokio::time::sleep(Duration::from_millis(200)).await;

    Ok(())
}
