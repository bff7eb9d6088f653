use std::net::SocketAddr;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

/// 依代號回傳固定內容：
/// - `AAPL` 有殖利率，`NODIV` 沒有殖利率欄位
/// - `ZZZZ` 404，`BOOM` 500，`GARBAGE` 200 但內容不是 JSON
async fn stock(Path(symbol): Path<String>) -> Response {
    match symbol.as_str() {
        "AAPL" => Json(json!({
            "symbol": "AAPL",
            "longName": "Apple Inc.",
            "regularMarketPrice": 150.25,
            "dividendYield": 0.55
        }))
        .into_response(),
        "NODIV" => Json(json!({
            "symbol": "NODIV",
            "longName": "No Dividend Corp.",
            "regularMarketPrice": 12.5
        }))
        .into_response(),
        "BOOM" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "GARBAGE" => (StatusCode::OK, "<html>not json</html>").into_response(),
        other => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no data for {}", other) })),
        )
            .into_response(),
    }
}

/// 在 127.0.0.1 的隨機 port 啟動假服務，回傳 origin
pub(crate) async fn spawn() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake quote service");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    let app = Router::new().route("/stock/{symbol}/", get(stock));

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}
