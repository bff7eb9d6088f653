use std::sync::Once;

pub mod http;

static RUSTLS_PROVIDER: Once = Once::new();

/// reqwest 使用 `rustls-no-provider`，建立 client 之前必須先安裝 crypto provider。
pub fn ensure_rustls_crypto_provider() {
    RUSTLS_PROVIDER.call_once(|| {
        if rustls::crypto::CryptoProvider::get_default().is_none() {
            // 其他地方已安裝時會回傳 Err，忽略即可
            let _ = rustls::crypto::ring::default_provider().install_default();
        }
    });
}
