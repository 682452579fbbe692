#![allow(dead_code)]

use masking::Secret;
use router::configs::settings::{Proxy, Server, Settings, Veritrans};

/// Settings pointing at an unroutable vendor host. Tests exercising
/// validation and configuration failures never reach the vendor.
pub fn settings(with_credentials: bool) -> Settings {
    let credential =
        |value: &str| with_credentials.then(|| Secret::new(value.to_string()));
    Settings {
        server: Server {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        proxy: Proxy::default(),
        veritrans: Veritrans {
            token_url: "http://127.0.0.1:1/4gtoken".to_string(),
            mpi_authorize_url: "http://127.0.0.1:1/Authorize".to_string(),
            token_api_key: credential("test-token-api-key"),
            merchant_ccid: credential("test-merchant-ccid"),
            merchant_secret_key: credential("test-merchant-secret"),
            push_url: None,
            redirection_uri: None,
            dummy_request: true,
        },
    }
}
