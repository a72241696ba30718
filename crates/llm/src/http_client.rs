//! HTTP Client Factory
//!
//! Builds the reqwest client used by providers, with optional proxy support.

use crate::types::{LlmError, LlmResult};

/// Build a `reqwest::Client` for the given proxy URL.
///
/// - `Some(url)` -> route every request through that proxy (http, https or socks5)
/// - `None` -> reqwest's system proxy lookup (`HTTP_PROXY`, `HTTPS_PROXY`, `NO_PROXY`)
///
/// No request timeout is set; the client default applies.
pub fn build_http_client(proxy: Option<&str>) -> LlmResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(url) = proxy {
        let p = reqwest::Proxy::all(url).map_err(|e| LlmError::InvalidRequest {
            message: format!("Invalid proxy URL '{}': {}", url, e),
        })?;
        builder = builder.proxy(p);
    }
    builder.build().map_err(|e| LlmError::Other {
        message: format!("Failed to build HTTP client: {}", e),
    })
}
