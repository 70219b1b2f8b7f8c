use std::collections::HashMap;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Per-request transport options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub headers: HashMap<String, String>,
}

/// Moves request bytes for a provider.
///
/// Returns the raw response body for every completed exchange, whatever the
/// status. Network errors, timeouts and cancellation are returned as `Err`.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        body: &Value,
        options: &Options,
        cancel: &CancellationToken,
    ) -> anyhow::Result<String>;
}
