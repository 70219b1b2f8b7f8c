use std::time::Duration;

use anyhow::bail;
use reqwest::Client;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use translate_plugin_interface::{HttpTransport, Options};

/// [`HttpTransport`] over a shared reqwest client.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: &Value,
        options: &Options,
        cancel: &CancellationToken,
    ) -> anyhow::Result<String> {
        let mut request = self.client.post(url).json(body);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            log::debug!("POST {url} returned {status}");
            anyhow::Ok(text)
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => bail!("request cancelled"),
            result = exchange => result,
        }
    }
}
