use crate::{ClientConfig, Result, RunAgentRequest};
use serde::Deserialize;
use url::Url;

pub const PING_PATH: &str = "/ping";

/// The single network hop the form handler makes.
///
/// Futures returned here are not `Send`: on the web they wrap JS promises and run on the
/// browser's event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `request` as `multipart/form-data` and decode the response body as JSON.
    async fn post_form(&self, path: &str, request: RunAgentRequest) -> Result<serde_json::Value>;

    async fn get_json(&self, path: &str) -> Result<serde_json::Value>;
}

/// A [`Transport`] backed by `reqwest`, which uses `fetch` when compiled to wasm.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base: config.server_url.clone(),
        }
    }

    /// Resolve an endpoint path against the server URL.
    ///
    /// The leading slash is dropped so a base like `https://host/tools/` keeps its prefix.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    /// Ask the server whether it is up. Anything other than `{"status":"ok"}` counts as down.
    pub async fn ping(&self) -> Result<bool> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }

        let value = self.get_json(PING_PATH).await?;
        let health: Health = serde_json::from_value(value)?;
        Ok(health.status == "ok")
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, path: &str, request: RunAgentRequest) -> Result<serde_json::Value> {
        let url = self.url(path)?;
        tracing::info!(
            "POST {url} (params: {}, pdf: {})",
            request.params_file.name,
            request.pdf_file.name
        );

        let response = self
            .client
            .post(url)
            .multipart(request.into_form())
            .send()
            .await?;

        // Error bodies are JSON too (`{"detail": ...}`), so they are decoded and shown like any other.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{path} answered with {status}");
        }

        Ok(response.json().await?)
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.url(path)?;
        tracing::debug!("GET {url}");
        Ok(self.client.get(url).send().await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(&ClientConfig::new(base).unwrap())
    }

    #[test]
    fn joins_paths_onto_origin() {
        let transport = transport("http://localhost:8000");
        assert_eq!(
            transport.url("/run-agent").unwrap().as_str(),
            "http://localhost:8000/run-agent"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let transport = transport("https://example.com/tools/");
        assert_eq!(
            transport.url("/ping").unwrap().as_str(),
            "https://example.com/tools/ping"
        );
    }
}
