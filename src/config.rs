use crate::Result;
use url::Url;

/// The environment variable holding the base URL of the run-agent server.
///
/// Native builds read it at runtime. Web builds bake it in at compile time and otherwise talk to
/// the origin that served the page.
pub const SERVER_URL_ENV: &str = "RUN_AGENT_SERVER_URL";

/// Where the server listens when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: Url,
}

impl ClientConfig {
    pub fn new(server_url: &str) -> Result<Self> {
        Ok(Self {
            server_url: Url::parse(server_url)?,
        })
    }

    /// Resolve the server URL for the current platform.
    ///
    /// An unparseable value is logged and ignored rather than failing the whole app.
    pub fn from_env() -> Self {
        if let Some(url) = configured_server_url() {
            match Self::new(&url) {
                Ok(config) => return config,
                Err(err) => tracing::warn!("Ignoring {SERVER_URL_ENV}={url:?}: {err}"),
            }
        }

        Self::platform_default()
    }

    #[cfg(target_arch = "wasm32")]
    fn platform_default() -> Self {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());

        origin
            .and_then(|origin| Self::new(&origin).ok())
            .unwrap_or_else(Self::fallback)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn platform_default() -> Self {
        Self::fallback()
    }

    fn fallback() -> Self {
        Self {
            server_url: Url::parse(DEFAULT_SERVER_URL).expect("default server URL is valid"),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(target_arch = "wasm32")]
fn configured_server_url() -> Option<String> {
    option_env!("RUN_AGENT_SERVER_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_server_url() -> Option<String> {
    std::env::var(SERVER_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
}
