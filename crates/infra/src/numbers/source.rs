//! HTTP number source backed by the evaluation service.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use numwin_core::NumberSource;
use numwin_domain::{
    Credentials, Endpoint, NumWinError, Result, UpstreamBatch, UpstreamConfig, UpstreamError,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::{debug, instrument};

use crate::http::HttpClient;

const USER_AGENT: &str = concat!("numwin/", env!("CARGO_PKG_VERSION"));

/// Fetches `{"numbers": [...]}` batches over HTTP.
#[derive(Clone)]
pub struct HttpNumberSource {
    http: HttpClient,
}

impl HttpNumberSource {
    /// Build a source from upstream configuration.
    ///
    /// # Errors
    /// Returns `NumWinError::Config` if no credentials are configured, the
    /// credential cannot be encoded as a header, or the client cannot be
    /// built.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let credentials = config.credentials().ok_or_else(|| {
            NumWinError::Config(
                "upstream credentials missing: set an access token or client id and secret"
                    .to_string(),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization_header(&credentials)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl NumberSource for HttpNumberSource {
    #[instrument(skip(self), fields(category = %endpoint.category))]
    async fn fetch(&self, endpoint: &Endpoint) -> std::result::Result<Vec<i64>, UpstreamError> {
        let batch: UpstreamBatch = self.http.get_json(&endpoint.url).await?;
        debug!(count = batch.numbers.len(), "fetched upstream batch");
        Ok(batch.numbers)
    }
}

/// Render credentials as a sensitive `Authorization` header value.
///
/// # Errors
/// Returns `NumWinError::Config` when the credential contains bytes that are
/// not valid in an HTTP header.
pub fn authorization_header(credentials: &Credentials) -> Result<HeaderValue> {
    let raw = match credentials {
        Credentials::Bearer(token) => format!("Bearer {token}"),
        Credentials::Basic { client_id, client_secret } => {
            format!("Basic {}", BASE64.encode(format!("{client_id}:{client_secret}")))
        }
    };

    let mut value = HeaderValue::from_str(&raw)
        .map_err(|e| NumWinError::Config(format!("invalid upstream credential: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}
