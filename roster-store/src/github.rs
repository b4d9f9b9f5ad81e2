//! GitHub contents API client.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use roster_core::error::{Result, RosterError};
use roster_core::traits::RemoteStore;
use roster_core::types::{RemoteDocument, VersionToken};

/// Remote store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// API base URL (overridable for tests).
    pub api_base: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Path of the roster file inside the repository.
    pub path: String,
    /// Personal access token with contents permission.
    pub token: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".into(),
            owner: String::new(),
            repo: String::new(),
            path: String::new(),
            token: String::new(),
            timeout_seconds: 30,
        }
    }
}

impl StoreConfig {
    /// Creates a config for `owner/repo` with the given file path and token.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
            token: token.into(),
            ..Default::default()
        }
    }
}

/// GitHub-backed remote text store.
///
/// Content travels base64-encoded with embedded newlines in both
/// directions; this client handles the transcoding so callers only see
/// plain text.
pub struct GithubStore {
    config: StoreConfig,
    http_client: reqwest::Client,
}

impl GithubStore {
    /// Creates a store client with the given configuration.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RosterError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.owner,
            self.config.repo,
            self.config.path
        )
    }

    /// Extracts the provider's failure message from an error response,
    /// falling back to the raw body.
    async fn provider_message(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<GithubErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        format!("GitHub API error: {detail} (Status: {status})")
    }
}

#[async_trait::async_trait]
impl RemoteStore for GithubStore {
    #[instrument(skip(self), fields(path = %self.config.path))]
    async fn read(&self) -> Result<RemoteDocument> {
        let response = self
            .http_client
            .get(self.contents_url())
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(|e| RosterError::remote(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RosterError::NotFound(self.config.path.clone()));
        }
        if !response.status().is_success() {
            return Err(RosterError::remote(Self::provider_message(response).await));
        }

        let body: ContentsResponse = response
            .json()
            .await
            .map_err(|e| RosterError::remote(e.to_string()))?;

        // GitHub wraps the base64 payload at 60 columns with raw newlines.
        let raw = BASE64
            .decode(body.content.replace('\n', ""))
            .map_err(|e| RosterError::remote(format!("Invalid base64 content: {e}")))?;
        let content = String::from_utf8(raw)
            .map_err(|e| RosterError::remote(format!("File is not valid UTF-8: {e}")))?;

        debug!(bytes = content.len(), sha = %body.sha, "Read remote file");

        Ok(RemoteDocument {
            content,
            version: VersionToken::new(body.sha),
        })
    }

    #[instrument(skip(self, content), fields(path = %self.config.path, bytes = content.len()))]
    async fn write(&self, content: &str, version: &VersionToken, message: &str) -> Result<()> {
        let body = UpdateRequest {
            message,
            content: BASE64.encode(content),
            sha: version.as_str(),
        };

        let response = self
            .http_client
            .put(self.contents_url())
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", "application/vnd.github.v3+json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RosterError::remote(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                debug!(%version, "Replaced remote file");
                Ok(())
            }
            // GitHub rejects a stale blob sha with 409, and a sha that no
            // longer matches any blob with 422.
            reqwest::StatusCode::CONFLICT | reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
                Err(RosterError::Conflict)
            }
            reqwest::StatusCode::NOT_FOUND => Err(RosterError::NotFound(self.config.path.clone())),
            _ => Err(RosterError::remote(Self::provider_message(response).await)),
        }
    }
}

/// Contents API read response (fields we use).
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

/// Contents API update request.
#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    message: &'a str,
    content: String,
    sha: &'a str,
}

/// Error payload GitHub returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct GithubErrorBody {
    message: String,
}
