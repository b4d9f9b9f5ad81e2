//! Telegram bot API client.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use roster_core::error::{Result, RosterError};
use roster_core::traits::Notifier;

/// Notifier configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Bot API base URL (overridable for tests).
    pub api_base: String,
    /// Bot token; may also be set at runtime via [`TelegramNotifier::set_token`].
    pub token: Option<String>,
    /// Recipient chat identifier.
    pub chat_id: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.telegram.org".into(),
            token: None,
            chat_id: String::new(),
            timeout_seconds: 30,
        }
    }
}

impl NotifierConfig {
    /// Creates a config for the given recipient.
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            ..Default::default()
        }
    }

    /// Seeds the bot token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Telegram-backed notification sender.
pub struct TelegramNotifier {
    api_base: String,
    chat_id: String,
    token: RwLock<Option<String>>,
    http_client: reqwest::Client,
}

impl TelegramNotifier {
    /// Creates a notifier with the given configuration.
    pub fn with_config(config: NotifierConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RosterError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_base: config.api_base,
            chat_id: config.chat_id,
            token: RwLock::new(config.token),
            http_client,
        })
    }

    /// Replaces the bot token at runtime.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Returns the currently configured bot token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn method_url(&self, token: &str, api_method: &str) -> String {
        format!(
            "{}/bot{token}/{api_method}",
            self.api_base.trim_end_matches('/')
        )
    }

    /// Registers `webhook_url` with the bot provider.
    ///
    /// Unlike `send`, failures here are surfaced: this is a configuration
    /// operation and the caller needs the provider's description.
    #[instrument(skip(self))]
    pub async fn set_webhook(&self, webhook_url: &str) -> Result<()> {
        let token = self
            .token()
            .ok_or_else(|| RosterError::ConfigError("Notifier token not configured".into()))?;

        let response = self
            .http_client
            .get(self.method_url(&token, "setWebhook"))
            .query(&[("url", webhook_url)])
            .send()
            .await
            .map_err(|e| RosterError::NotificationFailed(e.to_string()))?;

        let body: BotApiResponse = response
            .json()
            .await
            .map_err(|e| RosterError::NotificationFailed(e.to_string()))?;

        if !body.ok {
            return Err(RosterError::NotificationFailed(
                body.description.unwrap_or_else(|| "setWebhook rejected".into()),
            ));
        }

        debug!(webhook_url, "Webhook registered");
        Ok(())
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip(self, text))]
    async fn send(&self, text: &str) -> Result<()> {
        let Some(token) = self.token() else {
            debug!("No bot token configured, skipping notification");
            return Ok(());
        };

        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .http_client
            .post(self.method_url(&token, "sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| RosterError::NotificationFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let description = response
                .json::<BotApiResponse>()
                .await
                .ok()
                .and_then(|b| b.description)
                .unwrap_or_else(|| format!("HTTP {status}"));
            warn!(%status, "sendMessage rejected");
            return Err(RosterError::NotificationFailed(description));
        }

        debug!("Notification delivered");
        Ok(())
    }
}

/// `sendMessage` request payload.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every bot API method replies with.
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}
