//! App state: sync service, notifier handle, config.

use std::sync::Arc;

use roster_cache::MemoryCache;
use roster_core::error::Result;
use roster_notify::{NotifierConfig, TelegramNotifier};
use roster_store::{GithubStore, StoreConfig};
use roster_sync::SyncService;

/// API configuration, assembled from the environment at process start.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Remote store (GitHub) settings.
    pub store: StoreConfig,
    /// Notification channel (Telegram) settings.
    pub notifier: NotifierConfig,
}

const DEFAULT_REPO_OWNER: &str = "bowowiwendi";
const DEFAULT_REPO_NAME: &str = "ipvps";
const DEFAULT_FILE_PATH: &str = "main/ip";

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::new(DEFAULT_REPO_OWNER, DEFAULT_REPO_NAME, DEFAULT_FILE_PATH, ""),
            notifier: NotifierConfig::new(""),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the environment (and `.env` if present).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        config.store.token = std::env::var("GITHUB_TOKEN").unwrap_or_default();
        if let Ok(owner) = std::env::var("REPO_OWNER") {
            config.store.owner = owner;
        }
        if let Ok(repo) = std::env::var("REPO_NAME") {
            config.store.repo = repo;
        }
        if let Ok(path) = std::env::var("FILE_PATH") {
            config.store.path = path;
        }
        config.notifier.token = std::env::var("TELEGRAM_TOKEN").ok();
        config.notifier.chat_id = std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default();

        config
    }
}

/// Concrete orchestrator wiring used by the HTTP surface.
pub type RosterService = SyncService<GithubStore, MemoryCache, TelegramNotifier>;

/// Shared application state.
pub struct AppState {
    /// Loaded configuration.
    pub config: ApiConfig,
    /// The CRUD orchestrator.
    pub service: RosterService,
    /// Notification channel handle, shared with the orchestrator. Kept
    /// separately so configuration endpoints can save the token and
    /// register the webhook at runtime.
    pub notifier: Arc<TelegramNotifier>,
}

impl AppState {
    /// Wires up the collaborators from configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let store = GithubStore::with_config(config.store.clone())?;
        let notifier = Arc::new(TelegramNotifier::with_config(config.notifier.clone())?);
        let service = SyncService::new(store, MemoryCache::new(), notifier.clone());

        Ok(Self {
            config,
            service,
            notifier,
        })
    }
}
