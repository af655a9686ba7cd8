use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::view::DEFAULT_PAGE_SIZE;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the document-management API (e.g., "http://localhost:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL that public document paths are served from.
    #[serde(default = "default_base_url")]
    pub public_base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// List screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Initial page size of every list screen (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// How long transient notices stay visible, in milliseconds (default: 3000).
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

/// Session credential persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Keep the session across restarts (default: true).
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Override for the session file location.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_notice_ttl_ms() -> u64 {
    3000
}

fn default_persist() -> bool {
    true
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl ViewConfig {
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}

impl SessionConfig {
    /// Where the session is stored, or `None` when persistence is off.
    ///
    /// Defaults to `<data dir>/docdesk/session.json`.
    pub fn session_file(&self) -> Option<PathBuf> {
        if !self.persist {
            return None;
        }
        self.file.clone().or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            Some(data_dir.join("docdesk").join("session.json"))
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            file: None,
        }
    }
}
