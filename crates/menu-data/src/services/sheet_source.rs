use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::utils::error::{SheetError, SheetResult};

/// The four independently published sheet tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    Menu,
    Categories,
    Config,
    UiText,
}

impl SheetKind {
    pub const ALL: [SheetKind; 4] = [
        SheetKind::Menu,
        SheetKind::Categories,
        SheetKind::Config,
        SheetKind::UiText,
    ];
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SheetKind::Menu => "menu",
            SheetKind::Categories => "categories",
            SheetKind::Config => "config",
            SheetKind::UiText => "ui_text",
        };
        f.write_str(name)
    }
}

/// Raw transport result; status interpretation is left to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetResponse {
    pub status: u16,
    pub body: String,
}

impl SheetResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Text retrieval transport. Timeouts and cancellation belong to the implementor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch(&self, url: &str) -> SheetResult<SheetResponse>;
}

/// reqwest-backed transport for published spreadsheet exports
#[derive(Clone)]
pub struct HttpSheetSource {
    client: Client,
}

impl HttpSheetSource {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent.clone())
                .build()
                .unwrap_or_else(|e| {
                    warn!("Failed to build HTTP client ({}), using reqwest defaults", e);
                    Client::new()
                }),
        }
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch(&self, url: &str) -> SheetResult<SheetResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SheetError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} -> {}", url, status);
            return Ok(SheetResponse {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(|e| SheetError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(SheetResponse {
            status: status.as_u16(),
            body,
        })
    }
}
