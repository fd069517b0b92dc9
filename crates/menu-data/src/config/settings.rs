use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::services::SheetKind;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Published TSV export locations, one per sheet tab
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub menu_url: String,
    pub config_url: String,
    pub ui_text_url: String,
    pub categories_url: String,
}

impl SheetsConfig {
    pub fn url(&self, sheet: SheetKind) -> &str {
        match sheet {
            SheetKind::Menu => &self.menu_url,
            SheetKind::Config => &self.config_url,
            SheetKind::UiText => &self.ui_text_url,
            SheetKind::Categories => &self.categories_url,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("menu-data/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty, // development
    Json,   // production
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Rolling log directory; stdout only when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "info,menu_data=debug".to_string()
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/settings").required(false))
            // Example: APP_SHEETS__MENU_URL=https://...
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        for sheet in SheetKind::ALL {
            let url = self.sheets.url(sheet);
            if url.trim().is_empty() {
                anyhow::bail!("No URL configured for the {} sheet", sheet);
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("{} sheet URL must be http(s): {}", sheet, url);
            }
        }

        if self.http.timeout_seconds == 0 {
            anyhow::bail!("http.timeout_seconds must be greater than zero");
        }

        Ok(())
    }
}
