pub mod settings;

pub use settings::{HttpConfig, LogFormat, LoggingConfig, Settings, SheetsConfig};
