//! Data layer of the restaurant site: fetches the published spreadsheet tabs,
//! parses them into typed records and publishes one consistent snapshot,
//! falling back to bundled data when any tab is unusable.

pub mod config;
pub mod fallback;
pub mod models;
pub mod parser;
pub mod services;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use models::{AppDataSnapshot, Language};
pub use services::{DataLoader, SnapshotStore};
pub use session::Session;
pub use utils::error::SheetError;
