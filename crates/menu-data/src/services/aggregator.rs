use std::sync::Arc;
use tracing::{info, warn};

use super::fetchers::SheetFetcher;
use super::sheet_source::{HttpSheetSource, SheetSource};
use super::store::SnapshotStore;
use crate::config::Settings;
use crate::fallback;
use crate::models::AppDataSnapshot;
use crate::utils::error::SheetResult;

/// Runs load cycles: all four sheets live, or the whole fallback dataset.
#[derive(Clone)]
pub struct DataLoader {
    fetcher: SheetFetcher,
}

impl DataLoader {
    pub fn new(fetcher: SheetFetcher) -> Self {
        Self { fetcher }
    }

    pub fn with_source(source: Arc<dyn SheetSource>, settings: &Settings) -> Self {
        Self::new(SheetFetcher::new(source, settings.sheets.clone()))
    }

    /// Loader over HTTP, configured from `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        let source = Arc::new(HttpSheetSource::new(&settings.http));
        Self::with_source(source, settings)
    }

    /// One full load cycle. Never fails: any fetch error is logged here and
    /// turns the whole snapshot into fallback data.
    pub async fn load(&self) -> AppDataSnapshot {
        match self.load_live().await {
            Ok(snapshot) => {
                info!(
                    "✅ Loaded live data: {} items, {} categories",
                    snapshot.menu.len(),
                    snapshot.categories.len()
                );
                let orphaned = snapshot.orphaned_categories();
                if !orphaned.is_empty() {
                    warn!("Menu items reference unknown categories: {:?}", orphaned);
                }
                snapshot
            }
            Err(e) => {
                warn!(
                    error = %e,
                    kind = e.kind(),
                    "Could not load live data from the spreadsheet, using fallback data"
                );
                fallback::snapshot()
            }
        }
    }

    /// Run a load cycle and publish its result once it is complete
    pub async fn load_into(&self, store: &SnapshotStore) -> Arc<AppDataSnapshot> {
        let snapshot = self.load().await;
        store.publish(snapshot)
    }

    async fn load_live(&self) -> SheetResult<AppDataSnapshot> {
        let (menu, categories, config, translations) = tokio::try_join!(
            self.fetcher.fetch_menu(),
            self.fetcher.fetch_categories(),
            self.fetcher.fetch_business_config(),
            self.fetcher.fetch_translations(),
        )?;

        Ok(AppDataSnapshot::assemble(
            menu,
            categories,
            config,
            translations,
            false,
        ))
    }
}
