use std::sync::Arc;

use crate::models::{
    resolve_delivery_options, AppDataSnapshot, DeliveryOption, Language, MenuItem, Translator,
};
use crate::services::SnapshotStore;

/// Per-visitor view state: the active language plus the snapshot it reads.
/// Created at startup once data is loaded and dropped when the session ends.
#[derive(Debug, Clone)]
pub struct Session {
    snapshot: Arc<AppDataSnapshot>,
    lang: Language,
}

impl Session {
    pub fn new(snapshot: Arc<AppDataSnapshot>, lang: Language) -> Self {
        Self { snapshot, lang }
    }

    /// `None` while the store has not been loaded yet
    pub fn from_store(store: &SnapshotStore, lang: Language) -> Option<Self> {
        store.current().map(|snapshot| Self::new(snapshot, lang))
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn set_language(&mut self, lang: Language) {
        self.lang = lang;
    }

    pub fn snapshot(&self) -> &AppDataSnapshot {
        &self.snapshot
    }

    /// Point the session at a newer snapshot, keeping the language
    pub fn refresh(&mut self, snapshot: Arc<AppDataSnapshot>) {
        self.snapshot = snapshot;
    }

    pub fn translator(&self) -> Translator<'_> {
        self.snapshot.translator(self.lang)
    }

    pub fn t(&self, key: &str) -> String {
        self.snapshot.t(self.lang, key)
    }

    /// Category display text; orphaned keys render as the raw key
    pub fn category_label(&self, key: &str) -> String {
        self.t(key)
    }

    pub fn item_name<'a>(&self, item: &'a MenuItem) -> &'a str {
        item.name(self.lang)
    }

    pub fn item_description<'a>(&self, item: &'a MenuItem) -> Option<&'a str> {
        item.description(self.lang)
    }

    pub fn address(&self) -> &str {
        self.snapshot.config.address(self.lang)
    }

    pub fn delivery_options(&self, item: &MenuItem) -> Vec<DeliveryOption> {
        resolve_delivery_options(item, &self.snapshot.config)
    }

    /// Whether to show the non-blocking "cached data" advisory
    pub fn show_fallback_notice(&self) -> bool {
        self.snapshot.is_fallback
    }
}
