//! Statically bundled dataset used when live sheets are unavailable.

mod data;

use once_cell::sync::Lazy;

use crate::models::{AppDataSnapshot, BusinessConfig, MenuCategory, MenuItem, TranslationTable};

/// Complete, always-available instance of every domain entity.
/// Translations here are the UI text only; category names are folded in
/// when a snapshot is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackDataset {
    pub menu: Vec<MenuItem>,
    pub categories: Vec<MenuCategory>,
    pub config: BusinessConfig,
    pub translations: TranslationTable,
}

static DATASET: Lazy<FallbackDataset> = Lazy::new(|| FallbackDataset {
    menu: data::menu_items(),
    categories: data::categories(),
    config: data::business_config(),
    translations: data::translations(),
});

pub fn dataset() -> &'static FallbackDataset {
    &DATASET
}

/// Snapshot built entirely from the fallback dataset
pub fn snapshot() -> AppDataSnapshot {
    let dataset = dataset();
    AppDataSnapshot::assemble(
        dataset.menu.clone(),
        dataset.categories.clone(),
        dataset.config.clone(),
        dataset.translations.clone(),
        true,
    )
}

/// UI text keys guaranteed in every language
pub fn ui_keys() -> Vec<&'static str> {
    data::ui_keys().collect()
}
