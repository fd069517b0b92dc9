use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::sheet_source::{SheetKind, SheetSource};
use crate::config::SheetsConfig;
use crate::models::{
    BusinessConfig, DeliveryService, Language, LocalizedText, MenuCategory, MenuItem,
    OpeningHours, SocialPlatform, TranslationTable,
};
use crate::parser::{
    header_languages, parse_key_values, parse_table, parse_translations, Record, TsvTable,
};
use crate::utils::error::{SheetError, SheetResult};

const MENU_REQUIRED_COLUMNS: &[&str] = &["id", "price", "category"];
const CATEGORY_REQUIRED_COLUMNS: &[&str] = &["key"];
const CONFIG_COLUMNS: &[&str] = &["key", "value"];
const CONFIG_FIXED_KEYS: &[&str] = &[
    "addressKa",
    "addressEn",
    "addressRu",
    "phone",
    "hoursOpen",
    "hoursClose",
];

/// One fetch operation per sheet. The operations share nothing but the
/// transport and can run independently of each other.
#[derive(Clone)]
pub struct SheetFetcher {
    source: Arc<dyn SheetSource>,
    sheets: SheetsConfig,
}

impl SheetFetcher {
    pub fn new(source: Arc<dyn SheetSource>, sheets: SheetsConfig) -> Self {
        Self { source, sheets }
    }

    /// Raw TSV text of one sheet; any non-2xx status is an error
    pub async fn fetch_text(&self, sheet: SheetKind) -> SheetResult<String> {
        let url = self.sheets.url(sheet);
        let response = self.source.fetch(url).await?;

        if !response.is_success() {
            return Err(SheetError::Status {
                sheet,
                status: response.status,
            });
        }

        debug!("Fetched {} sheet ({} bytes)", sheet, response.body.len());
        Ok(response.body)
    }

    pub async fn fetch_menu(&self) -> SheetResult<Vec<MenuItem>> {
        let tsv = self.fetch_text(SheetKind::Menu).await?;
        let table = parse_table(&tsv);
        require_columns(SheetKind::Menu, &table, MENU_REQUIRED_COLUMNS)?;

        let items: Vec<MenuItem> = table.records.iter().filter_map(menu_item_from_record).collect();
        debug!("Parsed {} menu items from {} rows", items.len(), table.len());
        Ok(items)
    }

    pub async fn fetch_categories(&self) -> SheetResult<Vec<MenuCategory>> {
        let tsv = self.fetch_text(SheetKind::Categories).await?;
        let table = parse_table(&tsv);
        require_columns(SheetKind::Categories, &table, CATEGORY_REQUIRED_COLUMNS)?;

        Ok(table.records.iter().filter_map(category_from_record).collect())
    }

    pub async fn fetch_business_config(&self) -> SheetResult<BusinessConfig> {
        let tsv = self.fetch_text(SheetKind::Config).await?;
        if parse_table(&tsv).headers.len() < CONFIG_COLUMNS.len() {
            return Err(missing(SheetKind::Config, CONFIG_COLUMNS));
        }

        let values = parse_key_values(&tsv);
        if !values.keys().any(|key| is_config_key(key)) {
            return Err(missing(SheetKind::Config, CONFIG_FIXED_KEYS));
        }

        Ok(business_config_from_values(&values))
    }

    pub async fn fetch_translations(&self) -> SheetResult<TranslationTable> {
        let tsv = self.fetch_text(SheetKind::UiText).await?;
        if header_languages(&tsv).is_empty() {
            let codes: Vec<&str> = Language::ALL.iter().map(Language::code).collect();
            return Err(missing(SheetKind::UiText, &codes));
        }

        Ok(parse_translations(&tsv))
    }
}

fn missing(sheet: SheetKind, columns: &[&str]) -> SheetError {
    SheetError::MissingColumns {
        sheet,
        columns: columns.iter().map(|column| column.to_string()).collect(),
    }
}

/// Whether `key` is one the business config reads
fn is_config_key(key: &str) -> bool {
    CONFIG_FIXED_KEYS.contains(&key)
        || DeliveryService::ALL.iter().any(|service| service.config_key() == key)
        || SocialPlatform::ALL.iter().any(|platform| platform.config_key() == key)
}

fn require_columns(sheet: SheetKind, table: &TsvTable, required: &[&str]) -> SheetResult<()> {
    let columns = table.missing_columns(required);
    if columns.is_empty() {
        Ok(())
    } else {
        Err(SheetError::MissingColumns { sheet, columns })
    }
}

/// `<prefix>Ka`, `<prefix>En`, `<prefix>Ru` columns as one localized value
fn localized(record: &Record, prefix: &str) -> LocalizedText {
    let mut text = LocalizedText::default();
    for lang in Language::ALL {
        let column = format!("{}{}", prefix, lang.column_suffix());
        if let Some(value) = record.text(&column) {
            text.set(lang, value);
        }
    }
    text
}

/// Rows with an empty id or an unusable price are dropped
pub(crate) fn menu_item_from_record(record: &Record) -> Option<MenuItem> {
    let id = record.non_empty("id")?.to_string();

    let price = match record.number("price") {
        Some(price) if price >= 0.0 => price,
        _ => {
            warn!(
                "Skipping menu item {}: invalid price {:?}",
                id,
                record.text("price")
            );
            return None;
        }
    };

    let category = record.text("category").unwrap_or_default().to_string();
    if record.is_partial() {
        debug!("Menu item {} has fewer cells than the header", id);
    }

    let delivery_links = DeliveryService::ALL
        .iter()
        .filter_map(|service| {
            record
                .non_empty(service.item_column())
                .map(|link| (*service, link.to_string()))
        })
        .collect();

    Some(MenuItem {
        id,
        name: localized(record, "name"),
        description: localized(record, "description"),
        price,
        category,
        is_special: record.bool("isSpecial").unwrap_or(false),
        image_url: record.non_empty("imageUrl").map(str::to_string),
        delivery_links,
    })
}

pub(crate) fn category_from_record(record: &Record) -> Option<MenuCategory> {
    let key = record.non_empty("key")?.to_string();
    let sort_order = match record.number("sortOrder") {
        Some(order) if order.fract() != 0.0 => {
            warn!("Category {} has a fractional sortOrder {}, rounding", key, order);
            order.round() as i64
        }
        Some(order) => order as i64,
        None => 0,
    };

    Some(MenuCategory {
        key,
        sort_order,
        name: localized(record, "name"),
    })
}

/// Regroup the flat config sheet into the nested business shape
pub(crate) fn business_config_from_values(values: &BTreeMap<String, String>) -> BusinessConfig {
    let value = |key: &str| values.get(key).cloned().unwrap_or_default();

    let mut address = LocalizedText::default();
    for lang in Language::ALL {
        address.set(lang, value(&format!("address{}", lang.column_suffix())));
    }

    let delivery_links = DeliveryService::ALL
        .iter()
        .filter_map(|service| {
            values
                .get(service.config_key())
                .filter(|link| !link.is_empty())
                .map(|link| (*service, link.clone()))
        })
        .collect();

    let socials = SocialPlatform::ALL
        .iter()
        .filter_map(|platform| {
            values
                .get(platform.config_key())
                .filter(|link| !link.is_empty())
                .map(|link| (*platform, link.clone()))
        })
        .collect();

    BusinessConfig {
        address,
        phone: value("phone"),
        hours: OpeningHours {
            open: value("hoursOpen"),
            close: value("hoursClose"),
        },
        delivery_links,
        socials,
    }
}
