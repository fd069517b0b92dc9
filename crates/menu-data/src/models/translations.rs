use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::MenuCategory;
use super::language::Language;

/// language -> (text key -> localized string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTable {
    entries: BTreeMap<Language, BTreeMap<String, String>>,
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationTable {
    /// Empty table with a slot for every supported language
    pub fn new() -> Self {
        let entries = Language::ALL
            .iter()
            .map(|lang| (*lang, BTreeMap::new()))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, lang: Language, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(lang)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Raw entry; empty strings count as missing
    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&lang)
            .and_then(|texts| texts.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Localized text for `key`, or the key itself when unresolved
    pub fn lookup<'a>(&'a self, lang: Language, key: &'a str) -> &'a str {
        self.get(lang, key).unwrap_or(key)
    }

    pub fn contains(&self, lang: Language, key: &str) -> bool {
        self.get(lang, key).is_some()
    }

    /// Number of keys stored for `lang`
    pub fn len(&self, lang: Language) -> usize {
        self.entries.get(&lang).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(BTreeMap::is_empty)
    }

    /// Inject every category's display names under its key, one entry per
    /// language. A missing name still yields an entry holding the key.
    pub fn fold_categories(&mut self, categories: &[MenuCategory]) {
        for category in categories {
            for lang in Language::ALL {
                let name = category.display_name(lang).to_string();
                self.insert(lang, category.key.clone(), name);
            }
        }
    }

    /// Copy of `self` with the category fold applied
    pub fn with_categories(mut self, categories: &[MenuCategory]) -> Self {
        self.fold_categories(categories);
        self
    }
}

/// Text lookup bound to one language
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    lang: Language,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable, lang: Language) -> Self {
        Self { table, lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn t(&self, key: &str) -> String {
        self.table.lookup(self.lang, key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedText;

    #[test]
    fn test_missing_key_echoes_key() {
        let table = TranslationTable::new();
        assert_eq!(table.lookup(Language::En, "nonexistentKey"), "nonexistentKey");
        let translator = Translator::new(&table, Language::Ka);
        assert_eq!(translator.language(), Language::Ka);
        assert_eq!(translator.t("nonexistentKey"), "nonexistentKey");
    }

    #[test]
    fn test_empty_value_echoes_key() {
        let mut table = TranslationTable::new();
        table.insert(Language::Ru, "menuButton", "");
        assert_eq!(table.lookup(Language::Ru, "menuButton"), "menuButton");
        assert!(!table.contains(Language::Ru, "menuButton"));
    }

    #[test]
    fn test_fold_categories() {
        let mut table = TranslationTable::new();
        table.insert(Language::En, "all", "All");

        let categories = vec![
            MenuCategory {
                key: "Soups".to_string(),
                sort_order: 1,
                name: LocalizedText::new("წვნიანები", "Soups", "Супы"),
            },
            MenuCategory {
                key: "Drinks".to_string(),
                sort_order: 2,
                name: LocalizedText::new("", "Beverages", ""),
            },
        ];
        table.fold_categories(&categories);

        assert_eq!(table.lookup(Language::Ka, "Soups"), "წვნიანები");
        assert_eq!(table.lookup(Language::Ru, "Soups"), "Супы");
        assert_eq!(table.lookup(Language::En, "Drinks"), "Beverages");
        // no localized name: the entry exists and holds the key
        assert_eq!(table.get(Language::Ka, "Drinks"), Some("Drinks"));
        assert_eq!(table.lookup(Language::En, "all"), "All");
    }
}
