use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::business::BusinessConfig;
use super::category::{sort_for_display, MenuCategory};
use super::language::Language;
use super::menu::MenuItem;
use super::translations::{TranslationTable, Translator};

/// One complete, internally consistent set of application data.
/// Built once per load cycle and never mutated after publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDataSnapshot {
    pub menu: Vec<MenuItem>,
    pub categories: Vec<MenuCategory>,
    pub config: BusinessConfig,
    pub translations: TranslationTable,
    pub is_fallback: bool,
}

impl AppDataSnapshot {
    /// Assemble a snapshot and fold category names into the translations
    pub fn assemble(
        menu: Vec<MenuItem>,
        categories: Vec<MenuCategory>,
        config: BusinessConfig,
        translations: TranslationTable,
        is_fallback: bool,
    ) -> Self {
        let translations = translations.with_categories(&categories);
        Self {
            menu,
            categories,
            config,
            translations,
            is_fallback,
        }
    }

    pub fn translator(&self, lang: Language) -> Translator<'_> {
        Translator::new(&self.translations, lang)
    }

    /// `t(key)` for `lang`; echoes the key when unresolved
    pub fn t(&self, lang: Language, key: &str) -> String {
        self.translations.lookup(lang, key).to_string()
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    pub fn category(&self, key: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|category| category.key == key)
    }

    pub fn special_items(&self) -> Vec<&MenuItem> {
        self.menu.iter().filter(|item| item.is_special).collect()
    }

    pub fn items_in_category(&self, key: &str) -> Vec<&MenuItem> {
        self.menu.iter().filter(|item| item.category == key).collect()
    }

    pub fn categories_in_display_order(&self) -> Vec<&MenuCategory> {
        sort_for_display(&self.categories)
    }

    /// Distinct category keys referenced by menu items, sorted.
    /// Orphaned keys (no matching `MenuCategory`) are included.
    pub fn category_keys_in_menu(&self) -> Vec<&str> {
        self.menu
            .iter()
            .map(|item| item.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Item categories that do not resolve to a known category key
    pub fn orphaned_categories(&self) -> Vec<&str> {
        self.category_keys_in_menu()
            .into_iter()
            .filter(|key| self.category(key).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedText;
    use std::collections::BTreeMap;

    fn item(id: &str, category: &str, is_special: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: LocalizedText::new(id, id, id),
            description: LocalizedText::default(),
            price: 5.0,
            category: category.to_string(),
            is_special,
            image_url: None,
            delivery_links: BTreeMap::new(),
        }
    }

    fn category(key: &str, sort_order: i64) -> MenuCategory {
        MenuCategory {
            key: key.to_string(),
            sort_order,
            name: LocalizedText::new(format!("{} ka", key), format!("{} en", key), ""),
        }
    }

    fn snapshot() -> AppDataSnapshot {
        AppDataSnapshot::assemble(
            vec![
                item("m1", "Main", true),
                item("s1", "Sides", false),
                item("d1", "Desserts", false),
                item("m2", "Main", false),
            ],
            vec![category("Sides", 2), category("Main", 1)],
            BusinessConfig::default(),
            TranslationTable::new(),
            false,
        )
    }

    #[test]
    fn test_assemble_folds_category_names() {
        let snapshot = snapshot();
        assert_eq!(snapshot.t(Language::Ka, "Main"), "Main ka");
        assert_eq!(snapshot.t(Language::En, "Sides"), "Sides en");
        // empty Russian name: entry holds the key
        assert_eq!(snapshot.t(Language::Ru, "Sides"), "Sides");
        assert_eq!(snapshot.translator(Language::En).t("Desserts"), "Desserts");
    }

    #[test]
    fn test_derived_views() {
        let snapshot = snapshot();

        let specials: Vec<&str> = snapshot.special_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(specials, vec!["m1"]);

        let mains: Vec<&str> = snapshot.items_in_category("Main").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(mains, vec!["m1", "m2"]);

        let ordered: Vec<&str> = snapshot
            .categories_in_display_order()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(ordered, vec!["Main", "Sides"]);

        assert_eq!(snapshot.category_keys_in_menu(), vec!["Desserts", "Main", "Sides"]);
        assert_eq!(snapshot.orphaned_categories(), vec!["Desserts"]);
        assert!(snapshot.item("s1").is_some());
        assert!(snapshot.item("nope").is_none());
    }

    #[test]
    fn test_snapshot_serializes_for_rendering_layer() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["isFallback"], false);
        assert_eq!(json["menu"][0]["isSpecial"], true);
        assert_eq!(json["translations"]["entries"]["EN"]["Main"], "Main en");
    }
}
