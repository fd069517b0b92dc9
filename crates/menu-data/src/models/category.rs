use serde::{Deserialize, Serialize};

use super::language::{Language, LocalizedText};

/// Menu section, e.g. "Soups"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    /// Matches `MenuItem::category` and doubles as a translation key
    pub key: String,
    #[serde(default)]
    pub sort_order: i64,
    pub name: LocalizedText,
}

impl MenuCategory {
    /// Display name for `lang`, falling back to the key when the sheet cell was empty
    pub fn display_name(&self, lang: Language) -> &str {
        self.name.non_empty(lang).unwrap_or(&self.key)
    }
}

/// Stable ordering by `sort_order`; ties keep their original position.
pub fn sort_for_display(categories: &[MenuCategory]) -> Vec<&MenuCategory> {
    let mut sorted: Vec<&MenuCategory> = categories.iter().collect();
    sorted.sort_by_key(|category| category.sort_order);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(key: &str, sort_order: i64) -> MenuCategory {
        MenuCategory {
            key: key.to_string(),
            sort_order,
            name: LocalizedText::new("", key, ""),
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let categories = vec![
            category("Main", 2),
            category("Drinks", 1),
            category("Sides", 2),
            category("Soups", 1),
        ];
        let keys: Vec<&str> = sort_for_display(&categories)
            .into_iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["Drinks", "Soups", "Main", "Sides"]);
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let soups = category("Soups", 1);
        assert_eq!(soups.display_name(Language::En), "Soups");
        assert_eq!(soups.display_name(Language::Ka), "Soups");
    }
}
