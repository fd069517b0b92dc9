use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::business::BusinessConfig;
use super::language::{Language, LocalizedText};

/// Delivery services an item can be ordered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryService {
    Glovo,
    Wolt,
    Bolt,
}

impl DeliveryService {
    /// Fixed presentation order in the order modal
    pub const ALL: [DeliveryService; 3] = [
        DeliveryService::Glovo,
        DeliveryService::Wolt,
        DeliveryService::Bolt,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryService::Glovo => "Glovo",
            DeliveryService::Wolt => "Wolt",
            DeliveryService::Bolt => "Bolt",
        }
    }

    /// Menu sheet column holding a per-item override, e.g. `glovoLink`
    pub fn item_column(&self) -> &'static str {
        match self {
            DeliveryService::Glovo => "glovoLink",
            DeliveryService::Wolt => "woltLink",
            DeliveryService::Bolt => "boltLink",
        }
    }

    /// Config sheet key holding the restaurant-wide link, e.g. `deliveryGlovo`
    pub fn config_key(&self) -> &'static str {
        match self {
            DeliveryService::Glovo => "deliveryGlovo",
            DeliveryService::Wolt => "deliveryWolt",
            DeliveryService::Bolt => "deliveryBolt",
        }
    }
}

/// A single dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: LocalizedText,
    /// Empty per language when the sheet has no description
    #[serde(default)]
    pub description: LocalizedText,
    pub price: f64,
    /// Foreign key into `MenuCategory::key`; may be orphaned
    pub category: String,
    #[serde(default)]
    pub is_special: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Per-item delivery overrides, only non-empty links are stored
    #[serde(default)]
    pub delivery_links: BTreeMap<DeliveryService, String>,
}

impl MenuItem {
    pub fn name(&self, lang: Language) -> &str {
        self.name.get(lang)
    }

    pub fn description(&self, lang: Language) -> Option<&str> {
        self.description.non_empty(lang)
    }

    /// Per-item override for a delivery service
    pub fn delivery_link(&self, service: DeliveryService) -> Option<&str> {
        self.delivery_links
            .get(&service)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }
}

/// Resolved order link for one delivery service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryOption {
    pub service: DeliveryService,
    pub url: String,
}

/// Order links for `item`: the item override wins over the restaurant-wide
/// link; services with neither are left out. Order follows `DeliveryService::ALL`.
pub fn resolve_delivery_options(item: &MenuItem, config: &BusinessConfig) -> Vec<DeliveryOption> {
    DeliveryService::ALL
        .iter()
        .filter_map(|service| {
            item.delivery_link(*service)
                .or_else(|| config.delivery_link(*service))
                .map(|url| DeliveryOption {
                    service: *service,
                    url: url.to_string(),
                })
        })
        .collect()
}
