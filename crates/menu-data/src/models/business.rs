use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::language::{Language, LocalizedText};
use super::menu::DeliveryService;

/// Social profiles shown in the contact section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Whatsapp,
    Facebook,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Instagram,
        SocialPlatform::Whatsapp,
        SocialPlatform::Facebook,
    ];

    /// Config sheet key, e.g. `socialsInstagram`
    pub fn config_key(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "socialsInstagram",
            SocialPlatform::Whatsapp => "socialsWhatsapp",
            SocialPlatform::Facebook => "socialsFacebook",
        }
    }
}

/// Opening hours as display strings; never parsed as times
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessConfig {
    pub address: LocalizedText,
    pub phone: String,
    pub hours: OpeningHours,
    #[serde(default)]
    pub delivery_links: BTreeMap<DeliveryService, String>,
    #[serde(default)]
    pub socials: BTreeMap<SocialPlatform, String>,
}

impl BusinessConfig {
    pub fn address(&self, lang: Language) -> &str {
        self.address.get(lang)
    }

    /// Restaurant-wide link for a delivery service
    pub fn delivery_link(&self, service: DeliveryService) -> Option<&str> {
        self.delivery_links
            .get(&service)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }

    pub fn social_link(&self, platform: SocialPlatform) -> Option<&str> {
        self.socials
            .get(&platform)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }
}
