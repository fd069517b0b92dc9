pub mod business;
pub mod category;
pub mod language;
pub mod menu;
pub mod snapshot;
pub mod translations;

pub use business::{BusinessConfig, OpeningHours, SocialPlatform};
pub use category::MenuCategory;
pub use language::{Language, LocalizedText, UnknownLanguage};
pub use menu::{resolve_delivery_options, DeliveryOption, DeliveryService, MenuItem};
pub use snapshot::AppDataSnapshot;
pub use translations::{TranslationTable, Translator};
