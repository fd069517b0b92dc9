// ============================================================================
// Bundled fallback content
// Served whenever any live sheet cannot be loaded. Same shape as live data.
// ============================================================================

use std::collections::BTreeMap;

use crate::models::{
    BusinessConfig, DeliveryService, Language, LocalizedText, MenuCategory, MenuItem,
    OpeningHours, SocialPlatform, TranslationTable,
};

pub(super) fn business_config() -> BusinessConfig {
    BusinessConfig {
        address: LocalizedText::new(
            "თბილისი, აკაკი წერეთლის პროსპექტი, 67",
            "Tbilisi, Akaki Tsereteli Avenue, 67",
            "Тбилиси, проспект Акакия Церетели, 67",
        ),
        phone: "+995551515511".to_string(),
        hours: OpeningHours {
            open: "09:00".to_string(),
            close: "22:00".to_string(),
        },
        delivery_links: BTreeMap::from([(
            DeliveryService::Glovo,
            "https://glovoapp.com/ge/en/tbilisi/saojakho-samzareulo-tbi/".to_string(),
        )]),
        socials: BTreeMap::from([
            (SocialPlatform::Instagram, "https://instagram.com".to_string()),
            (SocialPlatform::Whatsapp, "https://wa.me/995551515511".to_string()),
            (SocialPlatform::Facebook, "https://facebook.com".to_string()),
        ]),
    }
}

fn item(
    id: &str,
    name: LocalizedText,
    description: LocalizedText,
    price: f64,
    category: &str,
    is_special: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name,
        description,
        price,
        category: category.to_string(),
        is_special,
        image_url: None,
        delivery_links: BTreeMap::new(),
    }
}

pub(super) fn menu_items() -> Vec<MenuItem> {
    vec![
        item(
            "khachapuri_megrelian",
            LocalizedText::new("მეგრული ხაჭაპური", "Megrelian Khachapuri", "Мегрельский хачапури"),
            LocalizedText::new("სახლური ყველით", "With homemade cheese", "С домашним сыром"),
            18.0,
            "Main",
            true,
        ),
        item(
            "khinkali_meat",
            LocalizedText::new("ხინკალი ხორცით", "Khinkali (Meat)", "Хинкали с мясом"),
            LocalizedText::new("5 ცალი", "5 pieces", "5 штук"),
            12.0,
            "Dumplings",
            false,
        ),
        item(
            "khinkali_cheese",
            LocalizedText::new("ხინკალი ყველით", "Khinkali (Cheese)", "Хинкали с сыром"),
            LocalizedText::new("5 ცალი", "5 pieces", "5 штук"),
            13.0,
            "Dumplings",
            false,
        ),
        item(
            "lobio",
            LocalizedText::new("ლობიო", "Lobio", "Лобио"),
            LocalizedText::new("ტრადიციული", "Traditional", "Традиционное"),
            9.0,
            "Soups",
            true,
        ),
    ]
}

pub(super) fn categories() -> Vec<MenuCategory> {
    let category = |key: &str, sort_order: i64, name: LocalizedText| MenuCategory {
        key: key.to_string(),
        sort_order,
        name,
    };

    vec![
        category("Soups", 1, LocalizedText::new("წვნიანები", "Soups", "Супы")),
        category("Main", 2, LocalizedText::new("მთავარი", "Main", "Основное")),
        category("Dumplings", 3, LocalizedText::new("ხინკალი", "Dumplings", "Хинкали")),
    ]
}

/// (key, KA, EN, RU)
const UI_TEXT: &[(&str, &str, &str, &str)] = &[
    ("heroTitle", "საოჯახო სამზარეულო", "Family Kitchen", "Семейная кухня"),
    ("heroSubtitle", "სახლური გემოები", "Taste of Home", "Домашний вкус"),
    ("menuButton", "მენიუ", "Menu", "Меню"),
    ("backButton", "უკან", "Back", "Назад"),
    ("workingHours", "სამუშაო საათები", "Working Hours", "Часы работы"),
    ("deliveryTitle", "მიტანა", "Delivery", "Доставка"),
    ("address", "მისამართი", "Address", "Адрес"),
    ("hours", "სამუშაო საათები", "Opening Hours", "Часы работы"),
    ("contact", "კონტაქტი", "Contact", "Контакт"),
    ("openInMaps", "გახსენი რუკაზე", "Open in Maps", "Открыть на карте"),
    ("all", "ყველა", "All", "Все"),
    ("phoneLabel", "ტელეფონი", "Phone", "Телефон"),
    ("socials", "სოციალური ქსელები", "Socials", "Социальные сети"),
    (
        "specialOffersTitle",
        "განსაკუთრებული შეთავაზებები",
        "Special Offers",
        "Специальные предложения",
    ),
    ("closeButton", "დახურვა", "Close", "Закрыть"),
    (
        "chooseDeliveryService",
        "აირჩიეთ მიტანის სერვისი",
        "Choose a delivery service",
        "Выберите службу доставки",
    ),
    ("orderOn", "შეუკვეთე", "Order on", "Заказать в"),
    (
        "deliveryNotAvailable",
        "მიტანა ამჟამად მიუწვდომელია",
        "Delivery is not available right now",
        "Доставка сейчас недоступна",
    ),
    ("orderNowButton", "შეუკვეთე ახლა", "Order Now", "Заказать"),
    ("viewFullMenuButton", "სრული მენიუ", "View Full Menu", "Всё меню"),
    (
        "fallbackNotice",
        "ცოცხალი მონაცემები ვერ ჩაიტვირთა. ნაჩვენებია შენახული მონაცემები.",
        "Could not load live content. Displaying locally cached data.",
        "Не удалось загрузить актуальные данные. Показаны сохранённые данные.",
    ),
];

pub(super) fn translations() -> TranslationTable {
    let mut table = TranslationTable::new();
    for (key, ka, en, ru) in UI_TEXT {
        table.insert(Language::Ka, *key, *ka);
        table.insert(Language::En, *key, *en);
        table.insert(Language::Ru, *key, *ru);
    }
    table
}

/// Keys the rendering layer looks up
pub(super) fn ui_keys() -> impl Iterator<Item = &'static str> {
    UI_TEXT.iter().map(|(key, ..)| *key)
}
