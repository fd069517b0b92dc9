use menu_data::config::{HttpConfig, LoggingConfig, Settings, SheetsConfig};
use menu_data::{fallback, DataLoader, Language, Session, SnapshotStore};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MENU: &str = "id\tnameKa\tnameEn\tnameRu\tprice\tdescriptionKa\tdescriptionEn\tdescriptionRu\tcategory\tisSpecial\timageUrl\tglovoLink\twoltLink\tboltLink\r\n\
m1\tსაქონლის გულაში\tBeef Goulash\tГовяжий гуляш\t9.5\tნაზი საქონლის ხორცი\tTender beef\tНежная говядина\tMain\tTRUE\t\t\thttps://wolt.test/m1\t\r\n\
s1\tკარტოფილის ფიურე\tMashed Potatoes\tКартофельное пюре\t4\t\t\t\tSides\tFALSE\thttps://img.test/s1.jpg\r\n";

const CATEGORIES: &str = "key\tsortOrder\tnameKa\tnameEn\tnameRu\r\n\
Sides\t2\tგარნირი\tSide Dishes\tГарниры\r\n\
Main\t1\tმთავარი\tMain Dishes\tОсновные блюда\r\n";

const CONFIG: &str = "key\tvalue\r\n\
addressKa\tთბილისი, პეკინის გამზირი 15\r\n\
addressEn\t15 Pekini Ave, Tbilisi\r\n\
addressRu\tТбилиси, проспект Пекина 15\r\n\
phone\t+995 551 51 55 11\r\n\
hoursOpen\t09:00\r\n\
hoursClose\t22:00\r\n\
deliveryGlovo\thttps://glovo.test\r\n\
deliveryBolt\thttps://bolt.test\r\n\
socialsInstagram\thttps://instagram.test\r\n";

const UI_TEXT: &str = "key\tKA\tEN\tRU\r\n\
menuButton\tმენიუ\tMenu\tМеню\r\n\
all\tყველა\tAll\tВсе\r\n";

async fn mount(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn settings(base: &str) -> Settings {
    Settings {
        sheets: SheetsConfig {
            menu_url: format!("{}/menu", base),
            config_url: format!("{}/config", base),
            ui_text_url: format!("{}/ui-text", base),
            categories_url: format!("{}/categories", base),
        },
        http: HttpConfig {
            timeout_seconds: 5,
            ..HttpConfig::default()
        },
        logging: LoggingConfig::default(),
    }
}

/// Server publishing all four sheets; `failing` answers with HTTP 500 instead
async fn sheet_server(failing: Option<&str>) -> MockServer {
    let server = MockServer::start().await;
    for (route, body) in [
        ("/menu", MENU),
        ("/categories", CATEGORIES),
        ("/config", CONFIG),
        ("/ui-text", UI_TEXT),
    ] {
        if Some(route) == failing {
            mount(&server, route, 500, "Internal Server Error").await;
        } else {
            mount(&server, route, 200, body).await;
        }
    }
    server
}

#[tokio::test]
async fn test_live_load_builds_full_snapshot() {
    let server = sheet_server(None).await;
    let loader = DataLoader::from_settings(&settings(&server.uri()));

    let snapshot = loader.load().await;

    assert!(!snapshot.is_fallback);
    assert_eq!(snapshot.menu.len(), 2);
    assert_eq!(snapshot.categories.len(), 2);

    let goulash = snapshot.item("m1").unwrap();
    assert_eq!(goulash.price, 9.5);
    assert!(goulash.is_special);
    assert_eq!(goulash.description(Language::Ru), Some("Нежная говядина"));

    let mash = snapshot.item("s1").unwrap();
    assert_eq!(mash.image_url.as_deref(), Some("https://img.test/s1.jpg"));
    assert_eq!(mash.description(Language::En), None);

    assert_eq!(snapshot.config.phone, "+995 551 51 55 11");
    assert_eq!(snapshot.config.hours.close, "22:00");
    assert_eq!(snapshot.t(Language::Ru, "all"), "Все");
    assert_eq!(snapshot.t(Language::En, "nonexistentKey"), "nonexistentKey");

    let order: Vec<&str> = snapshot
        .categories_in_display_order()
        .iter()
        .map(|c| c.key.as_str())
        .collect();
    assert_eq!(order, vec!["Main", "Sides"]);
}

#[tokio::test]
async fn test_category_names_resolve_through_t() {
    let server = sheet_server(None).await;
    let snapshot = DataLoader::from_settings(&settings(&server.uri())).load().await;

    for category in &snapshot.categories {
        for lang in Language::ALL {
            assert_eq!(snapshot.t(lang, &category.key), category.name.get(lang));
            assert_ne!(snapshot.t(lang, &category.key), category.key);
        }
    }
}

#[tokio::test]
async fn test_delivery_options_merge_item_and_business_links() {
    let server = sheet_server(None).await;
    let snapshot = DataLoader::from_settings(&settings(&server.uri())).load().await;
    let session = Session::new(std::sync::Arc::new(snapshot), Language::En);

    let goulash = session.snapshot().item("m1").unwrap().clone();
    let urls: Vec<String> = session
        .delivery_options(&goulash)
        .into_iter()
        .map(|option| option.url)
        .collect();
    assert_eq!(urls, vec!["https://glovo.test", "https://wolt.test/m1", "https://bolt.test"]);
}

#[tokio::test]
async fn test_single_failing_sheet_selects_fallback_entirely() {
    for failing in ["/menu", "/categories", "/config", "/ui-text"] {
        let server = sheet_server(Some(failing)).await;
        let snapshot = DataLoader::from_settings(&settings(&server.uri())).load().await;

        assert!(snapshot.is_fallback, "failing sheet {}", failing);
        assert_eq!(snapshot, fallback::snapshot(), "failing sheet {}", failing);
        assert!(snapshot.item("m1").is_none());
    }
}

#[tokio::test]
async fn test_html_sign_in_page_selects_fallback() {
    for html_route in ["/config", "/ui-text"] {
        let server = MockServer::start().await;
        mount(&server, html_route, 200, "<!DOCTYPE html><html><body>Sign in</body></html>").await;
        for (route, body) in [
            ("/menu", MENU),
            ("/categories", CATEGORIES),
            ("/config", CONFIG),
            ("/ui-text", UI_TEXT),
        ] {
            if route != html_route {
                mount(&server, route, 200, body).await;
            }
        }

        let snapshot = DataLoader::from_settings(&settings(&server.uri())).load().await;
        assert!(snapshot.is_fallback, "html served on {}", html_route);
        assert_eq!(snapshot, fallback::snapshot(), "html served on {}", html_route);
    }
}

#[tokio::test]
async fn test_unreachable_source_selects_fallback() {
    // reserve a free port, then close it so connections are refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let snapshot = DataLoader::from_settings(&settings(&base)).load().await;
    assert!(snapshot.is_fallback);
    assert_eq!(snapshot.t(Language::Ka, "Soups"), "წვნიანები");
}

#[tokio::test]
async fn test_reload_is_idempotent() {
    let server = sheet_server(None).await;
    let loader = DataLoader::from_settings(&settings(&server.uri()));
    let store = SnapshotStore::new();

    let first = loader.load_into(&store).await;
    let second = loader.load_into(&store).await;

    assert_eq!(*first, *second);
    assert_eq!(*store.current().unwrap(), *second);
}
