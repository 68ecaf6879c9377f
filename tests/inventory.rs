use std::time::Duration;
use steam_inventory_checker::{
    Error,
    GamesList,
    InventoryChecker,
    ProfileId,
    SteamID,
    USER_AGENT_STRING,
    enums::Language,
    report::write_report,
};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::matchers::{header, method, path, query_param};

const INVENTORY_PATH: &str = "/id/tempo_218/inventory/";

fn profile() -> ProfileId {
    ProfileId::Vanity("tempo_218".into())
}

fn checker(server: &MockServer) -> InventoryChecker {
    InventoryChecker::builder(profile())
        .hostname(server.uri())
        .build()
        .unwrap()
}

fn report(games: &GamesList) -> String {
    let mut output = Vec::new();
    
    write_report(&mut output, games).unwrap();
    
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn reports_games_from_inventory_page() {
    let server = MockServer::start().await;
    let body = r#"...var g_rgAppContextData = {"2":{"appid":730,"name":"CS:GO","asset_count":5}};..."#;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(query_param("l", "russian"))
        .and(query_param("count", "1"))
        .and(header("user-agent", USER_AGENT_STRING))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    
    let games = checker(&server).try_get_inventory_games().await.unwrap();
    
    assert_eq!(games.len(), 1);
    assert_eq!(report(&games), "Found games:\nCS:GO (AppID: 730) - 5 items\n");
}

#[tokio::test]
async fn http_error_gives_empty_report() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
        .mount(&server)
        .await;
    
    let checker = checker(&server);
    let result = checker.try_get_inventory_games().await;
    
    assert!(matches!(result, Err(Error::Http(status)) if status.as_u16() == 404));
    
    let games = checker.get_inventory_games().await;
    
    assert!(games.is_empty());
    assert_eq!(report(&games), "Found games:\n");
}

#[tokio::test]
async fn page_without_app_context_data_is_empty() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>This profile is private.</body></html>"))
        .mount(&server)
        .await;
    
    let games = checker(&server).try_get_inventory_games().await.unwrap();
    
    assert!(games.is_empty());
    assert_eq!(report(&games), "Found games:\n");
}

#[tokio::test]
async fn malformed_app_context_data_is_empty() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"var g_rgAppContextData = {"2":{"appid":};"#))
        .mount(&server)
        .await;
    
    let games = checker(&server).try_get_inventory_games().await.unwrap();
    
    assert!(games.is_empty());
}

#[tokio::test]
async fn entry_that_is_not_an_object_fails_check() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"var g_rgAppContextData = {"2":{"appid":730,"name":"CS:GO","asset_count":5},"5":7};"#
        ))
        .mount(&server)
        .await;
    
    let checker = checker(&server);
    let result = checker.try_get_inventory_games().await;
    
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
    assert!(checker.get_inventory_games().await.is_empty());
}

#[tokio::test]
async fn fetch_returns_status_with_body() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .mount(&server)
        .await;
    
    let (body, status) = checker(&server).fetch().await.unwrap();
    
    assert_eq!(body, "busy");
    assert_eq!(status.as_u16(), 503);
}

#[tokio::test]
async fn sends_configured_headers_and_language() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path("/profiles/76561198080179568/inventory/"))
        .and(query_param("l", "english"))
        .and(query_param("count", "1"))
        .and(header("user-agent", "inventory-test"))
        .and(header("accept-language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"var g_rgAppContextData = {"753":{"appid":"753","name":"Steam"}};"#
        ))
        .expect(1)
        .mount(&server)
        .await;
    
    let checker = InventoryChecker::builder(ProfileId::from(SteamID::from(76561198080179568)))
        .hostname(server.uri())
        .language(Language::English)
        .user_agent("inventory-test")
        .header("Accept-Language", "en-US")
        .build()
        .unwrap();
    let games = checker.try_get_inventory_games().await.unwrap();
    
    assert_eq!(report(&games), "Found games:\nSteam (AppID: 753) - 0 items\n");
}

#[tokio::test]
async fn headers_replace_default_user_agent() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;
    
    let checker = InventoryChecker::builder(profile())
        .hostname(server.uri())
        .headers([("User-Agent", "Mozilla/5.0")])
        .build()
        .unwrap();
    
    assert!(checker.try_get_inventory_games().await.unwrap().is_empty());
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    let address = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        
        listener.local_addr().unwrap()
    };
    let checker = InventoryChecker::builder(profile())
        .hostname(format!("http://{address}"))
        .build()
        .unwrap();
    let result = checker.try_get_inventory_games().await;
    
    assert!(matches!(result, Err(Error::Network(_))));
    assert!(checker.get_inventory_games().await.is_empty());
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    
    Mock::given(method("GET"))
        .and(path(INVENTORY_PATH))
        .respond_with(ResponseTemplate::new(200)
            .set_body_string("<html></html>")
            .set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    
    let checker = InventoryChecker::builder(profile())
        .hostname(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    
    match checker.fetch().await {
        Err(Error::Network(error)) => assert!(error.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}
