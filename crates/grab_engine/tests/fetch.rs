use grab_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn listing_request_sends_browser_user_agent() {
    let server = MockServer::start().await;
    let settings = FetchSettings::default();
    Mock::given(method("GET"))
        .and(path("/r/pics/hot.json"))
        .and(header("user-agent", settings.user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\":{}}"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(&settings).unwrap();
    let url = format!("{}/r/pics/hot.json", server.uri());

    let body = fetcher.fetch_listing(&url).await.expect("listing ok");
    assert_eq!(body, b"{\"data\":{}}");
}

#[tokio::test]
async fn listing_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/private/hot.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(&FetchSettings::default()).unwrap();
    let url = format!("{}/r/private/hot.json", server.uri());

    let err = fetcher.fetch_listing(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(403));
}

#[tokio::test]
async fn download_streams_body_into_file() {
    let server = MockServer::start().await;
    let payload = vec![7u8; 64 * 1024];
    Mock::given(method("GET"))
        .and(path("/i/big.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let target = temp.path().join("big.png");
    let mut file = tokio::fs::File::create(&target).await.unwrap();
    let fetcher = ReqwestFetcher::new(&FetchSettings::default()).unwrap();

    let written = fetcher
        .download(&format!("{}/i/big.png", server.uri()), &mut file)
        .await
        .unwrap();
    drop(file);

    assert_eq!(written, payload.len() as u64);
    assert_eq!(std::fs::read(&target).unwrap(), payload);
}

#[tokio::test]
async fn download_rejects_invalid_url() {
    let temp = TempDir::new().unwrap();
    let mut file = tokio::fs::File::create(temp.path().join("x.jpg"))
        .await
        .unwrap();
    let fetcher = ReqwestFetcher::new(&FetchSettings::default()).unwrap();

    let err = fetcher.download("not a url", &mut file).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
