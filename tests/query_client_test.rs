mod common;

use common::{start_word_service, unused_addr};
use std::net::SocketAddr;
use url::Url;
use wordle_assist::client::{QueryClient, QueryError};
use wordle_assist::route::History;
use wordle_assist::session::{FormSession, GENERIC_FAILURE_MESSAGE, RequestOutcome};

fn client_for(addr: SocketAddr) -> QueryClient {
    let url = Url::parse(&format!("http://{addr}/api/WordleAssist")).unwrap();
    QueryClient::new(url)
}

#[tokio::test]
async fn returns_words_in_service_order() {
    let (addr, mut requests) = start_word_service(200, r#"["CRANE","GRAPE"]"#).await;
    let client = client_for(addr);

    let words = client
        .find_matching_words("_RA__", "", "ST")
        .await
        .unwrap();
    assert_eq!(words, ["CRANE", "GRAPE"]);

    let line = requests.recv().await.unwrap();
    assert_eq!(
        line,
        "GET /api/WordleAssist?word=_RA__&include=&exclude=ST HTTP/1.1"
    );
}

#[tokio::test]
async fn empty_pattern_sends_placeholder_word() {
    let (addr, mut requests) = start_word_service(200, "[]").await;
    let client = client_for(addr);

    let words = client.find_matching_words("", "B__R_", "AD").await.unwrap();
    assert!(words.is_empty());

    let line = requests.recv().await.unwrap();
    assert!(line.contains("word=_____&include=B__R_&exclude=AD"), "{line}");
}

#[tokio::test]
async fn duplicates_and_order_are_not_touched() {
    let (addr, _requests) = start_word_service(200, r#"["zebra","ABBEY","zebra"]"#).await;
    let words = client_for(addr)
        .find_matching_words("_____", "", "")
        .await
        .unwrap();
    assert_eq!(words, ["zebra", "ABBEY", "zebra"]);
}

#[tokio::test]
async fn non_success_status_is_request_failed() {
    let (addr, _requests) = start_word_service(500, r#"{"error":"boom"}"#).await;
    let err = client_for(addr)
        .find_matching_words("_O___", "", "")
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::RequestFailed { status: 500 }));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (addr, _requests) = start_word_service(200, r#"{"words":["CRANE"]}"#).await;
    let err = client_for(addr)
        .find_matching_words("_O___", "", "")
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let addr = unused_addr().await;
    let err = client_for(addr)
        .find_matching_words("_O___", "", "")
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn session_settles_from_live_request() {
    let (addr, _requests) = start_word_service(404, "not found").await;
    let client = client_for(addr);
    let mut session = FormSession::new(History::new("/_O___/B__R_/AD"));

    let request = session.begin_search().unwrap();
    let fields = &request.constraints;
    let result = client
        .find_matching_words(fields.pattern(), fields.include(), fields.exclude())
        .await;
    session.settle(request.ticket, result);

    assert_eq!(
        session.outcome(),
        &RequestOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string())
    );
    assert_eq!(
        session.navigator().entries(),
        ["/_O___/B__R_/AD", "/_O___/B__R_/AD"]
    );
}
