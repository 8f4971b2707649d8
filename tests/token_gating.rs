//! Verifies that every token-gated endpoint fails before any request is
//! sent when the required token is missing.

use maccas_client::types::request::ActivationRequest;
use maccas_client::types::request::RegistrationRequest;
use maccas_client::ClientError;
use maccas_client::MaccasClient;
use maccas_client::TokenKind;
use reqwest_middleware::ClientBuilder;
use reqwest_middleware::ClientWithMiddleware;

fn http_client() -> ClientWithMiddleware {
    ClientBuilder::new(reqwest::Client::new()).build()
}

fn assert_missing(err: ClientError, kind: TokenKind) {
    match err {
        ClientError::MissingToken { kind: actual } => assert_eq!(actual, kind),
        other => panic!("expected missing {kind} token, got {other:?}"),
    }
}

#[tokio::test]
async fn login_endpoints_require_login_token() {
    let http = http_client();
    let client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());

    let err = client.customer_login("user@example.com", "hunter2", "sensor").await.unwrap_err();
    assert_missing(err, TokenKind::Login);

    let err = client
        .customer_registration(&RegistrationRequest::default(), "sensor")
        .await
        .unwrap_err();
    assert_missing(err, TokenKind::Login);

    let err = client.activate_customer(&ActivationRequest::default()).await.unwrap_err();
    assert_missing(err, TokenKind::Login);
}

#[tokio::test]
async fn customer_endpoints_require_auth_token() {
    let http = http_client();
    let client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());

    let err = client.customer_login_refresh("refresh-token").await.unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client.get_offers(10000.0, -32.0117, 115.8845, "", 480).await.unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client.offer_details(166870).await.unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client.get_offers_dealstack(480, 951488).await.unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client.add_to_offers_dealstack(1139347703, 480, 951488).await.unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client
        .remove_from_offers_dealstack(1139347703, "166870", 480, 951488)
        .await
        .unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client.restaurant_location(20.0, -32.0117, 115.8845, "summary").await.unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client.get_restaurant(951488, "full", "NSN").await.unwrap_err();
    assert_missing(err, TokenKind::Auth);

    let err = client.get_customer_points().await.unwrap_err();
    assert_missing(err, TokenKind::Auth);
}

#[tokio::test]
async fn auth_token_does_not_satisfy_login_endpoints() {
    let http = http_client();
    let mut client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());
    client.set_auth_token("auth-token");

    let err = client.customer_login("user@example.com", "hunter2", "sensor").await.unwrap_err();
    assert_missing(err, TokenKind::Login);
}
