use std::sync::Arc;

use serde_json::json;
use vektora_api::types::{NewUser, Quotation, QuotationAction, User};
use vektora_api::{
    Client, Error, ListQuery, Locale, SessionSnapshot, SessionStore, LOGIN_REDIRECT,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_with_session(uri: &str, session: SessionStore) -> Client {
    Client::with_base_url(uri, Arc::new(session))
}

fn signed_in_session() -> SessionStore {
    let store = SessionStore::in_memory();
    store.login(
        SessionSnapshot {
            token: Some("test-token".to_string()),
            branch_code: Some("IST".to_string()),
            locale: Some(Locale::German),
            ..SessionSnapshot::default()
        },
        false,
    );
    store
}

#[tokio::test]
async fn list_users_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/User"))
        .and(query_param("pageNumber", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("users.json")))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let page = client.list::<User>(&ListQuery::default()).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].username, "ayse.yilmaz");
    assert_eq!(page.total_count, 42);
    assert_eq!(page.page_size, 20);
}

#[tokio::test]
async fn session_headers_are_attached() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/User"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("x-language", "de"))
        .and(header("x-branch-code", "IST"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("users.json")))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), signed_in_session());
    assert!(client.list::<User>(&ListQuery::default()).await.is_ok());
}

#[tokio::test]
async fn failed_envelope_surfaces_server_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Kullanıcı oluşturulamadı",
            "data": null,
            "errors": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let payload = NewUser {
        username: "x".to_string(),
        email: "x@example.com".to_string(),
        first_name: "X".to_string(),
        last_name: "Y".to_string(),
        password: "secret".to_string(),
        is_active: true,
    };
    let err = client.create::<User>(&payload).await.unwrap_err();
    match err {
        Error::UnexpectedResponse { message } => {
            assert_eq!(message, "Kullanıcı oluşturulamadı");
        }
        other => panic!("expected UnexpectedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_message_falls_back_to_joined_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/User/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "",
            "data": null,
            "errors": ["alan zorunlu", "değer geçersiz"]
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let err = client.get_by_id::<User>(7).await.unwrap_err();
    assert_eq!(err.to_string(), "alan zorunlu, değer geçersiz");
}

#[tokio::test]
async fn non_2xx_prefers_envelope_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/User"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "Sunucu hatası",
            "exceptionMessage": "NullReferenceException",
            "data": null,
            "errors": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let err = client.list::<User>(&ListQuery::default()).await.unwrap_err();
    match err {
        Error::HttpStatus { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Sunucu hatası");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_clears_session_and_yields_redirect() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/User"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), signed_in_session());
    assert!(client.session().token().is_some());

    let err = client.list::<User>(&ListQuery::default()).await.unwrap_err();
    match err {
        Error::SessionExpired { redirect } => assert_eq!(redirect, LOGIN_REDIRECT),
        other => panic!("expected SessionExpired, got {:?}", other),
    }
    assert_eq!(client.session().token(), None);
    assert!(!client.session().is_authenticated_now());
}

#[tokio::test]
async fn login_success_returns_session_payload() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("login.json")))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let response = client
        .login(&vektora_api::types::LoginRequest {
            username: "ayse.yilmaz".to_string(),
            password: "secret".to_string(),
            branch_code: None,
            remember_me: true,
        })
        .await
        .unwrap();

    assert_eq!(response.user.username, "ayse.yilmaz");
    assert_eq!(response.branches.len(), 2);
    assert!(response.token.starts_with("eyJ"));
}

#[tokio::test]
async fn login_401_is_invalid_credentials_not_expiry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let err = client
        .login(&vektora_api::types::LoginRequest {
            username: "ayse.yilmaz".to_string(),
            password: "wrong".to_string(),
            branch_code: None,
            remember_me: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
}

#[tokio::test]
async fn delete_accepts_ack_without_data() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/User/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Silindi",
            "data": null,
            "errors": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    assert!(client.delete::<User>(3).await.is_ok());
}

#[tokio::test]
async fn successful_envelope_without_data_is_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "",
            "data": null,
            "errors": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let err = client.list::<User>(&ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse { .. }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/User"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let err = client.list::<User>(&ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn quotation_reject_posts_the_reason() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Quotation/101/reject"))
        .and(body_json(json!({ "reason": "limit aşıldı" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "",
            "data": {
                "id": 101,
                "quotationNumber": "QT-2024-0042",
                "customerName": "Anadolu Makina A.Ş.",
                "totalAmount": 185000.5,
                "currency": "TRY",
                "status": "rejected",
                "validUntil": "2024-06-30",
                "createdDate": "2024-05-02T11:20:00Z",
                "createdBy": "mehmet.kaya"
            },
            "errors": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_session(&mock_server.uri(), SessionStore::in_memory());
    let quotation: Quotation = client
        .quotation_action(
            101,
            &QuotationAction::Reject {
                reason: "limit aşıldı".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        quotation.status,
        vektora_api::types::QuotationStatus::Rejected
    );
}
