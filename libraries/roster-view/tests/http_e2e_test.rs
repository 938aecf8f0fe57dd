//! Session scenarios over real HTTP
//!
//! The session talks to a wiremock backend through `RosterClient`, so the
//! status-code classification and the view logic are exercised together.

use roster_client::{ClientConfig, RosterClient};
use roster_view::{ListPhase, Session, SubmitOutcome};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RosterClient {
    RosterClient::new(ClientConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn test_create_ann_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/"))
        .and(body_json(serde_json::json!({
            "name": "Ann",
            "email": "ann@x.com",
            "bio": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 1,
            "name": "Ann",
            "email": "ann@x.com",
            "bio": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut session = Session::new();
    session.mount(&client).await;
    assert!(session
        .list()
        .render()
        .contains("No users found. Add the first user!"));

    session.form_mut().set_name("Ann");
    session.form_mut().set_email("ann@x.com");
    let outcome = session.submit(&client).await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        session.form().message().as_deref(),
        Some("User added successfully!")
    );
    assert_eq!(
        session.list().render(),
        "User list  [Refresh]\nTotal users: 1\n  #1 Ann\n     ann@x.com\n"
    );
}

#[tokio::test]
async fn test_duplicate_email_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Dup", "email": "dup@x.com", "bio": null}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "email exists"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut session = Session::new();
    session.mount(&client).await;

    session.form_mut().set_name("Someone");
    session.form_mut().set_email("dup@x.com");
    let outcome = session.submit(&client).await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::DuplicateEmail {
            detail: "email exists".to_string()
        }
    );
    assert_eq!(
        session.form().message().as_deref(),
        Some("Error: a user with this email already exists")
    );
    assert_eq!(session.form().values().email, "dup@x.com");
    assert_eq!(session.list().users().len(), 1);
}

#[tokio::test]
async fn test_failed_load_then_refresh_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Ann", "email": "ann@x.com", "bio": "hi"},
            {"id": 2, "name": "Bob", "email": "bob@x.com", "bio": null}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut session = Session::new();
    session.mount(&client).await;

    assert_eq!(session.list().phase(), ListPhase::Error);
    assert_eq!(session.list().error(), Some("Failed to load users"));

    session.refresh(&client).await;

    assert_eq!(session.list().phase(), ListPhase::Ready);
    assert!(session.list().error().is_none());
    let text = session.list().render();
    assert!(text.contains("Total users: 2"));
    assert!(text.contains("#1 Ann"));
    assert!(text.contains("     hi\n"));
    assert!(text.contains("#2 Bob"));
}

#[tokio::test]
async fn test_unreachable_backend_end_to_end() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    drop(listener);

    let client = RosterClient::new(ClientConfig::new(url.clone())).unwrap();
    let mut session = Session::new();
    session.mount(&client).await;
    assert_eq!(session.list().phase(), ListPhase::Error);

    session.form_mut().set_name("Ann");
    session.form_mut().set_email("ann@x.com");
    let outcome = session.submit(&client).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Unreachable { base_url: url });
    assert_eq!(session.form().values().name, "Ann");
}

#[tokio::test]
async fn test_backend_closing_connection_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });

    let client = RosterClient::new(ClientConfig::new(url.clone())).unwrap();
    let mut session = Session::new();
    session.form_mut().set_name("Ann");
    session.form_mut().set_email("ann@x.com");
    let outcome = session.submit(&client).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Unreachable { base_url: url });
    assert!(session
        .form()
        .message()
        .unwrap()
        .starts_with("Error: cannot reach the server"));
}
