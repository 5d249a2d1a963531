//! API client tests
//!
//! Checks method, path, bearer token and form body of every endpoint
//! against a mock Quizlet API.

mod common;

use common::MockData;
use pretty_assertions::assert_eq;
use quizlet_api_client::{
    Error, QuizletClient,
    api::{NewSet, Term},
    cli::walkthrough::walkthrough,
};
use rstest::rstest;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const READ: &str = "Bearer read-token";
const WRITE: &str = "Bearer write-token";

fn client(server: &MockServer) -> QuizletClient {
    QuizletClient::new(
        reqwest::Client::new(),
        format!("{}/2.0", server.uri()),
        MockData::tokens(),
    )
}

#[tokio::test]
async fn test_create_set_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2.0/sets"))
        .and(header("authorization", WRITE))
        .and(header("cache-control", "no-cache"))
        .and(body_string(
            "title=title&lang_definitions=en&lang_terms=en\
             &terms%5B%5D=term1&definitions%5B%5D=def1\
             &terms%5B%5D=term2&definitions%5B%5D=def2",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"set_id":415}"#))
        .expect(1)
        .mount(&server)
        .await;

    let set = NewSet::new(
        "title",
        vec![Term::new("term1", "def1"), Term::new("term2", "def2")],
    );
    let body = client(&server).create_set(&set).await.unwrap();

    assert_eq!(body, r#"{"set_id":415}"#);
}

#[tokio::test]
async fn test_create_set_needs_two_terms() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let set = NewSet::new("title", vec![Term::new("only", "one")]);
    let err = client(&server).create_set(&set).await.unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
}

#[rstest]
#[case::set_terms("/2.0/sets/415/terms")]
#[case::set_details("/2.0/sets/415")]
#[case::user_details("/2.0/users/u")]
#[tokio::test]
async fn test_read_endpoints_use_read_token(#[case] endpoint: &str) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("authorization", READ))
        .respond_with(ResponseTemplate::new(200).set_body_string(endpoint))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let body = match endpoint {
        "/2.0/sets/415/terms" => client.set_terms(415).await,
        "/2.0/sets/415" => client.set_details(415).await,
        _ => client.user_details("u").await,
    }
    .unwrap();

    assert_eq!(body, endpoint);
}

#[tokio::test]
async fn test_add_term() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2.0/sets/415/terms"))
        .and(header("authorization", WRITE))
        .and(body_string("term=term4&definition=definition4"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":7}"#))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server)
        .add_term(415, &Term::new("term4", "definition4"))
        .await
        .unwrap();

    assert_eq!(body, r#"{"id":7}"#);
}

#[tokio::test]
async fn test_edit_term() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/2.0/sets/415/terms/7"))
        .and(header("authorization", WRITE))
        .and(body_string("term=new_term&definition=new_definition"))
        .respond_with(ResponseTemplate::new(200).set_body_string("edited"))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server)
        .edit_term(415, 7, &Term::new("new_term", "new_definition"))
        .await
        .unwrap();

    assert_eq!(body, "edited");
}

#[tokio::test]
async fn test_delete_endpoints_use_write_token() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/2.0/sets/415/terms/7"))
        .and(header("authorization", WRITE))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/2.0/sets/415"))
        .and(header("authorization", WRITE))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    assert_eq!(client.delete_term(415, 7).await.unwrap(), "");
    assert_eq!(client.delete_set(415).await.unwrap(), "");
}

#[tokio::test]
async fn test_edit_set_replaces_terms() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/2.0/sets/415"))
        .and(header("authorization", WRITE))
        .and(body_string(
            "title=renamed&terms%5B%5D=a&definitions%5B%5D=b",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(&server)
        .edit_set(415, "renamed", &[Term::new("a", "b")])
        .await
        .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_error_status_body_is_returned() {
    let server = MockServer::start().await;
    let error_body = r#"{"http_code":404,"error":"set_not_found"}"#;
    Mock::given(method("GET"))
        .and(path("/2.0/sets/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string(error_body))
        .mount(&server)
        .await;

    let body = client(&server).set_details(1).await.unwrap();

    assert_eq!(body, error_body);
}

#[tokio::test]
async fn test_walkthrough_sequence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2.0/sets"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"set_id":415}"#))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/2.0/sets/415/terms"))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"7"}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/2.0/sets/415/terms/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut steps = Vec::new();
    walkthrough(&client(&server), "u", |step, _| steps.push(step.to_string()))
        .await
        .unwrap();

    assert_eq!(
        steps,
        vec![
            "create set",
            "set terms",
            "set details",
            "add term",
            "edit term",
            "delete term",
            "user details",
            "delete set",
        ]
    );

    let calls: Vec<(String, String)> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("POST".to_string(), "/2.0/sets".to_string()),
            ("GET".to_string(), "/2.0/sets/415/terms".to_string()),
            ("GET".to_string(), "/2.0/sets/415".to_string()),
            ("POST".to_string(), "/2.0/sets/415/terms".to_string()),
            ("PUT".to_string(), "/2.0/sets/415/terms/7".to_string()),
            ("DELETE".to_string(), "/2.0/sets/415/terms/7".to_string()),
            ("GET".to_string(), "/2.0/users/u".to_string()),
            ("DELETE".to_string(), "/2.0/sets/415".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_walkthrough_stops_without_set_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2.0/sets"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid"}"#))
        .mount(&server)
        .await;

    let result = walkthrough(&client(&server), "u", |_, _| {}).await;

    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
