use std::sync::{Arc, Mutex};
use std::time::Duration;

use api::{Credentials, HttpVerifier, Verifier, VerifyError};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use signin::{content, Language, Phase, PhoneAuthState};

/// Requests seen by the mock endpoint: content type and raw body.
#[derive(Clone, Default)]
struct Received(Arc<Mutex<Vec<(Option<String>, String)>>>);

async fn spawn_endpoint(status: StatusCode) -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route(
            "/api/verify",
            post(
                move |State(received): State<Received>, headers: HeaderMap, body: String| async move {
                    let content_type = headers
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    received.0.lock().unwrap().push((content_type, body));
                    status
                },
            ),
        )
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/verify"), received)
}

fn credentials() -> Credentials {
    Credentials {
        phone: "+4560550709".to_string(),
        code: "123456".to_string(),
    }
}

#[tokio::test]
async fn test_accepted_code() {
    let (url, received) = spawn_endpoint(StatusCode::OK).await;
    let verifier = HttpVerifier::new(url);

    verifier.verify(&credentials()).await.unwrap();

    let received = received.0.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "phone": "+4560550709", "code": "123456" })
    );
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    let (url, _) = spawn_endpoint(StatusCode::NO_CONTENT).await;
    assert!(HttpVerifier::new(url).verify(&credentials()).await.is_ok());
}

#[tokio::test]
async fn test_rejected_code() {
    let (url, _) = spawn_endpoint(StatusCode::UNAUTHORIZED).await;

    let err = HttpVerifier::new(url)
        .verify(&credentials())
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::Rejected { status: 401 }));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpVerifier::new(format!("http://{addr}/api/verify"))
        .verify(&credentials())
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::Network(_)));
}

#[tokio::test]
async fn test_rejection_shows_auth_error() {
    let (url, received) = spawn_endpoint(StatusCode::FORBIDDEN).await;
    let verifier = HttpVerifier::new(url);

    let mut form = PhoneAuthState::new(Language::En, Duration::from_millis(100));
    form.input_phone("+4560550709");
    for (i, c) in "123456".chars().enumerate() {
        form.input_code(i, &c.to_string());
    }

    let request = form.begin_submit().unwrap();
    assert_eq!(request, credentials());
    let outcome = verifier.verify(&request).await;
    assert!(!form.finish_submit(outcome));

    assert_eq!(form.auth_error(), Some(content(Language::En).btn.error));
    assert_eq!(form.phase(), Phase::SubmitError);
    assert_eq!(form.phone(), "+4560550709");
    assert_eq!(form.code().as_string(), "123456");
    assert_eq!(received.0.lock().unwrap().len(), 1);
}
