//! Integration tests for the onboarding REST surface.
//!
//! Each test spins up an Axum server on a random port over a libSQL file in
//! a temp directory and drives the launch scenarios with reqwest.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::net::TcpListener;
use tokio::time::timeout;

use hub_onboarding::onboarding::{
    CompletionGate, LaunchRouter, OnboardingRouteState, PageCatalog, onboarding_routes,
};
use hub_onboarding::store::{LibSqlBackend, PreferenceStore};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

async fn open_store(path: &Path) -> Arc<dyn PreferenceStore> {
    Arc::new(LibSqlBackend::new_local(path).await.unwrap())
}

/// Start an Axum server on a random port over `store`, return the port.
async fn start_server(store: Arc<dyn PreferenceStore>) -> u16 {
    let router = LaunchRouter::new(
        CompletionGate::new(store),
        Arc::new(PageCatalog::standard().unwrap()),
    );
    let app = onboarding_routes(OnboardingRouteState { router });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

async fn get_json(port: u16, path: &str) -> (u16, Value) {
    let resp = reqwest::get(format!("http://127.0.0.1:{port}{path}"))
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn first_launch_exit_then_main() {
    timeout(TEST_TIMEOUT, async {
        let tmp = tempfile::tempdir().unwrap();
        let port = start_server(open_store(&tmp.path().join("prefs.db")).await).await;

        let (status, body) = get_json(port, "/api/launch").await;
        assert_eq!(status, 200);
        assert_eq!(body["route"], "show_onboarding");

        let client = reqwest::Client::new();
        let resp = client
            .post(format!("http://127.0.0.1:{port}/api/onboarding/exit"))
            .json(&serde_json::json!({"action": "get_started"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let handoff: Value = resp.json().await.unwrap();
        assert_eq!(handoff["action"], "get_started");
        assert_eq!(handoff["destination"], "registration");
        assert_eq!(handoff["persisted"], true);

        let (_, body) = get_json(port, "/api/launch").await;
        assert_eq!(body["route"], "show_main");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn completed_flag_survives_cold_start() {
    timeout(TEST_TIMEOUT, async {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("prefs.db");

        {
            let store = open_store(&path).await;
            assert!(CompletionGate::new(store).set_complete(true).await);
        }

        let port = start_server(open_store(&path).await).await;
        let (_, body) = get_json(port, "/api/launch?deep_link=ticket%2F42").await;
        assert_eq!(body["route"], "show_main");
        assert_eq!(body["extras"]["deep_link"], "ticket/42");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn catalog_endpoints() {
    timeout(TEST_TIMEOUT, async {
        let tmp = tempfile::tempdir().unwrap();
        let port = start_server(open_store(&tmp.path().join("prefs.db")).await).await;

        let (status, body) = get_json(port, "/api/onboarding/pages").await;
        assert_eq!(status, 200);
        let titles: Vec<&str> = body["pages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            [
                "Stay Cool, Stay Comfortable",
                "We've Got You Covered!",
                "Let's Get Started"
            ]
        );

        let (status, _) = get_json(port, "/api/onboarding/pages/3").await;
        assert_eq!(status, 404);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn unknown_exit_action_rejected() {
    timeout(TEST_TIMEOUT, async {
        let tmp = tempfile::tempdir().unwrap();
        let port = start_server(open_store(&tmp.path().join("prefs.db")).await).await;

        let client = reqwest::Client::new();
        let resp = client
            .post(format!("http://127.0.0.1:{port}/api/onboarding/exit"))
            .json(&serde_json::json!({"action": "skip"}))
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_client_error());

        let (_, body) = get_json(port, "/api/onboarding/status").await;
        assert_eq!(body["onboarding_completed"], false);
    })
    .await
    .expect("test timed out");
}
