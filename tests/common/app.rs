//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use beadgrid::assets::AssetLoader;
use beadgrid::models::AppConfig;
use beadgrid::server::{build_router, create_app_state, AppState};
use beadgrid::services::PaletteStore;

/// Test application with router and direct access to state
pub struct TestApp {
    router: axum::Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        let state = create_app_state(&AssetLoader::new(None, None));
        Self::with_state(state)
    }

    /// Create a test application around custom config and palette
    pub fn with(config: AppConfig, palette: PaletteStore) -> Self {
        Self::with_state(AppState::new(config, palette))
    }

    fn with_state(state: AppState) -> Self {
        // Build router using shared server module (same as production)
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw body
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/octet-stream")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Generate a grid and return the parsed JSON response
    pub async fn generate(&self, query: &str, image: Vec<u8>) -> serde_json::Value {
        let response = self.post_bytes(&format!("/api/grid{query}"), image).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        response.json()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
