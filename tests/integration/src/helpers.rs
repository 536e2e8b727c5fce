//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.
//! Servers run over the in-memory store with a fixed clock, so no database
//! is needed.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use hotel_api::{create_app, AppState};
use hotel_common::{
    AppConfig, AppSettings, BookingConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    JwtService, RateLimitConfig, ServerConfig,
};
use hotel_core::{FixedClock, Role};
use hotel_db::MemoryStore;
use hotel_service::ServiceContextBuilder;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const JWT_SECRET: &str = "integration-test-secret";

/// The date every test server believes it is
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default()
}

/// A date in the test year
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, month, day).unwrap_or_default()
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    /// Token of a customer account
    pub customer_token: String,
    /// Token of a second, unrelated customer account
    pub other_customer_token: String,
    /// Token of an employee account
    pub staff_token: String,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let store = Arc::new(MemoryStore::new());
        let jwt = Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
        ));

        let customer = store
            .add_user("guest@example.com", "Ada", "Guest", Role::Customer)
            .await;
        let other = store
            .add_user("other@example.com", "Ben", "Other", Role::Customer)
            .await;
        let staff = store
            .add_user("desk@example.com", "Cleo", "Desk", Role::Employee)
            .await;

        let customer_token = jwt.issue_access_token(customer.id, customer.role)?;
        let other_customer_token = jwt.issue_access_token(other.id, other.role)?;
        let staff_token = jwt.issue_access_token(staff.id, staff.role)?;

        let service_context = ServiceContextBuilder::new()
            .store(Arc::clone(&store))
            .jwt_service(jwt)
            .clock(Arc::new(FixedClock(today())))
            .build()?;

        // Build application
        let app = create_app(AppState::new(service_context, config));

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            customer_token,
            other_customer_token,
            staff_token,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get URL of a versioned API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url(), path)
    }

    /// Make a GET request outside the versioned API
    pub async fn get_root(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.api_url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.api_url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.api_url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.api_url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .patch(self.api_url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.api_url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.api_url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// The rate limit is generous enough for the concurrency tests.
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "hotel-integration".into(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".into(),
            max_connections: 1,
            min_connections: 1,
            migrations_dir: "./migrations".into(),
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.into(),
            access_token_expiry: 3600,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        booking: BookingConfig::default(),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Error body without code: {body}"))
}
