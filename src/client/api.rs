//! Nexhale REST API client
//!
//! Thin typed wrapper over the backend's JSON endpoints. Every call carries
//! the session's bearer token when one is set.

use super::dto::*;
use super::error::{ClientError, ClientResult};
use crate::tracking::{LeaderboardEntry, LeaderboardKind, MoodCount};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Longest `Retry-After` the client will wait out
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// Connection settings for the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    /// Bearer token from a previous login
    pub token: Option<String>,
    pub request_timeout_secs: u64,
    /// Attempts for idempotent requests
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            request_timeout_secs: 30,
            max_retries: 3,
        }
    }
}

/// Nexhale backend client
pub struct NexhaleClient {
    client: Client,
    config: ClientConfig,
}

impl NexhaleClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the session token, e.g. after login
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.config.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.config.token.is_some()
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(endpoint));
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ============================================
    // Generic verbs
    // ============================================

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let mut last_error = ClientError::Unavailable;
        let attempts = self.config.max_retries.max(1);

        for attempt in 0..attempts {
            if attempt > 0 {
                // 1s, 4s, 9s...
                let delay = Duration::from_secs((attempt as u64).pow(2));
                tokio::time::sleep(delay).await;
            }

            debug!(endpoint, attempt, "GET");
            match self.request(Method::GET, endpoint).query(query).send().await {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    if let Some(delay) =
                        rate_limit_delay(retry_after(&response), attempt, attempts)
                    {
                        tokio::time::sleep(delay).await;
                    }
                    last_error = ClientError::RateLimited;
                }
                Ok(response) => return read_response(response).await,
                Err(e) => {
                    last_error = map_transport_error(e);
                    if !last_error.is_retryable() {
                        return Err(last_error);
                    }
                }
            }
        }

        Err(last_error)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_once(Method::POST, endpoint, Some(body)).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_once(Method::PATCH, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        self.send_once::<(), T>(Method::DELETE, endpoint, None).await
    }

    /// Non-idempotent requests are never retried
    async fn send_once<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        debug!(endpoint, %method, "sending");
        let mut builder = self.request(method, endpoint);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimited);
        }
        read_response(response).await
    }

    // ============================================
    // Auth
    // ============================================

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &body).await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<AuthResponse> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/register", &body).await
    }

    // ============================================
    // Stats
    // ============================================

    /// Current month's totals, or the given month's
    pub async fn summary(&self, month: Option<MonthSelector>) -> ClientResult<StatsSummary> {
        self.get("/stats/summary", &month_query(month)).await
    }

    pub async fn daily_stats(&self) -> ClientResult<Vec<IntakePoint>> {
        self.get("/stats/daily", &[]).await
    }

    pub async fn weekly_stats(&self, month: Option<MonthSelector>) -> ClientResult<Vec<IntakePoint>> {
        self.get("/stats/weekly", &month_query(month)).await
    }

    pub async fn monthly_stats(&self) -> ClientResult<Vec<IntakePoint>> {
        self.get("/stats/monthly", &[]).await
    }

    pub async fn mood_stats(&self) -> ClientResult<Vec<MoodCount>> {
        self.get("/stats/moods", &[]).await
    }

    pub async fn health_stats(&self) -> ClientResult<HealthStats> {
        self.get("/stats/health", &[]).await
    }

    /// Today's ranking, lowest intake first
    pub async fn leaderboard(&self, kind: LeaderboardKind) -> ClientResult<Vec<LeaderboardEntry>> {
        let query = [
            ("type", kind.as_str().to_string()),
            ("period", "daily".to_string()),
        ];
        self.get("/leaderboard", &query).await
    }

    // ============================================
    // Quit plan and logging
    // ============================================

    pub async fn quit_plan(&self) -> ClientResult<QuitPlanResponse> {
        self.get("/quit-plan", &[]).await
    }

    /// Caller validates the limit first (`tracking::validate_limit`)
    pub async fn set_quit_plan(&self, nicotine_limit: f64) -> ClientResult<serde_json::Value> {
        self.post("/quit-plan", &SetQuitPlanRequest { nicotine_limit })
            .await
    }

    pub async fn log_smoking(&self, entry: &SmokingLogRequest) -> ClientResult<serde_json::Value> {
        self.post("/quit-plan/log", entry).await
    }

    pub async fn log_vape(&self, entry: &VapeLogRequest) -> ClientResult<serde_json::Value> {
        self.post("/quit-plan/log-vape", entry).await
    }

    pub async fn brands(&self) -> ClientResult<Vec<RemoteBrand>> {
        self.get("/brands", &[]).await
    }

    // ============================================
    // Profile
    // ============================================

    pub async fn profile(&self) -> ClientResult<UserProfile> {
        self.get("/user/profile", &[]).await
    }

    pub async fn update_profile(
        &self,
        update: &UpdateProfileRequest,
    ) -> ClientResult<serde_json::Value> {
        self.patch("/user/profile", update).await
    }

    pub async fn change_email(
        &self,
        new_email: &str,
        password: &str,
    ) -> ClientResult<serde_json::Value> {
        let body = ChangeEmailRequest {
            new_email: new_email.to_string(),
            password: password.to_string(),
        };
        self.post("/user/change-email", &body).await
    }
}

fn month_query(month: Option<MonthSelector>) -> Vec<(&'static str, String)> {
    match month {
        Some(m) => vec![("month", m.month.to_string()), ("year", m.year.to_string())],
        None => Vec::new(),
    }
}

/// Wait before retrying a 429; none after the final attempt
fn rate_limit_delay(retry_after: Option<u64>, attempt: u32, attempts: u32) -> Option<Duration> {
    if attempt + 1 >= attempts {
        return None;
    }
    retry_after.map(|secs| Duration::from_secs(secs.min(MAX_RETRY_AFTER_SECS)))
}

fn retry_after(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn map_transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else if e.is_connect() {
        ClientError::Unavailable
    } else {
        ClientError::Request(e)
    }
}

async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let text = response.text().await.map_err(map_transport_error)?;
    decode_body(status, &text)
}

/// Turn a status and body into a value or the matching error
pub(crate) fn decode_body<T: DeserializeOwned>(status: StatusCode, text: &str) -> ClientResult<T> {
    if status.is_success() {
        // Some endpoints answer 204 or an empty 200
        let text = if text.trim().is_empty() { "null" } else { text };
        return Ok(serde_json::from_str(text)?);
    }

    let message = error_message(status, text);
    if status == StatusCode::UNAUTHORIZED {
        Err(ClientError::Unauthorized(message))
    } else {
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn error_message(status: StatusCode, text: &str) -> String {
    let from_json = serde_json::from_str::<ErrorBody>(text)
        .ok()
        .and_then(|body| body.message);

    match from_json {
        Some(message) => message,
        None if !text.trim().is_empty() => text.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert!(config.token.is_none());
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_url_joining() {
        let client = NexhaleClient::new(ClientConfig {
            base_url: "http://example.test/api/".into(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(client.url("/stats/summary"), "http://example.test/api/stats/summary");
        assert_eq!(client.url("brands"), "http://example.test/api/brands");
    }

    #[test]
    fn test_token_management() {
        let mut client = NexhaleClient::new(ClientConfig::default()).unwrap();
        assert!(!client.has_token());

        client.set_token("abc");
        assert_eq!(client.config().token.as_deref(), Some("abc"));

        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn test_bearer_header() {
        let mut client = NexhaleClient::new(ClientConfig::default()).unwrap();
        client.set_token("secret");

        let request = client.request(Method::GET, "/brands").build().unwrap();
        let auth = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer secret");
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/brands");
    }

    #[test]
    fn test_month_query() {
        let query = month_query(Some(MonthSelector { month: 3, year: 2026 }));
        assert_eq!(query, vec![("month", "3".to_string()), ("year", "2026".to_string())]);
        assert!(month_query(None).is_empty());
    }

    #[test]
    fn test_rate_limit_delay() {
        assert_eq!(rate_limit_delay(Some(5), 0, 3), Some(Duration::from_secs(5)));
        assert_eq!(
            rate_limit_delay(Some(86_400), 1, 3),
            Some(Duration::from_secs(MAX_RETRY_AFTER_SECS))
        );
        assert_eq!(rate_limit_delay(None, 0, 3), None);
        // Last attempt returns RateLimited straight away
        assert_eq!(rate_limit_delay(Some(5), 2, 3), None);
        assert_eq!(rate_limit_delay(Some(5), 0, 1), None);
    }

    #[test]
    fn test_decode_success() {
        let brands: Vec<RemoteBrand> =
            decode_body(StatusCode::OK, r#"[{"id": 2, "displayName": "Other"}]"#).unwrap();
        assert_eq!(brands[0].id, 2);

        let empty: serde_json::Value = decode_body(StatusCode::NO_CONTENT, "").unwrap();
        assert!(empty.is_null());
    }

    #[test]
    fn test_decode_errors() {
        let err = decode_body::<serde_json::Value>(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Token expired"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "Token expired"));

        let err =
            decode_body::<serde_json::Value>(StatusCode::BAD_REQUEST, r#"{"error": "Bad date"}"#)
                .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 400, ref message } if message == "Bad date"));

        let err = decode_body::<serde_json::Value>(StatusCode::BAD_GATEWAY, "upstream down")
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 502, ref message } if message == "upstream down"));

        let err = decode_body::<serde_json::Value>(StatusCode::NOT_FOUND, "").unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, ref message } if message == "Not Found"));
    }

    #[test]
    fn test_decode_bad_json() {
        let err = decode_body::<StatsSummary>(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = NexhaleClient::new(ClientConfig {
            base_url: "http://127.0.0.1:9/api".into(),
            max_retries: 1,
            request_timeout_secs: 2,
            ..Default::default()
        })
        .unwrap();

        let err = client.brands().await.unwrap_err();
        assert!(matches!(err, ClientError::Unavailable | ClientError::Timeout));
    }
}
