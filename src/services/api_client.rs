// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here; one method per backend action. The bearer token is
// read from localStorage on every call so there is a single source of truth.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{
    AuthResponse, Comment, CreateTicketRequest, LoginRequest, RegisterRequest, Ticket,
    TicketCategory, TicketFilter, VoteType,
};
use crate::utils::{read_from_storage, STORAGE_KEY_TOKEN};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Decode(String),
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url().to_string(),
        }
    }

    /// Exchange credentials for a user snapshot plus bearer token.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Logging in: {}", request.email);
        self.post_json("/auth/login", request).await
    }

    /// Create an account; same response shape as login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        log::info!("📝 Registering: {}", request.email);
        self.post_json("/auth/register", request).await
    }

    /// Fetch the user behind the stored token.
    pub async fn current_user(&self) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/me", self.base_url);
        let response = self
            .with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }

    /// List tickets, optionally filtered.
    pub async fn tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, ApiError> {
        let query = filter.to_query_string();
        let url = if query.is_empty() {
            format!("{}/tickets", self.base_url)
        } else {
            format!("{}/tickets?{}", self.base_url, query)
        };
        let response = self
            .with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }

    pub async fn create_ticket(&self, request: &CreateTicketRequest) -> Result<Ticket, ApiError> {
        log::info!("🎫 Creating ticket: {}", request.subject);
        self.post_json("/tickets", request).await
    }

    pub async fn categories(&self) -> Result<Vec<TicketCategory>, ApiError> {
        let url = format!("{}/categories", self.base_url);
        let response = self
            .with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }

    pub async fn add_comment(
        &self,
        ticket_id: &str,
        content: &str,
        is_internal: bool,
    ) -> Result<Comment, ApiError> {
        let body = serde_json::json!({
            "content": content,
            "is_internal": is_internal,
        });
        self.post_json(&format!("/tickets/{}/comments", ticket_id), &body)
            .await
    }

    pub async fn vote(&self, ticket_id: &str, vote: VoteType) -> Result<(), ApiError> {
        let body = serde_json::json!({ "type": vote });
        let url = format!("{}/tickets/{}/vote", self.base_url, ticket_id);
        let response = self
            .with_auth(Request::post(&url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response).await
    }

    pub async fn assign(&self, ticket_id: &str, assigned_to_id: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "assigned_to_id": assigned_to_id });
        let url = format!("{}/tickets/{}/assign", self.base_url, ticket_id);
        let response = self
            .with_auth(Request::post(&url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response).await
    }

    /// Attach the bearer header when a token is stored.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match read_from_storage(STORAGE_KEY_TOKEN) {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .with_auth(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle_response(response).await
    }
}

/// Non-2xx responses become errors carrying the body text; callers never see
/// partially parsed success data on failure.
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        format!("HTTP error! status: {}", status)
    } else {
        body
    };
    Err(ApiError::Http { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_server_message() {
        let err = ApiError::Http {
            status: 401,
            message: "invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn http_error_fallback_message_carries_status() {
        let err = ApiError::Http {
            status: 503,
            message: format!("HTTP error! status: {}", 503),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }
}
