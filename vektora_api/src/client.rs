//! HTTP client for the Vektora backend.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::ListQuery,
    session::SessionStore,
    types::{ApiEnvelope, Entity, LoginRequest, LoginResponse, PagedResult, Quotation, QuotationAction},
    ClientConfig, Error,
};

/// Path of the login endpoint. A 401 here means bad credentials, not an
/// expired session.
pub const LOGIN_PATH: &str = "/api/Auth/login";

/// Where the front end navigates after a session expires.
pub const LOGIN_REDIRECT: &str = "/auth/login?sessionExpired=true";

/// HTTP client for the Vektora backend.
///
/// The single point of outbound traffic: every request carries the JSON
/// content type, the current locale as `X-Language`, and, when the session
/// store holds them, a bearer token and an `X-Branch-Code` scope. Each
/// request builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    base_api_url: String,
    session: Arc<SessionStore>,
}

impl Client {
    /// Creates a client for the resolved backend configuration.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Self {
        Self {
            base_api_url: config.api_url.clone(),
            session,
        }
    }

    /// Creates a client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, session: Arc<SessionStore>) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// The session store this client reads headers from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("invalid URL constructed: {}", e);
            Error::InvalidUrl
        })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
        auth_endpoint: bool,
    ) -> Result<ApiEnvelope<T>, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;

        let mut req = client
            .request(method, url)
            .header("content-type", "application/json")
            .header("x-language", self.session.locale().code());
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        if let Some(branch) = self.session.branch_code() {
            req = req.header("x-branch-code", branch);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("request failed: {}", e);
            Error::Transport(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        if status.as_u16() == 401 {
            if auth_endpoint {
                return Err(Error::InvalidCredentials);
            }
            // Global logout: drop both token slots and the snapshot file,
            // then hand the front end its redirect target.
            tracing::warn!("received 401, clearing stored session");
            self.session.clear();
            return Err(Error::SessionExpired {
                redirect: LOGIN_REDIRECT.to_string(),
            });
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            let message = match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body) {
                Ok(envelope) => envelope.failure_message(&snippet),
                Err(_) => snippet,
            };
            tracing::error!("request failed with status {}: {}", status, message);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<ApiEnvelope<T>>(&body).map_err(|e| {
            tracing::error!("failed to decode envelope: {} | body: {}", e, truncate_body(&body));
            Error::Decode(e.to_string())
        })
    }

    /// Fetches one page of `E` records matching the given query.
    pub async fn list<E: Entity>(&self, query: &ListQuery) -> Result<PagedResult<E>, Error> {
        let path = E::RESOURCE.path();
        let url = query.add_to_url(&self.url(path)?);
        self.request::<PagedResult<E>>(Method::GET, url, None, false)
            .await?
            .into_data(&format!("empty response from {}", path))
    }

    /// Fetches a single `E` record by its server-assigned id.
    pub async fn get_by_id<E: Entity>(&self, id: i64) -> Result<E, Error> {
        let path = format!("{}/{}", E::RESOURCE.path(), id);
        self.request::<E>(Method::GET, self.url(&path)?, None, false)
            .await?
            .into_data(&format!("empty response from {}", path))
    }

    /// Creates a new `E` record. The server assigns the id and returns the
    /// stored record.
    pub async fn create<E: Entity>(&self, payload: &E::Create) -> Result<E, Error> {
        let path = E::RESOURCE.path();
        let body = serde_json::to_value(payload).map_err(|e| Error::Decode(e.to_string()))?;
        self.request::<E>(Method::POST, self.url(path)?, Some(body), false)
            .await?
            .into_data(&format!("empty response from {}", path))
    }

    /// Applies a partial update to an existing `E` record and returns the
    /// updated record.
    pub async fn update<E: Entity>(&self, id: i64, payload: &E::Update) -> Result<E, Error> {
        let path = format!("{}/{}", E::RESOURCE.path(), id);
        let body = serde_json::to_value(payload).map_err(|e| Error::Decode(e.to_string()))?;
        self.request::<E>(Method::PUT, self.url(&path)?, Some(body), false)
            .await?
            .into_data(&format!("empty response from {}", path))
    }

    /// Deletes an `E` record. Delete acknowledgements may carry no `data`.
    pub async fn delete<E: Entity>(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{}", E::RESOURCE.path(), id);
        self.request::<serde_json::Value>(Method::DELETE, self.url(&path)?, None, false)
            .await?
            .into_ack(&format!("delete rejected by {}", path))
    }

    /// Signs in. On success the caller decides whether to remember the
    /// session; this method performs no session-store writes itself.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, Error> {
        let body = serde_json::to_value(request).map_err(|e| Error::Decode(e.to_string()))?;
        self.request::<LoginResponse>(Method::POST, self.url(LOGIN_PATH)?, Some(body), true)
            .await?
            .into_data("login succeeded without a session payload")
    }

    /// Requests a quotation workflow transition and returns the quotation
    /// in its new state.
    pub async fn quotation_action(
        &self,
        id: i64,
        action: &QuotationAction,
    ) -> Result<Quotation, Error> {
        let path = format!("/api/Quotation/{}/{}", id, action.path_segment());
        let body = match action.body() {
            Some(payload) => {
                Some(serde_json::to_value(&payload).map_err(|e| Error::Decode(e.to_string()))?)
            }
            None => None,
        };
        self.request::<Quotation>(Method::POST, self.url(&path)?, body, false)
            .await?
            .into_data(&format!("empty response from {}", path))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Server messages are UTF-8 text; cut on a char boundary.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_untouched() {
        assert_eq!(truncate_body("Sunucu hatası"), "Sunucu hatası");
    }

    #[test]
    fn truncation_lands_on_a_char_boundary() {
        let body = "€".repeat(1000);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        // 2000 bytes falls inside a 3-byte char; the cut backs off to 1998.
        assert_eq!(truncated.trim_end_matches("...[truncated]").len(), 1998);
        assert!(truncated.chars().take_while(|c| *c == '€').count() == 666);
    }
}
