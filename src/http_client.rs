//! Authenticated HTTP client with automatic credential header propagation
//!
//! Wraps `reqwest::Client` so every call carries the stored credential pair
//! and every reply is scanned for rotated credentials, without callers ever
//! touching tokens. The two phases are plain methods (`credential_headers`,
//! `settle`) so each is testable without a live server.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::navigator::Navigator;
use crate::session::SessionContext;

/// Response/request header carrying the refresh token. No scheme prefix.
pub const REFRESH_TOKEN_HEADER: &str = "refresh-token";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://api.example.com`. No trailing slash.
    pub base_url: String,

    /// Login screen path; target of the unauthorized redirect, and the one
    /// location where a 401 does not trigger another redirect.
    pub login_path: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login_path: "/login".to_string(),
        }
    }
}

/// HTTP client bound to a session context and a navigator.
///
/// Side effects per call are confined to two storage reads (request phase),
/// up to two storage writes (response phase), and possibly one full-page
/// navigation on 401. No retries: refresh-and-replay is the caller's concern.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    http: Client,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            config,
            session,
            navigator,
            http,
        })
    }

    /// The session context this client reads and rotates credentials through.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Request phase: turn the stored credential pair into outbound headers.
    ///
    /// Pure function of storage: repeating it with unchanged tokens yields
    /// identical headers. A token that cannot be encoded as a header value
    /// fails the call before anything is dispatched.
    pub fn credential_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(token) = self.session.access_token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::RequestPreparation(format!("access token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(token) = self.session.refresh_token() {
            let value = HeaderValue::from_str(&token)
                .map_err(|e| ClientError::RequestPreparation(format!("refresh token: {e}")))?;
            headers.insert(HeaderName::from_static(REFRESH_TOKEN_HEADER), value);
        }

        Ok(headers)
    }

    /// Pull rotated credentials out of reply headers and overwrite storage.
    /// Full overwrite, no merge; concurrent rotations are last-write-wins.
    fn harvest_rotated_tokens(&self, headers: &HeaderMap) {
        if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            self.session.set_access_token(strip_bearer(value));
            debug!("access token rotated");
        }

        if let Some(value) = headers
            .get(REFRESH_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            self.session.set_refresh_token(value);
            debug!("refresh token rotated");
        }
    }

    /// Response phase: harvest rotation headers, handle the unauthorized
    /// redirect, and convert non-success statuses into errors.
    ///
    /// Rotation headers are harvested on 2xx and on 403. The backend also
    /// rotates credentials on some 200 replies it delivers as failures;
    /// the 2xx arm covers those. Harvesting never masks the failure itself.
    async fn settle(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() || status == StatusCode::FORBIDDEN {
            self.harvest_rotated_tokens(response.headers());
        }

        if status == StatusCode::UNAUTHORIZED {
            let here = self.navigator.current_path();
            if here != self.config.login_path {
                warn!(path = %here, "unauthorized session, redirecting to login");
                self.navigator.replace(&self.config.login_path);
            }
        }

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Dispatch one call: attach credentials, send, settle the reply.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let headers = self.credential_headers()?;
        let url = format!("{}{}", self.config.base_url, path);

        debug!(method = %method, path = %path, "dispatching request");

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(path = %path, error = %e, "no response from server");
            ClientError::NetworkUnreachable(e.to_string())
        })?;

        self.settle(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request::<()>(Method::GET, path, None).await?;
        Ok(response.json().await?)
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::POST, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::PUT, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::PATCH, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }
}

/// Strip a case-insensitive `Bearer` scheme plus one separating whitespace
/// run from a header value.
///
/// Prefix match only: content past the token survives verbatim. A value
/// without the scheme is returned as-is.
pub fn strip_bearer(value: &str) -> &str {
    if let Some(scheme) = value.get(..6) {
        if scheme.eq_ignore_ascii_case("bearer") {
            let rest = &value[6..];
            let trimmed = rest.trim_start();
            if trimmed.len() < rest.len() {
                return trimmed;
            }
        }
    }
    value
}
