use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// Header naming the caller when the server runs without authentication
pub const ACCOUNT_HEADER: &str = "X-Account-Id";

/// HTTP client for the idm-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub account: Option<String>,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `account` - Optional account sent in the X-Account-Id header
    /// * `token` - Optional JWT sent as a bearer token
    pub fn new(base_url: &str, account: Option<&str>, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            account: account.map(String::from),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Same server, acting as another account.
    ///
    /// The bearer token is dropped: a token names exactly one owner, so it
    /// cannot speak for a different account.
    pub fn for_account(&self, account: &str) -> Self {
        Self {
            account: Some(account.to_string()),
            token: None,
            ..self.clone()
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.with_headers(self.client.request(method, &url))
    }

    /// URL for `path` with `segment` appended as one percent-encoded segment
    #[track_caller]
    fn segment_url(&self, path: &str, segment: &str) -> CliClientResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ClientError::invalid_url(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(format!("{} cannot take a path", self.base_url)))?
            .push(segment);

        Ok(url)
    }

    fn with_headers(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref account) = self.account {
            req = req.header(ACCOUNT_HEADER, account);
        }
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and turn error bodies into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let location = ErrorLocation::from(Location::caller());
        let response = req.send().await?;
        let status = response.status();

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    location,
                });
            }
            Err(e) => return Err(e.into()),
        };

        if !status.is_success() {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::Api {
                code,
                message,
                location,
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Own identity
    // =========================================================================

    /// Register the caller's identity
    pub async fn register(&self, name: &str, email: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            name: &'a str,
            email: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/v1/identity")
            .json(&RegisterRequest { name, email });
        self.execute(req).await
    }

    /// Replace the caller's name and email, and the profile image when given
    pub async fn update(
        &self,
        name: &str,
        email: &str,
        profile_image: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            name: &'a str,
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            profile_image: Option<&'a str>,
        }

        let body = UpdateRequest {
            name,
            email,
            profile_image,
        };
        let req = self.request(Method::PUT, "/api/v1/identity").json(&body);
        self.execute(req).await
    }

    /// Delete the caller's identity
    pub async fn delete(&self) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, "/api/v1/identity");
        self.execute(req).await
    }

    /// Get the caller's identity
    pub async fn get_own(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/identity");
        self.execute(req).await
    }

    // =========================================================================
    // Public reads
    // =========================================================================

    /// Get any owner's identity
    pub async fn get(&self, owner: &str) -> CliClientResult<Value> {
        let url = self.segment_url("/api/v1/identities", owner)?;
        let req = self.with_headers(self.client.request(Method::GET, url));
        self.execute(req).await
    }

    /// Registered owners in registration order
    pub async fn list_users(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/users");
        self.execute(req).await
    }

    /// All identities in registration order
    pub async fn list_identities(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/identities");
        self.execute(req).await
    }

    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/health");
        self.execute(req).await
    }
}
