use crate::{
    AdminUsersResult, AgentKind, AuthResult, PermissionsResult, SessionError, SessionResult,
    TrialResult,
};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for the Oak account REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client using the transport's default timeouts
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.oak.voyage/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> SessionResult<Self> {
        let Some(timeout) = timeout else {
            return Ok(Self::new(base_url));
        };

        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a request with an optional bearer credential
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request and decode the result body.
    ///
    /// Failed operations still answer with `{success: false, message}` under
    /// a 4xx/5xx status, so the body is decoded regardless of status. Only a
    /// body that does not decode is an error.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> SessionResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("API responded {} ({} bytes)", status, bytes.len());

        match serde_json::from_slice::<T>(&bytes) {
            Ok(body) => Ok(body),
            Err(e) if status.is_success() => Err(SessionError::from_json(e)),
            Err(_) => Err(SessionError::unexpected_response(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).chars().take(200).collect::<String>(),
            )),
        }
    }

    // =========================================================================
    // Account
    // =========================================================================

    /// Create an account
    pub async fn register(&self, email: &str, password: &str) -> SessionResult<AuthResult> {
        let body = Credentials { email, password };
        let req = self.request(Method::POST, "/register", None).json(&body);
        self.execute(req).await
    }

    /// Sign in to an existing account
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<AuthResult> {
        let body = Credentials { email, password };
        let req = self.request(Method::POST, "/login", None).json(&body);
        self.execute(req).await
    }

    /// Fetch the profile behind a credential
    pub async fn user_info(&self, token: &str) -> SessionResult<AuthResult> {
        let req = self.request(Method::GET, "/user/info", Some(token));
        self.execute(req).await
    }

    pub async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> SessionResult<AuthResult> {
        #[derive(Serialize)]
        struct ChangePasswordRequest<'a> {
            current_password: &'a str,
            new_password: &'a str,
        }

        let body = ChangePasswordRequest {
            current_password,
            new_password,
        };
        let req = self
            .request(Method::POST, "/user/change-password", Some(token))
            .json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Trials
    // =========================================================================

    /// Spend one trial on `demo_type`
    pub async fn use_trial(&self, token: &str, demo_type: &AgentKind) -> SessionResult<TrialResult> {
        #[derive(Serialize)]
        struct UseTrialRequest<'a> {
            demo_type: &'a AgentKind,
        }

        let req = self
            .request(Method::POST, "/user/use-trial", Some(token))
            .json(&UseTrialRequest { demo_type });
        self.execute(req).await
    }

    /// Read the remaining trials without spending one
    pub async fn check_trial(&self, token: &str) -> SessionResult<TrialResult> {
        let req = self.request(Method::GET, "/user/check-trial", Some(token));
        self.execute(req).await
    }

    pub async fn permissions(&self, token: &str) -> SessionResult<PermissionsResult> {
        let req = self.request(Method::GET, "/user/permissions", Some(token));
        self.execute(req).await
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub async fn admin_users(&self, token: &str) -> SessionResult<AdminUsersResult> {
        let req = self.request(Method::GET, "/admin/users", Some(token));
        self.execute(req).await
    }

    pub async fn admin_reset_trials(
        &self,
        token: &str,
        user_id: i64,
        trial_count: u32,
    ) -> SessionResult<AuthResult> {
        #[derive(Serialize)]
        struct ResetTrialsRequest {
            trial_count: u32,
        }

        let req = self
            .request(
                Method::POST,
                &format!("/admin/users/{}/reset-trials", user_id),
                Some(token),
            )
            .json(&ResetTrialsRequest { trial_count });
        self.execute(req).await
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}
