//! Auth sub-client — login, profile, session teardown.

use serde_json::Value;

use crate::client::PanelClient;
use crate::error::ApiError;
use crate::http::{Body, RequestOptions};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a PanelClient,
}

impl<'a> Auth<'a> {
    /// Log in with username and password.
    ///
    /// The legacy endpoint takes multipart form fields. On success the
    /// backend sets the session cookie that authenticates every later call.
    pub async fn login(&self, username: &str, password: &str) -> Result<Value, ApiError> {
        let fields = vec![
            ("username", username.to_string()),
            ("password", password.to_string()),
        ];
        self.client
            .http
            .request(
                self.client.endpoints.auth.login,
                RequestOptions::post(Body::Form(fields)),
            )
            .await
    }

    /// Fetch the logged-in user's profile.
    pub async fn profile(&self) -> Result<Value, ApiError> {
        self.client
            .http
            .request(self.client.endpoints.auth.profile, RequestOptions::get())
            .await
    }

    /// End the session.
    ///
    /// Session teardown mutates server state, so it goes over POST like the
    /// other writes.
    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.client
            .http
            .request(
                self.client.endpoints.auth.logout,
                RequestOptions::post(Body::None),
            )
            .await
    }
}
