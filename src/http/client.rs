//! Low-level request executor — `PanelHttp`.
//!
//! One network request per call: join the base path and endpoint, attach
//! credentials, decode the JSON body, and normalize every failure into
//! [`ApiError`]. The high-level facade in `client.rs` wraps this.

use crate::error::ApiError;

use reqwest::{Client, Method};
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Request body kind.
///
/// The legacy endpoints (login, trade execution) take multipart form fields;
/// the newer ones (positions, deposits) take JSON.
#[derive(Debug, Clone, Default)]
pub enum Body {
    #[default]
    None,
    /// JSON-serialized body, sent with the JSON content-type.
    Json(Value),
    /// Multipart form fields. No content-type is set for these so the
    /// transport supplies its own boundary header.
    Form(Vec<(&'static str, String)>),
}

/// Per-call options merged over the executor defaults; per-call values win.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Body,
    pub query: Vec<(&'static str, String)>,
    /// Extra headers. Applied before the body, so an explicit content-type
    /// here wins over the JSON default.
    pub headers: Vec<(&'static str, String)>,
}

impl RequestOptions {
    /// A read: GET, no body.
    pub fn get() -> Self {
        Self::default()
    }

    /// A write: POST with the given body.
    pub fn post(body: Body) -> Self {
        Self {
            method: Method::POST,
            body,
            ..Self::default()
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Set an extra header for this call.
    pub fn header(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((key, value.into()));
        self
    }
}

/// Low-level HTTP client for the panel backend.
///
/// Credential inclusion is always on: native builds carry a cookie jar for
/// the backend session cookie; on WASM the browser attaches it itself.
#[derive(Clone)]
pub struct PanelHttp {
    base_url: String,
    client: Client,
}

impl PanelHttp {
    pub fn new(base_url: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .cookie_store(true)
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one request against `base_url + path`.
    ///
    /// The response body is decoded as JSON whatever the status code; a body
    /// that does not parse is reported as a transport failure even when the
    /// status itself already signals an error, matching the backend contract
    /// that every response is JSON.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %options.method, url = %url, "issuing request");

        let mut req = self.client.request(options.method, &url);
        if !options.query.is_empty() {
            req = req.query(&options.query);
        }
        for (key, value) in options.headers {
            req = req.header(key, value);
        }
        req = match options.body {
            Body::None => req,
            Body::Json(v) => req.json(&v),
            Body::Form(fields) => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                req.multipart(form)
            }
        };

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        let payload: Value = serde_json::from_str(&text)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "request failed");
            return Err(ApiError::http(status.as_u16(), payload));
        }

        Ok(payload)
    }
}
