//! Sending [`HttpRequest`]s over HTTP
//!
//! [`Dispatch`] is the seam between the handlers and the network. The
//! handlers describe a call as an `HttpRequest`; a dispatcher sends it and
//! hands back the status and body. [`HttpDispatcher`] does this with
//! `reqwest`, adding the auth token and JSON headers.

use std::time::Duration;

use async_trait::async_trait;
use reddwarf_core::config::Config;
use reddwarf_core::request::{APPLICATION_JSON, HttpRequest, Method};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::{ClientError, Result};

/// User agent sent when the config does not name one
pub const DEFAULT_USER_AGENT: &str = concat!("reddwarf/", env!("CARGO_PKG_VERSION"));

/// Header carrying the Keystone token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Status and body of a dispatched request
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`ClientError::Status`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
                message: self.body,
            })
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends a request and returns the raw response
///
/// Implementations report transport failures as errors and every HTTP
/// status, success or not, as a response.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Dispatch`] over a `reqwest` client
#[derive(Clone, Debug)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl HttpDispatcher {
    /// Build a dispatcher with the given token, timeout and user agent
    pub fn new(auth_token: Option<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, auth_token })
    }

    /// Build a dispatcher from the token and HTTP settings in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        Self::new(config.auth_token.clone(), config.timeout(), user_agent)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Dispatch for HttpDispatcher {
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method(), url = %request.endpoint(), "dispatching request");

        let mut builder = self
            .client
            .request(to_reqwest(request.method()), request.endpoint().clone())
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(token) = &self.auth_token {
            builder = builder.header(AUTH_TOKEN_HEADER, token);
        }
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(payload) = request.payload() {
            trace!(body = payload.body(), "request payload");
            builder = builder
                .header(CONTENT_TYPE, payload.content_type())
                .body(payload.body().to_string());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, url = %request.endpoint(), "received response");
        Ok(HttpResponse::new(status, body))
    }
}
