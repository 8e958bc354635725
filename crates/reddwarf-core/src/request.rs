//! HTTP request descriptors handed from the binding layer to a dispatcher
//!
//! The core never performs I/O. Handlers describe a call as an
//! [`HttpRequest`] (method, endpoint, headers, optional payload); binders fill
//! in the payload; a dispatcher sends it.

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

use crate::error::{CoreError, Result};

/// Media type set on JSON payloads
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP methods used by the Reddwarf API
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request body with its content type
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payload {
    body: String,
    content_type: String,
}

impl Payload {
    /// A JSON body
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: APPLICATION_JSON.to_string(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// An HTTP request ready for dispatch
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpRequest {
    method: Method,
    endpoint: Url,
    headers: BTreeMap<String, String>,
    payload: Option<Payload>,
}

impl HttpRequest {
    /// Create a request without headers or payload
    pub fn new(method: Method, endpoint: Url) -> Self {
        Self {
            method,
            endpoint,
            headers: BTreeMap::new(),
            payload: None,
        }
    }

    /// Create a request for `base` extended by the given path segments
    ///
    /// Segments are percent-encoded, so user and database names containing
    /// `/` or spaces stay a single path segment.
    pub fn to_path(method: Method, base: &Url, segments: &[&str]) -> Result<Self> {
        Ok(Self::new(method, endpoint_with_path(base, segments)?))
    }

    /// Add or replace a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace the payload
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }
}

/// Append path segments to a base endpoint
pub fn endpoint_with_path(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| CoreError::Validation(format!("endpoint '{base}' cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
