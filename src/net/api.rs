//! JSON request helper for the application's REST endpoints.
//!
//! Client-side (hydrate): requests go through `fetch` via `gloo-net`.
//! Native builds: [`FetchTransport`] reports a network error, so callers and
//! tests plug in their own [`HttpTransport`].
//!
//! ERROR HANDLING
//! ==============
//! [`api_call`] logs every failure and then hands it back to the caller;
//! nothing is retried or swallowed here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde_json::Value;

#[cfg(feature = "hydrate")]
use crate::consts::JSON_CONTENT_TYPE;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Decode(serde_json::Error),
    #[error("unsupported HTTP method: {0}")]
    Method(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(ApiError::Method(s.to_owned())),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<Method> for gloo_net::http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
        }
    }
}

/// A request ready for a transport. Every request carries
/// `Content-Type: application/json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Build a request, serializing `data` as the body when it is truthy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `data` cannot be serialized.
    pub fn new(url: &str, method: Method, data: Option<&Value>) -> Result<Self, ApiError> {
        let body = data
            .filter(|value| is_truthy(value))
            .map(serde_json::to_string)
            .transpose()
            .map_err(ApiError::Encode)?;
        Ok(Self {
            url: url.to_owned(),
            method,
            body,
        })
    }
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` are falsy; arrays
/// and objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Sends a request and returns the raw response body.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError>;
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
const FETCH_UNAVAILABLE: &str = "fetch is not available outside the browser";

/// `fetch`-backed transport. Only functional in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::RequestBuilder::new(&request.url)
                .method(request.method.into())
                .header("Content-Type", JSON_CONTENT_TYPE);
            let req = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(network_error)?;
            let resp = req.send().await.map_err(network_error)?;
            resp.text().await.map_err(network_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network(FETCH_UNAVAILABLE.to_owned()))
        }
    }
}

/// Issue a JSON request and return the parsed response body.
///
/// The response status is not inspected: error pages that carry a JSON body
/// are returned like any other body.
///
/// # Errors
///
/// Returns an error if the body cannot be encoded, the request fails, or the
/// response is not valid JSON. The error is logged before it is returned.
pub async fn api_call<T: HttpTransport + ?Sized>(
    transport: &T,
    url: &str,
    method: Method,
    data: Option<&Value>,
) -> Result<Value, ApiError> {
    let result = async {
        let request = ApiRequest::new(url, method, data)?;
        let body = transport.send(request).await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
    .await;
    if let Err(e) = &result {
        leptos::logging::error!("API call failed: {e}");
    }
    result
}
