//! Thin JSON-over-HTTP layer with the bearer-token interceptor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service module (`api`, `users`, `roles`, `leaves`) goes through
//! these helpers, so the `Authorization` header and error normalization are
//! applied in exactly one place. Outside the hydrated build the helpers return
//! `ApiError::Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// `Authorization` header value for `url`, if one should be attached.
///
/// The token is only sent to the configured backend.
pub fn bearer_header(url: &str, token: Option<&str>) -> Option<String> {
    bearer_header_for(url, token, crate::config::is_api_url)
}

fn bearer_header_for(url: &str, token: Option<&str>, is_api: impl Fn(&str) -> bool) -> Option<String> {
    let token = token.filter(|t| !t.is_empty())?;
    is_api(url).then(|| format!("Bearer {token}"))
}

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder, url: &str) -> gloo_net::http::RequestBuilder {
    use crate::util::storage::{BrowserStorage, KeyValueStore, TOKEN_KEY};

    let token = BrowserStorage.get(TOKEN_KEY);
    match bearer_header(url, token.as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response, method: &str, url: &str) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("{method} {url} failed: status={status}");
    Err(ApiError::from_response(status, &body))
}

#[cfg(feature = "hydrate")]
fn builder(method: Method, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[cfg(feature = "hydrate")]
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Send a request and return the checked response text.
async fn send_raw<B: Serialize>(method: Method, path: &str, body: Option<&B>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(path);
        let req = authorize(builder(method, &url), &url);
        let req = match body {
            Some(body) => req.json(body)?,
            None => req.build()?,
        };
        let resp = req.send().await.map_err(|e| {
            leptos::logging::warn!("{} {url} unreachable: {e}", method.as_str());
            ApiError::from(e)
        })?;
        let resp = check(resp, method.as_str(), &url).await?;
        Ok(resp.text().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` an API-relative path and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = send_raw::<()>(Method::Get, path, None).await?;
    decode(&text)
}

/// `POST` a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let text = send_raw(Method::Post, path, Some(body)).await?;
    decode(&text)
}

/// `PUT` a JSON body; the response body (usually 204) is ignored.
pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_raw(Method::Put, path, Some(body)).await.map(|_| ())
}

/// `DELETE` a resource; the response body is ignored.
pub async fn delete_unit(path: &str) -> Result<(), ApiError> {
    send_raw::<()>(Method::Delete, path, None).await.map(|_| ())
}
