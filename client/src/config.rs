//! Build-time client configuration.
//!
//! The backend origin is baked into the WASM bundle because the browser has
//! no environment to read at runtime. Set `LEAVEDESK_API_URL` when building
//! to point at a different backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5209/api";

/// Base URL of the REST backend, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base(option_env!("LEAVEDESK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base(raw: &str) -> &str {
    raw.trim_end_matches('/')
}

/// Join an API-relative path (e.g. `/User/all`) onto the base URL.
pub fn api_url(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_owned()
    } else {
        format!("{base}/{path}")
    }
}

/// Whether `url` targets the configured backend.
///
/// Used by the bearer interceptor so the token never leaves for a third-party
/// origin.
pub fn is_api_url(url: &str) -> bool {
    url_is_under(url, api_base_url())
}

fn url_is_under(url: &str, base: &str) -> bool {
    match url.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}
