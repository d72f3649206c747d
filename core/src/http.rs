//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. `GameClient`
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. Whoever holds the connection executes the round-trip:
//! `GameApiClient` does it with reqwest, and tests may use any blocking client.
//!
//! Query parameters are kept apart from `path` so a host can hand them to its
//! own query encoder; `HttpRequest::url` renders both for hosts that want a
//! single string.

use std::fmt;

/// HTTP method for a request. The game API only uses these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `path` is the absolute URL without a query string; `query` holds the
/// parameters in the order they should be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Full URL including the rendered query string.
    ///
    /// Values are written verbatim. Every query value this crate produces is
    /// an integer, so no escaping is needed.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `GameClient::parse`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str, query: &[(&str, &str)]) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn url_without_query_is_the_path() {
        let req = get("http://localhost:8080/api/games", &[]);
        assert_eq!(req.url(), "http://localhost:8080/api/games");
    }

    #[test]
    fn url_keeps_query_order() {
        let req = get("http://h/api/games/7/valid-moves", &[("row", "3"), ("col", "4")]);
        assert_eq!(req.url(), "http://h/api/games/7/valid-moves?row=3&col=4");
    }

    #[test]
    fn success_range_is_2xx() {
        let response = |status| HttpResponse {
            status,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(302).is_success());
        assert!(!response(404).is_success());
    }

    #[test]
    fn method_renders_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }
}
