use std::collections::HashMap;

/// HTTP request methods.
///
/// Represents the HTTP method/verb of a request. The server routes GET and
/// POST; every other token is carried verbatim and answered with
/// 405 Method Not Allowed by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any other method token from the request line
    Other(String),
}

/// Represents a parsed HTTP request from a client.
///
/// Contains the request line and headers as extracted by the parser. Header
/// keys are stored ASCII-lowercased; values are whitespace-trimmed. The body
/// holds exactly `Content-Length` bytes, or nothing when the header is
/// absent or zero.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, or any other token)
    pub method: Method,
    /// The raw request target (e.g., "/echo/abc"), not percent-decoded
    pub target: String,
    /// Request headers with lowercased keys
    pub headers: HashMap<String, String>,
    /// Request body for POST requests
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Method {
    /// Maps a request line token to a method.
    ///
    /// Matching is case-sensitive, so only the uppercase forms route; any
    /// other token (including lowercase spellings) is preserved as
    /// [`Method::Other`].
    ///
    /// # Example
    ///
    /// ```
    /// # use skiff::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("DELETE"), Method::Other("DELETE".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Adds a header. The key is lowercased, matching what the parser
    /// produces for requests read off the wire.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            target: self.target.ok_or("target missing")?,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Request {
    /// Retrieves a header value by name, case-insensitively.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name to look up, in any casing
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the trimmed header value if present, `None`
    /// otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Returns the User-Agent header value, or the empty string if the
    /// client sent none.
    pub fn user_agent(&self) -> &str {
        self.header("user-agent").unwrap_or("")
    }

    /// Determines whether the connection should remain open after the
    /// response.
    ///
    /// HTTP/1.1 defaults to `true`. A Connection header whose value
    /// contains `close` in any casing turns it off.
    pub fn keep_alive(&self) -> bool {
        match self.header("connection") {
            Some(v) => !v.to_ascii_lowercase().contains("close"),
            None => true,
        }
    }

    /// Checks whether the client accepts the given content coding.
    ///
    /// The Accept-Encoding value is treated as a comma-separated list;
    /// each token is trimmed and compared case-insensitively. A token has
    /// to match exactly, so `gzip;q=0` does not count as `gzip`.
    ///
    /// # Example
    ///
    /// ```
    /// # use skiff::http::request::{Method, RequestBuilder};
    /// let req = RequestBuilder::new()
    ///     .method(Method::GET)
    ///     .target("/echo/abc")
    ///     .header("Accept-Encoding", "deflate, gzip")
    ///     .build()
    ///     .unwrap();
    /// assert!(req.accepts_encoding("gzip"));
    /// assert!(!req.accepts_encoding("br"));
    /// ```
    pub fn accepts_encoding(&self, coding: &str) -> bool {
        self.header("accept-encoding")
            .map(|v| v.split(',').any(|t| t.trim().eq_ignore_ascii_case(coding)))
            .unwrap_or(false)
    }
}
