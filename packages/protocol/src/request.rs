//! Outgoing request envelope
//!
//! This module provides the canonical `Request` template the encoders are
//! seeded with and that assembly returns. The URL path may carry `{name}`
//! placeholders (or greedy `{name+}` variants) for the structural encoder
//! to fill.

use http::{HeaderMap, HeaderName, HeaderValue, Method, Version};
use url::Url;

/// HTTP request envelope: method, URL, headers.
///
/// Transport-level concerns (timeouts, retries, TLS) are out of scope; this
/// type only carries what the encoders read and write.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    version: Version,
}

impl Request {
    /// Creates a new `Request`
    #[inline]
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            version: Version::HTTP_11,
        }
    }

    /// Create GET request
    #[inline]
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create POST request
    #[inline]
    #[must_use]
    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// Create PUT request
    #[inline]
    #[must_use]
    pub fn put(url: Url) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Create DELETE request
    #[inline]
    #[must_use]
    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Create PATCH request
    #[inline]
    #[must_use]
    pub fn patch(url: Url) -> Self {
        Self::new(Method::PATCH, url)
    }

    /// Create HEAD request
    #[inline]
    #[must_use]
    pub fn head(url: Url) -> Self {
        Self::new(Method::HEAD, url)
    }

    // Getters

    /// Get the HTTP method
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL
    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get mutable reference to the URL
    #[inline]
    pub fn url_mut(&mut self) -> &mut Url {
        &mut self.url
    }

    /// Get the headers
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get mutable reference to headers
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Get HTTP version
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    // Setters (builder pattern)

    /// Set the URL
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    /// Set HTTP version
    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Add a header, skipping silently if the name or value is invalid.
    /// Template headers set here are conveniences; values routed through an
    /// encoder get strict validation there instead.
    #[inline]
    #[must_use]
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        K: TryInto<HeaderName>,
        V: TryInto<HeaderValue>,
    {
        if let (Ok(name), Ok(val)) = (key.try_into(), value.try_into()) {
            self.headers.insert(name, val);
        }
        self
    }

    /// Extend headers
    #[inline]
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }
}
