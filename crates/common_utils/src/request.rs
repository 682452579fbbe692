//! Outbound request model with maskable headers

use masking::{Maskable, Secret};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Headers of an outbound request; values may be masked
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

/// HTTP method of an outbound request
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
}

/// An outbound request to a vendor endpoint
#[derive(Debug)]
pub struct Request {
    /// Target URL
    pub url: String,
    /// Headers, with secret values masked for logging
    pub headers: Headers,
    /// HTTP method
    pub method: Method,
    /// Pre-serialized body; carried as an opaque secret so the exact
    /// bytes reach the wire and never reach the logs
    pub body: Option<RequestBody>,
}

impl Request {
    /// Create a new request with the given HTTP method and URL
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Set the body of the request
    pub fn set_body(&mut self, body: RequestBody) {
        self.body.replace(body);
    }

    /// Add a header to the request
    pub fn add_header(&mut self, header: &str, value: Maskable<String>) {
        self.headers.insert((String::from(header), value));
    }
}

/// Builder for [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
    /// Target URL
    pub url: String,
    /// Headers accumulated so far
    pub headers: Headers,
    /// HTTP method
    pub method: Method,
    /// Body, if any
    pub body: Option<RequestBody>,
}

impl RequestBuilder {
    /// Create a builder with default values
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Set the URL for the request
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    /// Set the method for the request
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Insert a header and value pair
    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.insert((header.into(), value.into()));
        self
    }

    /// Add the provided headers to the request
    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the body of the request
    pub fn set_body(mut self, body: RequestBody) -> Self {
        self.body.replace(body);
        self
    }

    /// Build the request
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A pre-serialized request body
#[derive(Clone, Debug)]
pub struct RequestBody(Secret<String>);

impl RequestBody {
    /// Wrap an already-encoded body
    pub fn from_encoded_string(body: String) -> Self {
        Self(Secret::new(body))
    }

    /// Encode the given value and wrap the result
    pub fn from_json<T, F>(body: T, encoder: F) -> errors::CustomResult<Self, errors::ParsingError>
    where
        F: FnOnce(T) -> errors::CustomResult<String, errors::ParsingError>,
    {
        Ok(Self(Secret::new(encoder(body)?)))
    }

    /// Return the inner value
    pub fn get_inner_value(self) -> Secret<String> {
        self.0
    }
}
