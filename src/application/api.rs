// src/application/api.rs
use crate::domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    /// POST without a body
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, DomainError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(to_json(body)?),
        })
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, DomainError> {
        Ok(Self {
            method: Method::Put,
            path: path.into(),
            body: Some(to_json(body)?),
        })
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, DomainError> {
    serde_json::to_value(body).map_err(|e| DomainError::Decode(e.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn json_body(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        serde_json::from_slice(&self.body).map_err(|e| DomainError::Decode(e.to_string()))
    }

    /// `ensure_success` with the generic "HTTP error, status N" fallback
    pub fn ensure_ok(self) -> Result<Self, DomainError> {
        let fallback = format!("HTTP error, status {}", self.status);
        self.ensure_success(&fallback)
    }

    /// Turns a non-2xx response into `DomainError::Http` carrying the server's message.
    pub fn ensure_success(self, default_message: &str) -> Result<Self, DomainError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(DomainError::Http {
                status: self.status,
                message: error_message(&self.body, default_message),
            })
        }
    }
}

/// Single seam between the controllers and the network.
pub trait ApiTransport {
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, DomainError>;
}

impl<T: ApiTransport + ?Sized> ApiTransport for &mut T {
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, DomainError> {
        (**self).send(request)
    }
}

/// Extracts the user-facing message from an error body.
///
/// Prefers the `error` field, then `message`; anything else (including a
/// body that is not JSON) yields `default_message`.
pub fn error_message(body: &[u8], default_message: &str) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return default_message.to_string();
    };
    ["error", "message"]
        .iter()
        .find_map(|key| match value.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_else(|| default_message.to_string())
}
