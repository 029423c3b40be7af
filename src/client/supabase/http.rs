//! Minimal HTTP request/response types and the browser transport.

use entity::backend::StoreError;
use url::Url;

use crate::model::api::ErrorDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Json(String),
    Bytes(Vec<u8>),
}

/// A request ready to be sent, built by the endpoint helpers.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json(self, value: &serde_json::Value) -> Self {
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(Body::Json(value.to_string()));
        request
    }

    pub fn bytes(self, content_type: &str, bytes: Vec<u8>) -> Self {
        let mut request = self.header("Content-Type", content_type);
        request.body = Some(Body::Bytes(bytes));
        request
    }

    /// Value of the first header named `name`, ignoring case.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body of a 2xx response, otherwise the decoded service error.
    pub fn into_success(self) -> Result<String, StoreError> {
        if self.is_success() {
            return Ok(self.body);
        }

        let message = serde_json::from_str::<ErrorDto>(&self.body)
            .ok()
            .and_then(ErrorDto::into_message)
            .or_else(|| {
                let text = self.body.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| "Unknown error".to_string());

        Err(StoreError::Service {
            status: self.status,
            message,
        })
    }
}

#[cfg(feature = "web")]
pub async fn send(request: HttpRequest) -> Result<HttpResponse, StoreError> {
    use reqwasm::http::Request;
    use wasm_bindgen::JsValue;

    let mut builder = match request.method {
        Method::Get => Request::get(request.url.as_str()),
        Method::Post => Request::post(request.url.as_str()),
    };

    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    builder = match request.body {
        Some(Body::Json(json)) => builder.body(JsValue::from(json)),
        Some(Body::Bytes(bytes)) => builder.body(JsValue::from(bytes.into_boxed_slice())),
        None => builder,
    };

    let response = builder
        .send()
        .await
        .map_err(|e| StoreError::Transport(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| StoreError::Transport(format!("Failed to read response: {}", e)))?;

    Ok(HttpResponse { status, body })
}

#[cfg(not(feature = "web"))]
pub async fn send(request: HttpRequest) -> Result<HttpResponse, StoreError> {
    Err(StoreError::Transport(format!(
        "No HTTP transport available for {}",
        request.url
    )))
}

#[cfg(test)]
mod tests {
    use entity::backend::StoreError;

    use super::HttpResponse;

    /// Expect a service error body to become the error message
    #[test]
    fn decodes_service_error() {
        let response = HttpResponse {
            status: 400,
            body: r#"{"code":"22P02","message":"invalid input syntax for type bigint"}"#.to_string(),
        };

        assert_eq!(
            response.into_success(),
            Err(StoreError::Service {
                status: 400,
                message: "invalid input syntax for type bigint".to_string(),
            })
        );
    }

    /// Expect a non-JSON error body to be used verbatim
    #[test]
    fn keeps_plain_text_errors() {
        let response = HttpResponse {
            status: 502,
            body: "Bad Gateway".to_string(),
        };

        assert!(matches!(
            response.into_success(),
            Err(StoreError::Service { status: 502, message }) if message == "Bad Gateway"
        ));
    }
}
