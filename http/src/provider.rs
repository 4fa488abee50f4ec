//! The reqwest-backed provider implementation.

use crate::spec::HttpRequestSpec;
use callapi_core::Provider;
use reqwest::Client;
use serde_json::{Value, json};
use std::future::Future;

/// A provider issuing HTTP requests through a shared `reqwest` client.
///
/// Responses are shaped to the data-plus-metadata convention regardless of
/// status: the body lands under `data`, the status code beside it. Only a
/// transport failure (connection refused, DNS, TLS) produces a bare,
/// `data`-less failure value.
#[derive(Debug, Clone, Default)]
pub struct HttpProvider {
    client: Client,
    base_url: Option<String>,
}

impl HttpProvider {
    /// Create a provider with a fresh client and no base URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing client (connection pools, default headers, proxies).
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Join relative spec URLs onto this base.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !url.contains("://") => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url.to_string(),
        }
    }
}

/// Shape a settled HTTP exchange into the data-plus-metadata convention.
fn shape_response(status: u16, body: Value) -> Value {
    json!({ "data": body, "status": status })
}

impl Provider for HttpProvider {
    type Request = HttpRequestSpec;

    fn call(&self, spec: &HttpRequestSpec) -> impl Future<Output = Result<Value, Value>> + Send {
        let url = self.resolve_url(&spec.url);
        let mut request = self.client.request(spec.method.into(), url);
        for (name, value) in &spec.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        async move {
            let response = request
                .send()
                .await
                .map_err(|error| Value::String(error.to_string()))?;

            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

            let shaped = shape_response(status.as_u16(), body);
            if status.is_success() {
                Ok(shaped)
            } else {
                Err(shaped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_join_onto_the_base() {
        let provider = HttpProvider::new().with_base_url("https://api.example.com/");
        assert_eq!(
            provider.resolve_url("/users/42"),
            "https://api.example.com/users/42"
        );
        assert_eq!(
            provider.resolve_url("users/42"),
            "https://api.example.com/users/42"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let provider = HttpProvider::new().with_base_url("https://api.example.com");
        assert_eq!(
            provider.resolve_url("https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn without_a_base_url_specs_are_taken_verbatim() {
        let provider = HttpProvider::new();
        assert_eq!(provider.resolve_url("/relative"), "/relative");
    }

    #[test]
    fn shaped_responses_carry_data_and_status() {
        let shaped = shape_response(404, Value::String("not found".to_string()));
        assert_eq!(shaped, json!({ "data": "not found", "status": 404 }));
    }
}
