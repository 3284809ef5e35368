//! JSON requests through the browser `fetch` api.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self::Network(format!("{:?}", value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
    /// Query parameters, appended to the url in order.
    pub parameters: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            parameters: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }

    /// The url including the encoded query string.
    pub fn full_url(&self) -> String {
        if self.parameters.is_empty() {
            return self.url.clone();
        }

        let query = self
            .parameters
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query)
    }
}

fn encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

/// Perform `request` and decode the JSON response body.
pub async fn fetch_json<T: DeserializeOwned>(request: &FetchRequest) -> Result<T, FetchError> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_mode(RequestMode::Cors);

    let req = Request::new_with_str_and_init(&request.full_url(), &init)?;
    req.headers().set("Accept", "application/json")?;

    let response: Response = JsFuture::from(weft::web::window().fetch_with_request(&req))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| FetchError::Network("response body is not text".to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

/// Perform `request`, then call exactly one of the two callbacks, once.
pub async fn send<T, S, E>(request: FetchRequest, on_success: S, on_error: E)
where
    T: DeserializeOwned,
    S: FnOnce(T),
    E: FnOnce(FetchError),
{
    tracing::debug!(method = request.method.as_str(), url = %request.url, "fetch");
    match fetch_json(&request).await {
        Ok(value) => on_success(value),
        Err(err) => on_error(err),
    }
}
