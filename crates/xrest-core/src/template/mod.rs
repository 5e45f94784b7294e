//! Blocking JSON request template.
//!
//! One call opens a connection through the injected provider, writes the
//! request body for POST, checks the status, decodes the body with the
//! charset the response declares and parses it as JSON.

mod request;

use std::collections::HashMap;
use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::charset::{self, CharsetAliases};
use crate::config::TemplateConfig;
use crate::connection::{
    ConnectionGuard, ConnectionProvider, CurlProvider, StatusCheck, SuccessRange,
};
use crate::error::RestError;

pub use request::{FormParams, HttpMethod};

/// Executes requests against exchange REST endpoints.
///
/// Holds no per-request state; one template can serve any number of calls.
#[derive(Debug, Clone)]
pub struct HttpTemplate<P = CurlProvider, S = SuccessRange> {
    provider: P,
    status_check: S,
    aliases: CharsetAliases,
    default_headers: Vec<(String, String)>,
}

impl HttpTemplate {
    /// Curl transport, 2xx status check and default config.
    pub fn new() -> Self {
        Self::from_config(&TemplateConfig::default())
    }

    pub fn from_config(cfg: &TemplateConfig) -> Self {
        let mut t = Self::with_parts(
            CurlProvider::from_config(cfg),
            SuccessRange,
            CharsetAliases::with_extra(&cfg.charset_aliases),
        );
        t.default_headers = cfg.request_headers();
        t
    }
}

impl Default for HttpTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S> HttpTemplate<P, S>
where
    P: ConnectionProvider,
    S: StatusCheck,
{
    /// Template with explicit collaborators and no default headers.
    pub fn with_parts(provider: P, status_check: S, aliases: CharsetAliases) -> Self {
        Self {
            provider,
            status_check,
            aliases,
            default_headers: Vec::new(),
        }
    }

    /// Adds a header sent with every request unless the call overrides it.
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.default_headers
            .retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.default_headers.push((name, value.into()));
        self
    }

    /// GET `url` and parse the JSON reply.
    pub fn get_for_json_object<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<T, RestError> {
        self.execute_request(url, None, headers, HttpMethod::Get, None)
    }

    /// POST `payload` to `url` and parse the JSON reply.
    pub fn post_for_json_object<T: DeserializeOwned>(
        &self,
        url: &str,
        payload: &str,
        headers: &HashMap<String, String>,
    ) -> Result<T, RestError> {
        self.execute_request(url, Some(payload), headers, HttpMethod::Post, None)
    }

    /// POST `body` serialized as JSON and parse the JSON reply.
    pub fn post_json<B, T>(
        &self,
        url: &str,
        body: &B,
        headers: &HashMap<String, String>,
    ) -> Result<T, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_string(body).map_err(RestError::Encode)?;
        let mut headers = headers.clone();
        if !headers.keys().any(|k| k.eq_ignore_ascii_case("Content-Type")) {
            headers.insert(
                "Content-Type".to_string(),
                "application/json; charset=UTF-8".to_string(),
            );
        }
        self.execute_request(url, Some(&payload), &headers, HttpMethod::Post, None)
    }

    /// Runs the request and parses the decoded body as `T`.
    pub fn execute_request<T: DeserializeOwned>(
        &self,
        url: &str,
        payload: Option<&str>,
        headers: &HashMap<String, String>,
        method: HttpMethod,
        form_params: Option<&FormParams>,
    ) -> Result<T, RestError> {
        let text = self.execute_request_raw(url, payload, headers, method, form_params)?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(%method, url, error = %e, "response is not the expected JSON");
            RestError::Json(e)
        })
    }

    /// Runs the request and returns the decoded body without parsing it.
    pub fn execute_request_raw(
        &self,
        url: &str,
        payload: Option<&str>,
        headers: &HashMap<String, String>,
        method: HttpMethod,
        form_params: Option<&FormParams>,
    ) -> Result<String, RestError> {
        let target = request::request_url(url, method, payload, form_params)?;
        let body = request::request_body(method, payload, form_params);
        tracing::debug!(%method, url = %target, "executing request");

        let mut guard = ConnectionGuard::new(self.provider.open(&target)?);
        let conn = guard.conn();

        conn.set_method(method)?;
        for (name, value) in request::merge_headers(&self.default_headers, headers) {
            conn.set_header(name, value)?;
        }
        if let Some(body) = &body {
            conn.request_body()?.write_all(body.as_bytes())?;
        }

        conn.connect()?;
        let status = self.status_check.check(conn).map_err(|e| {
            tracing::warn!(%method, url = %target, error = %e, "request rejected");
            e
        })?;

        let content_type = conn.response_header("Content-Type");
        let charset = self.aliases.resolve(content_type.as_deref()).to_string();
        tracing::debug!(status, %charset, "reading response body");

        let mut bytes = Vec::new();
        conn.response_body()?.read_to_end(&mut bytes)?;
        charset::decode(&bytes, &charset)
    }

    /// Reads `reader` to the end and decodes it as `charset` (alias-corrected).
    pub fn read_input_stream_as_encoded_string<R: Read>(
        &self,
        mut reader: R,
        charset: &str,
    ) -> Result<String, RestError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        charset::decode(&bytes, self.aliases.canonical(charset))
    }
}
