//! Request-side types: method, form parameters, header merging.

use std::collections::HashMap;
use std::fmt;

use crate::error::RestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Ordered `name=value` pairs sent `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encoded `a=1&b=2` form.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// URL the connection is opened for. Form params go into the query string
/// unless they become the body (POST without an explicit payload).
pub(super) fn request_url(
    url: &str,
    method: HttpMethod,
    payload: Option<&str>,
    form: Option<&FormParams>,
) -> Result<String, RestError> {
    let form = match form {
        Some(f) if !f.is_empty() && !form_is_body(method, payload) => f,
        _ => return Ok(url.to_string()),
    };
    let mut parsed = url::Url::parse(url).map_err(|source| RestError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    parsed.query_pairs_mut().extend_pairs(form.iter());
    Ok(parsed.into())
}

/// Bytes written to the request stream, if any. GET never carries a body.
pub(super) fn request_body(
    method: HttpMethod,
    payload: Option<&str>,
    form: Option<&FormParams>,
) -> Option<String> {
    match method {
        HttpMethod::Get => None,
        HttpMethod::Post => match (payload, form) {
            (Some(p), _) => Some(p.to_string()),
            (None, Some(f)) => Some(f.encode()),
            (None, None) => None,
        },
    }
}

fn form_is_body(method: HttpMethod, payload: Option<&str>) -> bool {
    method == HttpMethod::Post && payload.is_none()
}

/// Template defaults overlaid with per-call headers. A call header replaces a
/// default with the same name (case-insensitive).
pub(super) fn merge_headers<'a>(
    defaults: &'a [(String, String)],
    call: &'a HashMap<String, String>,
) -> Vec<(&'a str, &'a str)> {
    let mut merged: Vec<(&str, &str)> = defaults
        .iter()
        .filter(|(name, _)| !call.keys().any(|k| k.eq_ignore_ascii_case(name)))
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let mut extra: Vec<(&str, &str)> = call.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    extra.sort_unstable();
    merged.extend(extra);
    merged
}
