//! Post command: POST a body or form and print the JSON reply.

use anyhow::Result;
use xrest_core::{HttpMethod, HttpTemplate};

pub fn run_post(
    template: &HttpTemplate,
    url: &str,
    data: Option<&str>,
    headers: Vec<(String, String)>,
    form: Vec<(String, String)>,
) -> Result<()> {
    if data.is_none() && form.is_empty() {
        tracing::warn!("POST to {} without a body", url);
    }
    super::execute_and_print(template, url, HttpMethod::Post, data, headers, form)
}
