//! Get command: GET a URL and print the JSON reply.

use anyhow::Result;
use xrest_core::{HttpMethod, HttpTemplate};

pub fn run_get(
    template: &HttpTemplate,
    url: &str,
    headers: Vec<(String, String)>,
    form: Vec<(String, String)>,
) -> Result<()> {
    super::execute_and_print(template, url, HttpMethod::Get, None, headers, form)
}
