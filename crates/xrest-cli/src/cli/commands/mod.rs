//! CLI command handlers.

mod get;
mod post;

pub use get::run_get;
pub use post::run_post;

use anyhow::Result;
use std::collections::HashMap;
use xrest_core::{FormParams, HttpMethod, HttpTemplate};

/// Run one request and print the reply as pretty JSON.
fn execute_and_print(
    template: &HttpTemplate,
    url: &str,
    method: HttpMethod,
    payload: Option<&str>,
    headers: Vec<(String, String)>,
    form: Vec<(String, String)>,
) -> Result<()> {
    let headers: HashMap<String, String> = headers.into_iter().collect();
    let form: FormParams = form.into_iter().collect();
    let form = (!form.is_empty()).then_some(&form);

    let value: serde_json::Value = template.execute_request(url, payload, &headers, method, form)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
