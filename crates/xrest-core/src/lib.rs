pub mod config;
pub mod logging;

pub mod charset;
pub mod connection;
pub mod error;
pub mod template;

pub use error::RestError;
pub use template::{FormParams, HttpMethod, HttpTemplate};
