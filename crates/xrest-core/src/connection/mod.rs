//! Connection seams used by the request template.
//!
//! The template only depends on these traits, so tests can substitute a fake
//! connection with canned responses and no network.

mod curl_conn;
mod status;

use std::io::{Read, Write};

use crate::error::RestError;
use crate::template::HttpMethod;

pub use curl_conn::{CurlConnection, CurlProvider};
pub use status::{StatusCheck, SuccessRange, TrustStatus};

/// One HTTP exchange: configure, write the request body, connect, then read
/// the status, headers and body of the response.
pub trait Connection {
    fn set_method(&mut self, method: HttpMethod) -> Result<(), RestError>;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), RestError>;

    /// Stream the request body is written to. Only meaningful before `connect`.
    fn request_body(&mut self) -> Result<&mut dyn Write, RestError>;

    /// Sends the request and receives the response.
    fn connect(&mut self) -> Result<(), RestError>;

    fn status_code(&mut self) -> Result<u32, RestError>;

    /// Response header value; names match case-insensitively.
    fn response_header(&self, name: &str) -> Option<String>;

    fn response_body(&mut self) -> Result<Box<dyn Read + '_>, RestError>;

    /// Releases the connection. Called exactly once per request.
    fn disconnect(&mut self);
}

/// Produces a connection for a URL.
pub trait ConnectionProvider {
    fn open(&self, url: &str) -> Result<Box<dyn Connection>, RestError>;
}

impl<F> ConnectionProvider for F
where
    F: Fn(&str) -> Result<Box<dyn Connection>, RestError>,
{
    fn open(&self, url: &str) -> Result<Box<dyn Connection>, RestError> {
        self(url)
    }
}

/// Disconnects the wrapped connection when dropped.
pub(crate) struct ConnectionGuard {
    conn: Box<dyn Connection>,
}

impl ConnectionGuard {
    pub(crate) fn new(conn: Box<dyn Connection>) -> Self {
        Self { conn }
    }

    pub(crate) fn conn(&mut self) -> &mut dyn Connection {
        self.conn.as_mut()
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.conn.disconnect();
    }
}
