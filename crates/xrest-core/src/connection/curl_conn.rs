//! libcurl-backed connection (the production transport).

use std::io::{self, Read, Write};
use std::str;
use std::time::Duration;

use curl::easy::{Easy, List};

use super::{Connection, ConnectionProvider};
use crate::config::TemplateConfig;
use crate::error::RestError;
use crate::template::HttpMethod;

/// Opens a fresh curl handle per request.
#[derive(Debug, Clone)]
pub struct CurlProvider {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlProvider {
    /// `timeout` bounds the whole transfer, `connect_timeout` only the TCP/TLS setup.
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &TemplateConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.read_timeout_secs),
        )
    }
}

impl Default for CurlProvider {
    fn default() -> Self {
        Self::from_config(&TemplateConfig::default())
    }
}

impl ConnectionProvider for CurlProvider {
    fn open(&self, url: &str) -> Result<Box<dyn Connection>, RestError> {
        url::Url::parse(url).map_err(|source| RestError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let mut easy = Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        Ok(Box::new(CurlConnection::new(easy)))
    }
}

/// A single request/response over a curl easy handle.
///
/// The transfer runs in `connect`; the response is buffered so headers and
/// body can be read afterwards.
pub struct CurlConnection {
    easy: Easy,
    method: HttpMethod,
    request_headers: Vec<String>,
    request_body: Vec<u8>,
    response_headers: Vec<String>,
    response_body: Vec<u8>,
    performed: bool,
}

impl CurlConnection {
    pub fn new(easy: Easy) -> Self {
        Self {
            easy,
            method: HttpMethod::Get,
            request_headers: Vec::new(),
            request_body: Vec::new(),
            response_headers: Vec::new(),
            response_body: Vec::new(),
            performed: false,
        }
    }
}

impl Connection for CurlConnection {
    fn set_method(&mut self, method: HttpMethod) -> Result<(), RestError> {
        self.method = method;
        Ok(())
    }

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), RestError> {
        self.request_headers.push(header_line(name, value));
        Ok(())
    }

    fn request_body(&mut self) -> Result<&mut dyn Write, RestError> {
        Ok(&mut self.request_body)
    }

    fn connect(&mut self) -> Result<(), RestError> {
        if self.performed {
            return Ok(());
        }

        let mut list = List::new();
        for h in &self.request_headers {
            list.append(h)?;
        }
        self.easy.http_headers(list)?;

        match self.method {
            HttpMethod::Get => self.easy.get(true)?,
            HttpMethod::Post => {
                self.easy.post(true)?;
                self.easy.post_fields_copy(&self.request_body)?;
            }
        }

        let headers = &mut self.response_headers;
        let body = &mut self.response_body;
        {
            let mut transfer = self.easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let line = s.trim_end();
                    // A new status line starts over (redirects, 100 Continue).
                    if line.starts_with("HTTP/") {
                        headers.clear();
                    } else if !line.is_empty() {
                        headers.push(line.to_string());
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        self.performed = true;
        Ok(())
    }

    fn status_code(&mut self) -> Result<u32, RestError> {
        if !self.performed {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "request not sent").into());
        }
        Ok(self.easy.response_code()?)
    }

    fn response_header(&self, name: &str) -> Option<String> {
        find_header(&self.response_headers, name)
    }

    fn response_body(&mut self) -> Result<Box<dyn Read + '_>, RestError> {
        if !self.performed {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "request not sent").into());
        }
        Ok(Box::new(self.response_body.as_slice()))
    }

    fn disconnect(&mut self) {
        self.easy.reset();
        self.request_body.clear();
        self.response_headers.clear();
        self.response_body.clear();
        self.performed = false;
    }
}

/// Raw header line for curl. `Name:` with no value makes curl drop the header,
/// so an empty value is sent as `Name;`.
fn header_line(name: &str, value: &str) -> String {
    let (name, value) = (name.trim(), value.trim());
    if value.is_empty() {
        format!("{};", name)
    } else {
        format!("{}: {}", name, value)
    }
}

/// Last value of header `name` among raw `Name: value` lines.
fn find_header(lines: &[String], name: &str) -> Option<String> {
    lines
        .iter()
        .rev()
        .filter_map(|line| line.split_once(':'))
        .find(|(n, _)| n.trim().eq_ignore_ascii_case(name))
        .map(|(_, v)| v.trim().to_string())
}
