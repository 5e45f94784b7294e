//! Status-code checks applied after connecting.

use super::Connection;
use crate::error::RestError;

/// Decides whether a response may be read as a success payload.
/// Returns the status code that was accepted.
pub trait StatusCheck {
    fn check(&self, conn: &mut dyn Connection) -> Result<u32, RestError>;
}

/// Accepts 2xx, rejects everything else with `RestError::HttpStatus`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessRange;

impl StatusCheck for SuccessRange {
    fn check(&self, conn: &mut dyn Connection) -> Result<u32, RestError> {
        let code = conn.status_code()?;
        if !(200..300).contains(&code) {
            return Err(RestError::HttpStatus { code });
        }
        Ok(code)
    }
}

/// Reports 200 without asking the connection. For offline tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustStatus;

impl StatusCheck for TrustStatus {
    fn check(&self, _conn: &mut dyn Connection) -> Result<u32, RestError> {
        Ok(200)
    }
}

/// Custom policy over the numeric status.
impl<F> StatusCheck for F
where
    F: Fn(u32) -> Result<(), RestError>,
{
    fn check(&self, conn: &mut dyn Connection) -> Result<u32, RestError> {
        let code = conn.status_code()?;
        self(code)?;
        Ok(code)
    }
}
