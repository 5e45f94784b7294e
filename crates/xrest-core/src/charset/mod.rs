//! Response charset resolution and decoding.
//!
//! The label comes from the `charset` parameter of `Content-Type`, is passed
//! through an alias table that corrects names servers send but decoders do not
//! accept, and defaults to UTF-8 when the server declares nothing.

mod aliases;
mod content_type;

use encoding_rs::Encoding;

use crate::error::RestError;

pub use aliases::CharsetAliases;
pub use content_type::content_type_charset;

/// Charset used when the response declares none.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// ISO-8859-1 labels. WHATWG treats these as windows-1252; decoded here byte-for-code-point.
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso_8859-1",
    "iso8859-1",
    "iso_8859-1:1987",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "csisolatin1",
];

/// US-ASCII labels. WHATWG treats these as windows-1252; decoded here as strict 7-bit.
const ASCII_LABELS: &[&str] = &["us-ascii", "ascii", "iso646-us", "ansi_x3.4-1968", "csascii"];

/// Decodes `bytes` as text in the encoding named by `label`.
///
/// A BOM matching the encoding is stripped. Malformed input is an error, not
/// replaced with U+FFFD.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, RestError> {
    let label = label.trim();
    if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
        return Ok(bytes.iter().map(|&b| char::from(b)).collect());
    }
    if ASCII_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
        if !bytes.is_ascii() {
            return Err(RestError::Decode {
                charset: "US-ASCII".to_string(),
            });
        }
        return Ok(bytes.iter().map(|&b| char::from(b)).collect());
    }

    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| RestError::UnsupportedCharset(label.to_string()))?;
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(RestError::Decode {
            charset: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_utf8_plain() {
        assert_eq!(decode(b"Test data", "UTF-8").unwrap(), "Test data");
    }

    #[test]
    fn decode_utf8_strips_bom() {
        assert_eq!(decode(b"\xEF\xBB\xBF{}", "utf-8").unwrap(), "{}");
    }

    #[test]
    fn decode_windows_1252_high_bytes() {
        // 0xE9 = é, 0x80 = € in windows-1252
        assert_eq!(decode(b"caf\xE9 \x80", "windows-1252").unwrap(), "café €");
    }

    #[test]
    fn decode_latin1_maps_bytes_to_code_points() {
        assert_eq!(decode(b"\x85", "ISO-8859-1").unwrap(), "\u{85}");
        assert_eq!(decode(b"caf\xE9\x80", "latin1").unwrap(), "caf\u{e9}\u{80}");
    }

    #[test]
    fn decode_ascii_is_strict() {
        assert_eq!(decode(b"{\"a\":1}", "US-ASCII").unwrap(), "{\"a\":1}");
        let err = decode(b"\x85", "ascii").unwrap_err();
        assert!(matches!(err, RestError::Decode { ref charset } if charset == "US-ASCII"));
    }

    #[test]
    fn decode_invalid_utf8_is_error() {
        let err = decode(b"\xC3\x28", "UTF-8").unwrap_err();
        assert!(matches!(err, RestError::Decode { ref charset } if charset == "UTF-8"));
    }

    #[test]
    fn decode_unknown_label_is_error() {
        let err = decode(b"{}", "x-no-such-charset").unwrap_err();
        assert!(matches!(err, RestError::UnsupportedCharset(ref l) if l == "x-no-such-charset"));
    }
}
