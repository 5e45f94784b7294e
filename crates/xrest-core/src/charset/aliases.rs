//! Table of charset labels that need correcting before decoding.

use std::collections::HashMap;

use super::{content_type_charset, DEFAULT_CHARSET};

/// Labels servers are known to send for Windows-1252 and UTF-8 that are not
/// canonical encoding names.
const BUILTIN: &[(&str, &str)] = &[
    ("cp1252", "windows-1252"),
    ("cp-1252", "windows-1252"),
    ("x-cp1252", "windows-1252"),
    ("windows1252", "windows-1252"),
    ("win1252", "windows-1252"),
    ("utf8", "UTF-8"),
];

/// Immutable alias table, built once and consulted for every response.
///
/// Keys are matched case-insensitively. A label not in the table is used as-is.
#[derive(Debug, Clone)]
pub struct CharsetAliases {
    table: HashMap<String, String>,
}

impl CharsetAliases {
    /// The built-in aliases only.
    pub fn builtin() -> Self {
        Self::with_extra(std::iter::empty::<(String, String)>())
    }

    /// Built-in aliases plus `extra`; an extra entry replaces a built-in one
    /// with the same key.
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table: HashMap<String, String> = BUILTIN
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in extra {
            table.insert(k.as_ref().trim().to_ascii_lowercase(), v.into());
        }
        Self { table }
    }

    /// Corrected name for `label`, or `label` unchanged.
    pub fn canonical<'a>(&'a self, label: &'a str) -> &'a str {
        let label = label.trim();
        self.table
            .get(&label.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or(label)
    }

    /// Effective charset for a response with the given `Content-Type` value.
    pub fn resolve<'a>(&'a self, content_type: Option<&'a str>) -> &'a str {
        match content_type.and_then(content_type_charset) {
            Some(label) => self.canonical(label),
            None => DEFAULT_CHARSET,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for CharsetAliases {
    fn default() -> Self {
        Self::builtin()
    }
}
