//! `Content-Type` parameter parsing.

/// Returns the `charset` parameter of a raw `Content-Type` value, without quotes.
///
/// The media type itself is ignored; parameter names match case-insensitively.
/// An empty value counts as absent.
pub fn content_type_charset(header_value: &str) -> Option<&str> {
    header_value
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, v)| {
            let v = v.trim();
            if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
                v[1..v.len() - 1].trim()
            } else {
                v
            }
        })
        .filter(|v| !v.is_empty())
}
