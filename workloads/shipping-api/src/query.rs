//! Query string parsing.

use std::collections::HashMap;

/// Decoded query parameters (`application/x-www-form-urlencoded`). Later
/// duplicates win; invalid escapes are kept verbatim.
pub fn parse_query(qs: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(qs.as_bytes())
        .into_owned()
        .collect()
}
