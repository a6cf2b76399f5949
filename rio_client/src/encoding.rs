//! URL and body encoding shared by every call.

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::Error;

/// Internal tag serde writes for polymorphic request enums. It selects the
/// concrete shape client side and never goes on the wire.
pub(crate) const DISCRIMINATOR: &str = "@type";

/// Percent-encodes a name for use in a path segment or query value.
///
/// Alphanumerics and `.`, `_`, `-`, `*` pass through; a space becomes `%20`.
/// A name of `.` or `..` is refused when the request URL is built.
pub fn encode_path_segment(value: &str) -> String {
    // form encoding writes spaces as '+' and a literal '+' as %2B
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Rejects a path with a `.` or `..` segment, which URL parsing would
/// collapse into a different resource.
pub(crate) fn check_path(path: &str) -> Result<(), Error> {
    let dot_segment = path.split('/').any(|segment| {
        let segment = segment.to_ascii_lowercase().replace("%2e", ".");
        segment == "." || segment == ".."
    });
    if dot_segment {
        tracing::error!("Refusing dot segment in path {}", path);
        return Err(Error::InvalidPath(path.to_string()));
    }
    Ok(())
}

/// Renders `?key=value&...` for the given parameters.
///
/// Parameters without a value are omitted. Returns an empty string when
/// nothing is left, so the path is used unmodified.
pub fn query_string(params: &[(String, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|value| format!("{}={}", key, encode_path_segment(value)))
        })
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Encodes a request body, dropping the top-level discriminator key.
pub fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, Error> {
    let mut value = serde_json::to_value(body).map_err(Error::Encode)?;
    strip_discriminator(&mut value);
    Ok(value)
}

pub(crate) fn strip_discriminator(value: &mut Value) {
    if let Value::Object(map) = value {
        map.remove(DISCRIMINATOR);
    }
}
