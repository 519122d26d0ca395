//! Header extraction

use actix_web::HttpRequest;

/// First non-blank value among `names`, trimmed
///
/// Header lookup is case-insensitive, so `Event-Name` also matches
/// `event-name`. Underscore spellings have to be listed separately.
pub fn first_header(req: &HttpRequest, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        req.headers()
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}
