use crate::cookie::{attr, Cookie};
use crate::error::Result;
use crate::handler::AttributeHandler;
use crate::origin::CookieOrigin;

/// `Path` attribute: sets the cookie path, matches request paths by prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathHandler;

impl AttributeHandler for PathHandler {
    fn name(&self) -> &'static str {
        attr::PATH
    }

    fn parse(&self, cookie: &mut Cookie, value: Option<&str>) -> Result<()> {
        cookie.path = match value.map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => "/".to_string(),
        };
        Ok(())
    }

    fn matches(&self, cookie: &Cookie, origin: &CookieOrigin) -> bool {
        path_matches(origin.path(), &cookie.path)
    }
}

/// RFC 6265 section 5.1.4 path-match.
///
/// A trailing `/` on the cookie path is ignored (except for `/` itself), and
/// a prefix only counts when it ends on a segment boundary.
pub fn path_matches(request_path: &str, cookie_path: &str) -> bool {
    let cookie_path = if cookie_path.len() > 1 {
        cookie_path.strip_suffix('/').unwrap_or(cookie_path)
    } else {
        cookie_path
    };
    if cookie_path.is_empty() || cookie_path == "/" {
        return true;
    }
    match request_path.strip_prefix(cookie_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
