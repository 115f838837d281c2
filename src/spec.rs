//! Browser-compatible RFC 6265 cookie spec.
//!
//! [`CookieSpec`] turns `Set-Cookie` headers into [`Cookie`] records, checks
//! them against the origin they came from, decides whether a stored cookie
//! applies to a request, and renders a set of cookies as one `Cookie`
//! request header.
//!
//! Cookie names and values are taken as the server sent them (only
//! surrounding whitespace is trimmed); nothing is unquoted or re-quoted.
//!
//! A `CookieSpec` holds no mutable state after construction, so one instance can
//! be shared freely across threads.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::comparator::{self, CookieComparator};
use crate::config::CookieSpecConfig;
use crate::cookie::{attr, Cookie};
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::handler::{AttributeHandler, HandlerRegistry};
use crate::handlers;
use crate::header::{Header, COOKIE, SET_COOKIE};
use crate::origin::CookieOrigin;
use crate::tokenizer::{parse_data, parse_token, skip_delimiter, Delimiters};

const PARAM_DELIMITER: u8 = b';';
const EQUAL_CHAR: u8 = b'=';

const TOKEN_DELIMS: Delimiters = Delimiters::of(&[EQUAL_CHAR, PARAM_DELIMITER]);
const VALUE_DELIMS: Delimiters = Delimiters::of(&[PARAM_DELIMITER]);

/// Set-Cookie parser, validator, matcher and Cookie header formatter.
pub struct CookieSpec {
    registry: HandlerRegistry,
    comparator: Box<dyn CookieComparator>,
}

impl CookieSpec {
    /// Standard browser handlers with the default (strict) config.
    pub fn new() -> Self {
        Self::with_config(CookieSpecConfig::default())
    }

    /// Standard browser handlers tuned by `config`.
    pub fn with_config(config: CookieSpecConfig) -> Self {
        Self {
            registry: HandlerRegistry::new(handlers::standard(&config)),
            comparator: comparator::for_ordering(config.ordering),
        }
    }

    /// Custom handler set and ordering.
    pub fn with_handlers(
        handlers: Vec<Arc<dyn AttributeHandler>>,
        comparator: impl CookieComparator + 'static,
    ) -> Self {
        Self {
            registry: HandlerRegistry::new(handlers),
            comparator: Box::new(comparator),
        }
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Parse one `Set-Cookie` header.
    ///
    /// Returns no cookie for a header that ends right after the cookie name
    /// (an empty `Set-Cookie` is tolerated), one cookie otherwise.
    pub fn parse(&self, header: &Header, origin: &CookieOrigin) -> Result<Vec<Cookie>> {
        if !header.is_named(SET_COOKIE) {
            return Err(Error::malformed_header(format!(
                "unrecognized cookie header: '{}'",
                header
            )));
        }
        let Some(value_pos) = header.value_pos() else {
            return Err(Error::malformed_header("header value is absent"));
        };
        let buffer = header.buffer();
        let mut cursor = Cursor::new(value_pos, buffer.len());

        let name = parse_data(buffer, &mut cursor, TOKEN_DELIMS).trim();
        if cursor.at_end() {
            return Ok(Vec::new());
        }
        if skip_delimiter(buffer, &mut cursor, TOKEN_DELIMS) != Some(EQUAL_CHAR) {
            return Err(Error::malformed_header(format!(
                "cookie value is invalid: '{}'",
                header
            )));
        }
        let value = parse_data(buffer, &mut cursor, VALUE_DELIMS).trim();
        skip_delimiter(buffer, &mut cursor, VALUE_DELIMS);

        let mut cookie = Cookie::new(name, value, origin.default_domain())
            .with_path(origin.default_path())
            .with_creation_time(Utc::now());

        let mut attributes: Vec<(Cow<'_, str>, Option<Cow<'_, str>>)> = Vec::new();
        while !cursor.at_end() {
            let param_name = parse_token(buffer, &mut cursor, TOKEN_DELIMS);
            let param_name = if param_name.bytes().any(|b| b.is_ascii_uppercase()) {
                Cow::Owned(param_name.to_ascii_lowercase())
            } else {
                param_name
            };
            let mut param_value = None;
            if skip_delimiter(buffer, &mut cursor, TOKEN_DELIMS) == Some(EQUAL_CHAR) {
                param_value = Some(parse_token(buffer, &mut cursor, VALUE_DELIMS));
                skip_delimiter(buffer, &mut cursor, VALUE_DELIMS);
            }
            cookie.set_attribute(&param_name, param_value.as_deref().map(str::to_string));
            match attributes.iter_mut().find(|(k, _)| *k == param_name) {
                Some(slot) => slot.1 = param_value,
                None => attributes.push((param_name, param_value)),
            }
        }

        if attributes.iter().any(|(k, _)| k == attr::MAX_AGE) {
            if let Some(idx) = attributes.iter().position(|(k, _)| k == attr::EXPIRES) {
                tracing::debug!("Cookie '{}': max-age overrides expires", cookie.name);
                attributes.remove(idx);
            }
        }

        for (param_name, param_value) in &attributes {
            match self.registry.get(param_name) {
                Some(handler) => handler.parse(&mut cookie, param_value.as_deref())?,
                None => tracing::debug!("Cookie '{}': no handler for attribute '{}'", cookie.name, param_name),
            }
        }

        Ok(vec![cookie])
    }

    /// Check a parsed cookie against the origin it was received from.
    ///
    /// Handlers run in registration order; the first violation is returned.
    pub fn validate(&self, cookie: &Cookie, origin: &CookieOrigin) -> Result<()> {
        self.registry.validate(cookie, origin)
    }

    /// Whether `cookie` may be sent with a request to `origin`.
    pub fn matches(&self, cookie: &Cookie, origin: &CookieOrigin) -> bool {
        self.registry.matches(cookie, origin)
    }

    /// Render cookies as a single `Cookie` request header.
    ///
    /// More than one cookie is emitted in comparator order; the input slice
    /// is left untouched.
    pub fn format_cookies(&self, cookies: &[Cookie]) -> Result<Header> {
        if cookies.is_empty() {
            return Err(Error::invalid_argument("list of cookies may not be empty"));
        }
        Ok(self.render(cookies.iter().collect()))
    }

    fn render(&self, mut cookies: Vec<&Cookie>) -> Header {
        if cookies.len() > 1 {
            cookies.sort_by(|a, b| self.comparator.compare(a, b));
        }

        let mut value = String::with_capacity(20 * cookies.len());
        for (n, cookie) in cookies.iter().enumerate() {
            if n > 0 {
                value.push(PARAM_DELIMITER as char);
                value.push(' ');
            }
            if !cookie.name.is_empty() {
                value.push_str(&cookie.name);
                value.push(EQUAL_CHAR as char);
            }
            value.push_str(&cookie.value);
        }
        Header::new(COOKIE, &value)
    }

    /// Parse and validate every `Set-Cookie` header of a response.
    ///
    /// Headers that fail either step are logged and skipped; other header
    /// names are ignored.
    pub fn parse_response_headers<'a>(
        &self,
        headers: impl IntoIterator<Item = &'a Header>,
        origin: &CookieOrigin,
    ) -> Vec<Cookie> {
        let mut accepted = Vec::new();
        for header in headers {
            if !header.is_named(SET_COOKIE) {
                continue;
            }
            let cookies = match self.parse(header, origin) {
                Ok(cookies) => cookies,
                Err(e) => {
                    tracing::warn!("Discarding '{}' from {}: {}", header, origin.host(), e);
                    continue;
                }
            };
            for cookie in cookies {
                match self.validate(&cookie, origin) {
                    Ok(()) => accepted.push(cookie),
                    Err(e) => tracing::warn!("Rejecting cookie '{}' from {}: {}", cookie.name, origin.host(), e),
                }
            }
        }
        accepted
    }

    /// `Cookie` header for the candidates that match `origin`, if any.
    pub fn request_header<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a Cookie>,
        origin: &CookieOrigin,
    ) -> Option<Header> {
        let matching: Vec<&Cookie> = candidates
            .into_iter()
            .filter(|c| self.matches(c, origin))
            .collect();
        if matching.is_empty() {
            return None;
        }
        Some(self.render(matching))
    }
}

impl Default for CookieSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CookieSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieSpec")
            .field("handlers", &self.registry)
            .finish_non_exhaustive()
    }
}
