//! RFC 6265 cookie record.
//!
//! A [`Cookie`] is what parsing a single `Set-Cookie` header produces. The
//! typed fields (`domain`, `path`, `expiry`, flags) are filled in by the
//! attribute handlers; the raw attribute map keeps every attribute the
//! server sent, recognised or not.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lower-cased attribute names as they appear in the attribute map.
pub mod attr {
    pub const PATH: &str = "path";
    pub const DOMAIN: &str = "domain";
    pub const MAX_AGE: &str = "max-age";
    pub const EXPIRES: &str = "expires";
    pub const SECURE: &str = "secure";
    pub const HTTP_ONLY: &str = "httponly";
    pub const SAME_SITE: &str = "samesite";
    pub const PRIORITY: &str = "priority";
}

/// SameSite policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

impl FromStr for SameSite {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("strict") {
            Ok(Self::Strict)
        } else if s.eq_ignore_ascii_case("lax") {
            Ok(Self::Lax)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else {
            Err(())
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cookie produced by parsing one `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub creation_time: DateTime<Utc>,
    /// Absolute expiry; `None` for session cookies.
    pub expiry: Option<DateTime<Utc>>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
    /// Attribute name (lower-cased) to raw value, in first-seen order.
    attributes: Vec<(String, Option<String>)>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into().to_ascii_lowercase(),
            path: "/".to_string(),
            creation_time: Utc::now(),
            expiry: None,
            secure: false,
            http_only: false,
            same_site: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into().to_ascii_lowercase();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_creation_time(mut self, creation_time: DateTime<Utc>) -> Self {
        self.creation_time = creation_time;
        self
    }

    pub fn with_attribute(mut self, name: &str, value: Option<&str>) -> Self {
        self.set_attribute(name, value.map(str::to_string));
        self
    }

    /// Record a raw attribute. Repeating a name overwrites the value but keeps
    /// the slot of the first occurrence.
    pub fn set_attribute(&mut self, name: &str, value: Option<String>) {
        let name = name.to_ascii_lowercase();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Raw value of an attribute. `Some(None)` means the attribute was
    /// present without a value (`Secure`, `HttpOnly`).
    pub fn attribute(&self, name: &str) -> Option<Option<&str>> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Option<String>> {
        let idx = self
            .attributes
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(idx).1)
    }

    /// All attributes in the order they first appeared.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// True if the cookie carried an explicit Domain attribute.
    pub fn is_host_only(&self) -> bool {
        !self.contains_attribute(attr::DOMAIN)
    }

    pub fn is_persistent(&self) -> bool {
        self.expiry.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= now)
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.value)
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}
