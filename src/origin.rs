//! Request/response context a cookie is evaluated against.

use std::net::IpAddr;

use url::Url;

use crate::error::{Error, Result};

/// Host, port, path and transport security of the request a cookie came
/// from or is about to be sent with. Never mutated by [`CookieSpec`](crate::CookieSpec).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CookieOrigin {
    host: String,
    port: u16,
    path: String,
    secure: bool,
}

impl CookieOrigin {
    /// Host is lower-cased and must not be blank; an empty path becomes `/`.
    pub fn new(host: impl Into<String>, port: u16, path: impl Into<String>, secure: bool) -> Result<Self> {
        let host = host.into();
        let host = host.trim();
        if host.is_empty() {
            return Err(Error::invalid_argument("cookie origin host may not be blank"));
        }
        let path = path.into();
        let path = if path.is_empty() { "/".to_string() } else { path };
        Ok(Self {
            host: host.to_ascii_lowercase(),
            port,
            path,
            secure,
        })
    }

    /// Build an origin from a request URL. `https` and `wss` count as secure.
    pub fn from_url(url: &Url) -> Result<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| Error::invalid_argument(format!("no host in URL '{}'", url)))?;
        // IPv6 literals come back bracketed.
        let host = host.trim_start_matches('[').trim_end_matches(']');
        let port = url.port_or_known_default().unwrap_or(0);
        let secure = matches!(url.scheme(), "https" | "wss");
        Self::new(host, port, url.path(), secure)
    }

    /// Parse `url` and build an origin from it.
    pub fn parse(url: &str) -> Result<Self> {
        Self::from_url(&Url::parse(url)?)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// True when the host is an IPv4 or IPv6 literal.
    pub fn is_ip_host(&self) -> bool {
        self.host.parse::<IpAddr>().is_ok()
    }

    /// Default cookie path: everything up to (not including) the last `/`,
    /// but never less than the leading `/` itself.
    pub fn default_path(&self) -> &str {
        match self.path.rfind('/') {
            Some(0) => &self.path[..1],
            Some(idx) => &self.path[..idx],
            None => &self.path,
        }
    }

    /// Default cookie domain: the origin host.
    pub fn default_domain(&self) -> &str {
        &self.host
    }
}
