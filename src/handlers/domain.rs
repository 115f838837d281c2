use crate::cookie::{attr, Cookie};
use crate::error::{Error, Result};
use crate::handler::AttributeHandler;
use crate::origin::CookieOrigin;

/// `Domain` attribute.
///
/// Without it a cookie is host-only and matches its exact origin host.
/// With it the cookie also matches every subdomain of the attribute value,
/// unless that value is a public suffix such as `com` or `co.uk`.
#[derive(Debug, Clone, Copy)]
pub struct DomainHandler {
    allow_ip: bool,
    reject_public_suffix: bool,
}

impl Default for DomainHandler {
    fn default() -> Self {
        Self::new(false, true)
    }
}

impl DomainHandler {
    pub fn new(allow_ip: bool, reject_public_suffix: bool) -> Self {
        Self {
            allow_ip,
            reject_public_suffix,
        }
    }

    fn suffix_match(&self, domain: &str, origin: &CookieOrigin) -> bool {
        if !self.allow_ip && origin.is_ip_host() {
            return false;
        }
        if self.reject_public_suffix && is_public_suffix(domain) {
            return false;
        }
        domain_matches(domain, origin.host())
    }
}

impl AttributeHandler for DomainHandler {
    fn name(&self) -> &'static str {
        attr::DOMAIN
    }

    fn parse(&self, cookie: &mut Cookie, value: Option<&str>) -> Result<()> {
        let value = value.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(Error::malformed_attribute(
                attr::DOMAIN,
                "blank or missing value",
            ));
        }
        // A trailing dot makes the attribute unusable; browsers ignore it.
        if value.ends_with('.') {
            cookie.remove_attribute(attr::DOMAIN);
            return Ok(());
        }
        let value = value.strip_prefix('.').unwrap_or(value);
        cookie.domain = value.to_ascii_lowercase();
        Ok(())
    }

    fn validate(&self, cookie: &Cookie, origin: &CookieOrigin) -> Result<()> {
        let host = origin.host();
        if cookie.domain.is_empty() {
            return Err(Error::rejected(attr::DOMAIN, "cookie domain may not be empty"));
        }
        if host != cookie.domain && !self.suffix_match(&cookie.domain, origin) {
            return Err(Error::rejected(
                attr::DOMAIN,
                format!(
                    "illegal domain \"{}\" for origin \"{}\"",
                    cookie.domain, host
                ),
            ));
        }
        Ok(())
    }

    fn matches(&self, cookie: &Cookie, origin: &CookieOrigin) -> bool {
        let host = origin.host();
        if host == cookie.domain {
            return true;
        }
        !cookie.is_host_only() && self.suffix_match(&cookie.domain, origin)
    }
}

/// True if `domain` is listed on the Public Suffix List (`com`, `co.uk`,
/// `github.io`). Names only covered by the implicit `*` rule do not count,
/// so intranet TLDs keep working.
pub fn is_public_suffix(domain: &str) -> bool {
    let domain = domain.strip_prefix('.').unwrap_or(domain).to_ascii_lowercase();
    match psl::suffix(domain.as_bytes()) {
        Some(suffix) => suffix.is_known() && suffix.as_bytes() == domain.as_bytes(),
        None => false,
    }
}

/// RFC 6265 section 5.1.3 domain-match: `host` equals `domain` or ends with
/// `.domain`. A leading dot on `domain` is ignored.
pub fn domain_matches(domain: &str, host: &str) -> bool {
    let domain = domain.strip_prefix('.').unwrap_or(domain);
    if domain.is_empty() || host.len() < domain.len() {
        return false;
    }
    let split = host.len() - domain.len();
    if !host.is_char_boundary(split) {
        return false;
    }
    let (head, tail) = host.split_at(split);
    tail.eq_ignore_ascii_case(domain) && (head.is_empty() || head.ends_with('.'))
}
