//! Configuration for the standard cookie spec.
//!
//! # Usage
//!
//! ```rust
//! use cookie_spec::{CookieOrdering, CookieSpec, CookieSpecConfig};
//!
//! // Browser defaults
//! let spec = CookieSpec::new();
//!
//! // Legacy servers that still set Secure cookies over plain HTTP
//! let spec = CookieSpec::with_config(CookieSpecConfig::relaxed());
//!
//! // Custom configuration
//! let spec = CookieSpec::with_config(
//!     CookieSpecConfig::strict().ordering(CookieOrdering::Priority),
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which comparator orders cookies in an outgoing `Cookie` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookieOrdering {
    /// Longer paths first, then older cookies first (RFC 6265 section 5.4).
    #[default]
    PathLength,
    /// `Priority` attribute first (High, Medium, Low), then path length.
    Priority,
}

/// Knobs for the standard attribute handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieSpecConfig {
    /// Comparator used when formatting more than one cookie.
    pub ordering: CookieOrdering,

    /// Reject `SameSite=None` cookies that are not also `Secure`.
    ///
    /// Default: true
    pub same_site_none_requires_secure: bool,

    /// Reject `Secure` cookies received over an insecure origin.
    ///
    /// Default: true
    pub reject_secure_from_insecure_origin: bool,

    /// Let a `Domain` attribute suffix-match IP literal hosts.
    ///
    /// Default: false
    pub allow_ip_domain_match: bool,

    /// Refuse `Domain` attributes naming a public suffix (`com`, `co.uk`)
    /// unless the origin host is that suffix.
    ///
    /// Default: true
    pub reject_public_suffix: bool,
}

impl Default for CookieSpecConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl CookieSpecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// What current browsers enforce.
    pub fn strict() -> Self {
        Self {
            ordering: CookieOrdering::PathLength,
            same_site_none_requires_secure: true,
            reject_secure_from_insecure_origin: true,
            allow_ip_domain_match: false,
            reject_public_suffix: true,
        }
    }

    /// Pre-RFC 6265bis behaviour: no Secure/SameSite consistency checks.
    pub fn relaxed() -> Self {
        Self {
            ordering: CookieOrdering::PathLength,
            same_site_none_requires_secure: false,
            reject_secure_from_insecure_origin: false,
            allow_ip_domain_match: false,
            reject_public_suffix: true,
        }
    }

    /// Load from JSON. Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set header ordering.
    pub fn ordering(mut self, ordering: CookieOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Set the SameSite=None/Secure check.
    pub fn same_site_none_requires_secure(mut self, enabled: bool) -> Self {
        self.same_site_none_requires_secure = enabled;
        self
    }

    /// Set the Secure-over-plaintext check.
    pub fn reject_secure_from_insecure_origin(mut self, enabled: bool) -> Self {
        self.reject_secure_from_insecure_origin = enabled;
        self
    }

    /// Set public suffix rejection for the `Domain` attribute.
    pub fn reject_public_suffix(mut self, enabled: bool) -> Self {
        self.reject_public_suffix = enabled;
        self
    }

    /// Set IP literal domain matching.
    pub fn allow_ip_domain_match(mut self, enabled: bool) -> Self {
        self.allow_ip_domain_match = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_defaults() {
        let c = CookieSpecConfig::default();
        assert_eq!(c, CookieSpecConfig::strict());
        assert_eq!(c.ordering, CookieOrdering::PathLength);
        assert!(c.same_site_none_requires_secure);
        assert!(c.reject_secure_from_insecure_origin);
        assert!(!c.allow_ip_domain_match);
        assert!(c.reject_public_suffix);
    }

    #[test]
    fn test_relaxed() {
        let c = CookieSpecConfig::relaxed();
        assert!(!c.same_site_none_requires_secure);
        assert!(!c.reject_secure_from_insecure_origin);
    }

    #[test]
    fn test_builder_pattern() {
        let c = CookieSpecConfig::new()
            .ordering(CookieOrdering::Priority)
            .allow_ip_domain_match(true)
            .reject_secure_from_insecure_origin(false)
            .reject_public_suffix(false);
        assert_eq!(c.ordering, CookieOrdering::Priority);
        assert!(c.allow_ip_domain_match);
        assert!(!c.reject_secure_from_insecure_origin);
        assert!(!c.reject_public_suffix);
        assert!(c.same_site_none_requires_secure);
    }

    #[test]
    fn test_from_json_partial() {
        let c = CookieSpecConfig::from_json(r#"{"ordering": "priority", "allow_ip_domain_match": true}"#).unwrap();
        assert_eq!(c.ordering, CookieOrdering::Priority);
        assert!(c.allow_ip_domain_match);
        assert!(c.same_site_none_requires_secure);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = CookieSpecConfig::from_json(r#"{"ordering": "random"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
