//! Browser-compatible attribute handlers.
//!
//! [`standard`] returns the set a browser applies, in the order validation
//! and matching run: `path`, `domain`, `max-age`, `expires`, `secure`,
//! `httponly`, `samesite`.

mod domain;
mod expires;
mod http_only;
mod max_age;
mod path;
mod same_site;
mod secure;

use std::sync::Arc;

use crate::config::CookieSpecConfig;
use crate::handler::AttributeHandler;

pub use domain::{domain_matches, is_public_suffix, DomainHandler};
pub use expires::ExpiresHandler;
pub use http_only::HttpOnlyHandler;
pub use max_age::MaxAgeHandler;
pub use path::{path_matches, PathHandler};
pub use same_site::SameSiteHandler;
pub use secure::SecureHandler;

/// The standard handler set configured from `config`.
pub fn standard(config: &CookieSpecConfig) -> Vec<Arc<dyn AttributeHandler>> {
    vec![
        Arc::new(PathHandler),
        Arc::new(DomainHandler::new(
            config.allow_ip_domain_match,
            config.reject_public_suffix,
        )),
        Arc::new(MaxAgeHandler),
        Arc::new(ExpiresHandler),
        Arc::new(SecureHandler::new(config.reject_secure_from_insecure_origin)),
        Arc::new(HttpOnlyHandler),
        Arc::new(SameSiteHandler::new(config.same_site_none_requires_secure)),
    ]
}
