use chrono::Duration;

use super::max_age::MAX_LIFETIME_SECS;
use crate::cookie::{attr, Cookie};
use crate::date::parse_cookie_date;
use crate::error::Result;
use crate::handler::AttributeHandler;

/// `Expires` attribute. Unparsable dates are ignored, as browsers do.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiresHandler;

impl AttributeHandler for ExpiresHandler {
    fn name(&self) -> &'static str {
        attr::EXPIRES
    }

    fn parse(&self, cookie: &mut Cookie, value: Option<&str>) -> Result<()> {
        match value.and_then(parse_cookie_date) {
            Some(expiry) => {
                let cap = cookie.creation_time + Duration::seconds(MAX_LIFETIME_SECS);
                cookie.expiry = Some(expiry.min(cap));
            }
            None => {
                tracing::debug!("Ignoring unparsable expires {:?} on cookie '{}'", value, cookie.name);
            }
        }
        Ok(())
    }
}
