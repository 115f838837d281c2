use chrono::{DateTime, Duration, Utc};

use crate::cookie::{attr, Cookie};
use crate::error::Result;
use crate::handler::AttributeHandler;

/// Upper bound browsers put on cookie lifetimes (RFC 6265bis, 400 days).
pub(crate) const MAX_LIFETIME_SECS: i64 = 400 * 24 * 60 * 60;

/// `Max-Age` attribute. Non-numeric values are ignored; zero or negative
/// values expire the cookie immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxAgeHandler;

fn parse_delta_seconds(value: &str) -> Option<i64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All digits, so the only possible failure is overflow.
    Some(value.parse().unwrap_or(if value.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

impl AttributeHandler for MaxAgeHandler {
    fn name(&self) -> &'static str {
        attr::MAX_AGE
    }

    fn parse(&self, cookie: &mut Cookie, value: Option<&str>) -> Result<()> {
        let Some(seconds) = value.map(str::trim).and_then(parse_delta_seconds) else {
            tracing::debug!("Ignoring non-numeric max-age {:?} on cookie '{}'", value, cookie.name);
            return Ok(());
        };
        cookie.expiry = Some(if seconds <= 0 {
            DateTime::<Utc>::UNIX_EPOCH
        } else {
            cookie.creation_time + Duration::seconds(seconds.min(MAX_LIFETIME_SECS))
        });
        Ok(())
    }
}
