use crate::cookie::{attr, Cookie};
use crate::error::{Error, Result};
use crate::handler::AttributeHandler;
use crate::origin::CookieOrigin;

/// `Secure` flag. Secure cookies are only sent over secure transports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureHandler {
    reject_insecure_origin: bool,
}

impl SecureHandler {
    /// `reject_insecure_origin` refuses Secure cookies set over plain text.
    pub fn new(reject_insecure_origin: bool) -> Self {
        Self {
            reject_insecure_origin,
        }
    }
}

impl AttributeHandler for SecureHandler {
    fn name(&self) -> &'static str {
        attr::SECURE
    }

    fn parse(&self, cookie: &mut Cookie, _value: Option<&str>) -> Result<()> {
        cookie.secure = true;
        Ok(())
    }

    fn validate(&self, cookie: &Cookie, origin: &CookieOrigin) -> Result<()> {
        if self.reject_insecure_origin && cookie.secure && !origin.is_secure() {
            return Err(Error::rejected(
                attr::SECURE,
                format!("secure cookie '{}' set over insecure origin", cookie.name),
            ));
        }
        Ok(())
    }

    fn matches(&self, cookie: &Cookie, origin: &CookieOrigin) -> bool {
        !cookie.secure || origin.is_secure()
    }
}
