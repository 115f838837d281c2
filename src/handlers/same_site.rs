use crate::cookie::{attr, Cookie, SameSite};
use crate::error::{Error, Result};
use crate::handler::AttributeHandler;
use crate::origin::CookieOrigin;

/// `SameSite` attribute. Unknown values leave the policy unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameSiteHandler {
    none_requires_secure: bool,
}

impl SameSiteHandler {
    pub fn new(none_requires_secure: bool) -> Self {
        Self {
            none_requires_secure,
        }
    }
}

impl AttributeHandler for SameSiteHandler {
    fn name(&self) -> &'static str {
        attr::SAME_SITE
    }

    fn parse(&self, cookie: &mut Cookie, value: Option<&str>) -> Result<()> {
        match value.map(str::trim).map(str::parse::<SameSite>) {
            Some(Ok(policy)) => cookie.same_site = Some(policy),
            _ => tracing::debug!("Ignoring samesite {:?} on cookie '{}'", value, cookie.name),
        }
        Ok(())
    }

    fn validate(&self, cookie: &Cookie, _origin: &CookieOrigin) -> Result<()> {
        if self.none_requires_secure && cookie.same_site == Some(SameSite::None) && !cookie.secure {
            return Err(Error::rejected(
                attr::SAME_SITE,
                format!("SameSite=None cookie '{}' must also be Secure", cookie.name),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> CookieOrigin {
        CookieOrigin::new("example.com", 443, "/", true).unwrap()
    }

    #[test]
    fn test_parse() {
        let mut c = Cookie::new("a", "b", "example.com");
        SameSiteHandler::default().parse(&mut c, Some(" strict ")).unwrap();
        assert_eq!(c.same_site, Some(SameSite::Strict));

        SameSiteHandler::default().parse(&mut c, Some("sideways")).unwrap();
        assert_eq!(c.same_site, Some(SameSite::Strict));

        let mut c = Cookie::new("a", "b", "example.com");
        SameSiteHandler::default().parse(&mut c, None).unwrap();
        assert_eq!(c.same_site, None);
    }

    #[test]
    fn test_none_requires_secure() {
        let mut c = Cookie::new("a", "b", "example.com");
        c.same_site = Some(SameSite::None);

        let err = SameSiteHandler::new(true).validate(&c, &origin()).unwrap_err();
        assert!(err.is_rejected());
        assert!(SameSiteHandler::new(false).validate(&c, &origin()).is_ok());

        let c = c.with_secure(true);
        assert!(SameSiteHandler::new(true).validate(&c, &origin()).is_ok());
    }
}
