use crate::cookie::{attr, Cookie};
use crate::error::Result;
use crate::handler::AttributeHandler;

/// `HttpOnly` flag. Has no bearing on validation or matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOnlyHandler;

impl AttributeHandler for HttpOnlyHandler {
    fn name(&self) -> &'static str {
        attr::HTTP_ONLY
    }

    fn parse(&self, cookie: &mut Cookie, _value: Option<&str>) -> Result<()> {
        cookie.http_only = true;
        Ok(())
    }
}
