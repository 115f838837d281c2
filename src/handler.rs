//! Pluggable per-attribute behaviour and the registry that dispatches to it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::cookie::Cookie;
use crate::error::Result;
use crate::origin::CookieOrigin;

/// Parse, validate and match rules for one cookie attribute.
///
/// Implementations must be stateless or internally immutable: the registry
/// shares them across threads.
pub trait AttributeHandler: Send + Sync {
    /// Canonical attribute name. Compared case-insensitively.
    fn name(&self) -> &'static str;

    /// Apply a raw attribute value to the cookie. `None` means the attribute
    /// appeared without `=`.
    fn parse(&self, cookie: &mut Cookie, value: Option<&str>) -> Result<()>;

    /// Fail if the cookie breaks this attribute's rule for `origin`.
    fn validate(&self, _cookie: &Cookie, _origin: &CookieOrigin) -> Result<()> {
        Ok(())
    }

    /// Whether the cookie may be sent to `origin` as far as this attribute
    /// is concerned.
    fn matches(&self, _cookie: &Cookie, _origin: &CookieOrigin) -> bool {
        true
    }
}

/// Ordered set of handlers plus a by-name index.
///
/// Validation and matching walk registration order; parse dispatch looks
/// handlers up by name. Immutable once built.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn AttributeHandler>>,
    by_name: HashMap<String, usize>,
}

impl HandlerRegistry {
    /// Build a registry. A later handler with the same name replaces the
    /// earlier one in the lookup index but both stay in iteration order.
    pub fn new(handlers: Vec<Arc<dyn AttributeHandler>>) -> Self {
        let mut by_name = HashMap::with_capacity(handlers.len());
        for (idx, handler) in handlers.iter().enumerate() {
            by_name.insert(handler.name().to_ascii_lowercase(), idx);
        }
        Self { handlers, by_name }
    }

    /// Handler for an already lower-cased attribute name.
    pub fn get(&self, name: &str) -> Option<&dyn AttributeHandler> {
        self.by_name.get(name).map(|&idx| self.handlers[idx].as_ref())
    }

    /// Handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn AttributeHandler> {
        self.handlers.iter().map(|h| h.as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run every validator in order, stopping at the first failure.
    pub fn validate(&self, cookie: &Cookie, origin: &CookieOrigin) -> Result<()> {
        self.iter().try_for_each(|handler| handler.validate(cookie, origin))
    }

    /// True only if every handler matches.
    pub fn matches(&self, cookie: &Cookie, origin: &CookieOrigin) -> bool {
        self.iter().all(|handler| handler.matches(cookie, origin))
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|h| h.name()))
            .finish()
    }
}
