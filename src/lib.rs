//! # cookie_spec
//!
//! Browser-compatible RFC 6265 cookie handling for HTTP clients and proxies.
//!
//! Parses `Set-Cookie` response headers into [`Cookie`] records, validates
//! them against the [`CookieOrigin`] they came from, matches stored cookies
//! against outgoing requests, and formats them into a `Cookie` request
//! header. Storage, eviction and network I/O are left to the caller.
//!
//! ```rust
//! use cookie_spec::{CookieOrigin, CookieSpec, Header};
//!
//! let spec = CookieSpec::new();
//! let origin = CookieOrigin::parse("https://example.com/app/login")?;
//!
//! let header = Header::new("Set-Cookie", "SID=31d4d96e407aad42; Path=/app; Secure; HttpOnly");
//! let cookies = spec.parse(&header, &origin)?;
//! spec.validate(&cookies[0], &origin)?;
//!
//! let request = CookieOrigin::parse("https://example.com/app/home")?;
//! assert!(spec.matches(&cookies[0], &request));
//! assert_eq!(spec.format_cookies(&cookies)?.value(), Some("SID=31d4d96e407aad42"));
//! # Ok::<(), cookie_spec::Error>(())
//! ```

pub mod comparator;
pub mod config;
pub mod cookie;
pub mod cursor;
pub mod date;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod header;
pub mod origin;
pub mod spec;
pub mod tokenizer;

// Re-exports
pub use comparator::{CookieComparator, PathLengthComparator, Priority, PriorityComparator};
pub use config::{CookieOrdering, CookieSpecConfig};
pub use cookie::{Cookie, SameSite};
pub use error::{Error, Result};
pub use handler::{AttributeHandler, HandlerRegistry};
pub use header::Header;
pub use origin::CookieOrigin;
pub use spec::CookieSpec;
