//! RFC 6265 Set-Cookie Parsing Tests
//!
//! https://www.rfc-editor.org/rfc/rfc6265#section-5.2

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use cookie_spec::cookie::SameSite;
use cookie_spec::{
    AttributeHandler, Cookie, CookieOrigin, CookieSpec, Error, Header, PathLengthComparator,
};

fn origin(url: &str) -> CookieOrigin {
    CookieOrigin::parse(url).unwrap()
}

fn set_cookie(value: &str) -> Header {
    Header::new("Set-Cookie", value)
}

fn parse_one(spec: &CookieSpec, value: &str, url: &str) -> Cookie {
    let mut cookies = spec.parse(&set_cookie(value), &origin(url)).unwrap();
    assert_eq!(cookies.len(), 1, "expected exactly one cookie for {:?}", value);
    cookies.remove(0)
}

#[test]
fn test_cookie_parsing_rfc6265_section_5_2() {
    let spec = CookieSpec::new();
    let url = "http://example.com/test";

    let c = parse_one(&spec, "SID=31d4d96e407aad42", url);
    assert_eq!(c.name, "SID");
    assert_eq!(c.value, "31d4d96e407aad42");
    assert_eq!(c.domain, "example.com");
    // RFC 6265 5.1.4: default path for /test is /
    assert_eq!(c.path, "/");
    assert_eq!(c.attributes().count(), 0);

    let c = parse_one(
        &spec,
        "SID=31d4d96e407aad42; Path=/; Domain=example.com; Secure; HttpOnly",
        url,
    );
    assert_eq!(c.path, "/");
    assert_eq!(c.domain, "example.com");
    assert!(c.secure);
    assert!(c.http_only);
    assert!(!c.is_host_only());
}

#[test]
fn test_default_path_rfc6265_section_5_1_4() {
    let spec = CookieSpec::new();
    // Last slash truncation, never stripping the leading slash
    assert_eq!(parse_one(&spec, "a=1", "http://example.com/x/y").path, "/x");
    assert_eq!(parse_one(&spec, "a=1", "http://example.com/x/").path, "/x");
    assert_eq!(parse_one(&spec, "a=1", "http://example.com/x").path, "/");
    assert_eq!(parse_one(&spec, "a=1", "http://example.com").path, "/");
}

#[test]
fn test_parse_from_raw_header_line() {
    let spec = CookieSpec::new();
    let header = Header::parse_line("Set-Cookie: a=1").unwrap();
    let cookies = spec.parse(&header, &origin("http://example.com/x/y")).unwrap();
    assert_eq!(cookies[0].name, "a");
    assert_eq!(cookies[0].value, "1");
    assert_eq!(cookies[0].path, "/x");
}

#[test]
fn test_whitespace_around_name_and_value() {
    let spec = CookieSpec::new();
    let c = parse_one(
        &spec,
        "name = SID ; Path=/app ; Secure",
        "https://example.com/app/login",
    );
    assert_eq!(c.name, "name");
    assert_eq!(c.value, "SID");
    assert_eq!(c.path, "/app");
    assert_eq!(c.domain, "example.com");
    assert!(c.secure);
    let names: Vec<_> = c.attributes().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["path", "secure"]);
}

#[test]
fn test_empty_value_is_allowed() {
    let spec = CookieSpec::new();
    let c = parse_one(&spec, "SID= ; Path=/", "http://example.com/");
    assert_eq!(c.name, "SID");
    assert_eq!(c.value, "");

    let c = parse_one(&spec, "=bare", "http://example.com/");
    assert_eq!(c.name, "");
    assert_eq!(c.value, "bare");
}

#[test]
fn test_values_are_not_unquoted() {
    let spec = CookieSpec::new();
    let c = parse_one(&spec, r#"q="a b,c"; Path=/"#, "http://example.com/");
    assert_eq!(c.value, r#""a b,c""#);

    let c = parse_one(&spec, "token=abc==", "http://example.com/");
    assert_eq!(c.value, "abc==");
}

#[test]
fn test_empty_header_yields_no_cookie() {
    let spec = CookieSpec::new();
    let o = origin("http://example.com/");
    assert!(spec.parse(&set_cookie(""), &o).unwrap().is_empty());
    assert!(spec.parse(&set_cookie("   "), &o).unwrap().is_empty());
    // Name only, nothing after it: tolerated as "no cookie"
    assert!(spec.parse(&set_cookie("lonely"), &o).unwrap().is_empty());
}

#[test]
fn test_name_without_separator_is_malformed() {
    let spec = CookieSpec::new();
    let o = origin("http://example.com/");
    for value in ["SID; Path=/", "SID;", ";a=b"] {
        let err = spec.parse(&set_cookie(value), &o).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)), "{:?} gave {:?}", value, err);
    }
}

#[test]
fn test_wrong_header_name_is_malformed() {
    let spec = CookieSpec::new();
    let err = spec
        .parse(&Header::new("Cookie", "a=1"), &origin("http://example.com/"))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedHeader(_)));
    assert!(err.is_malformed());

    // Header name match is case-insensitive
    let ok = spec.parse(&Header::new("set-COOKIE", "a=1"), &origin("http://example.com/"));
    assert_eq!(ok.unwrap().len(), 1);
}

#[test]
fn test_absent_header_value_is_malformed() {
    let spec = CookieSpec::new();
    let err = spec
        .parse(&Header::without_value("Set-Cookie"), &origin("http://example.com/"))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedHeader(_)));
}

#[test]
fn test_repeated_attribute_last_value_wins() {
    let spec = CookieSpec::new();
    let c = parse_one(&spec, "a=1; Path=/one; secure; PATH=/two", "http://example.com/");
    assert_eq!(c.path, "/two");
    let attrs: Vec<_> = c.attributes().collect();
    assert_eq!(attrs, vec![("path", Some("/two")), ("secure", None)]);
}

#[test]
fn test_date_formats_rfc6265_section_5_1_1() {
    let spec = CookieSpec::new();
    let url = "http://example.com";
    let expected = Utc.timestamp_opt(784111777, 0).unwrap();

    let c = parse_one(&spec, "a=b; Expires=Sun, 06 Nov 1994 08:49:37 GMT", url);
    assert_eq!(c.expiry, Some(expected));

    let c = parse_one(&spec, "a=b; Expires=Sunday, 06-Nov-94 08:49:37 GMT", url);
    assert_eq!(c.expiry, Some(expected));

    let c = parse_one(&spec, "a=b; Expires=Sun Nov  6 08:49:37 1994", url);
    assert_eq!(c.expiry, Some(expected));

    let c = parse_one(&spec, "a=b; Expires=whenever", url);
    assert_eq!(c.expiry, None);
}

#[test]
fn test_max_age_wins_over_expires_rfc6265_section_5_3() {
    let spec = CookieSpec::new();
    let c = parse_one(
        &spec,
        "a=b; Expires=Sun, 06 Nov 1994 08:49:37 GMT; Max-Age=3600",
        "http://example.com/",
    );
    assert_eq!(c.expiry, Some(c.creation_time + Duration::seconds(3600)));
    // Raw attribute is still recorded on the cookie
    assert!(c.contains_attribute("expires"));
    assert!(c.contains_attribute("max-age"));
}

struct Counting {
    name: &'static str,
    calls: Arc<AtomicUsize>,
}

impl AttributeHandler for Counting {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, _cookie: &mut Cookie, _value: Option<&str>) -> cookie_spec::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_expires_handler_never_invoked_with_max_age() {
    let expires_calls = Arc::new(AtomicUsize::new(0));
    let max_age_calls = Arc::new(AtomicUsize::new(0));
    let spec = CookieSpec::with_handlers(
        vec![
            Arc::new(Counting {
                name: "expires",
                calls: expires_calls.clone(),
            }),
            Arc::new(Counting {
                name: "Max-Age",
                calls: max_age_calls.clone(),
            }),
        ],
        PathLengthComparator,
    );
    let o = origin("http://example.com/");

    spec.parse(&set_cookie("a=b; max-age; expires=x"), &o).unwrap();
    assert_eq!(expires_calls.load(Ordering::SeqCst), 0);
    assert_eq!(max_age_calls.load(Ordering::SeqCst), 1);

    spec.parse(&set_cookie("a=b; expires=x"), &o).unwrap();
    assert_eq!(expires_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_dispatch_follows_attribute_order() {
    struct Recorder {
        name: &'static str,
    }

    impl AttributeHandler for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn parse(&self, cookie: &mut Cookie, _value: Option<&str>) -> cookie_spec::Result<()> {
            cookie.value.push_str(self.name);
            Ok(())
        }
    }

    let spec = CookieSpec::with_handlers(
        vec![Arc::new(Recorder { name: "x" }), Arc::new(Recorder { name: "y" })],
        PathLengthComparator,
    );
    let cookies = spec
        .parse(&set_cookie("a=; Y; unknown; X"), &origin("http://example.com/"))
        .unwrap();
    assert_eq!(cookies[0].value, "yx");
}

#[test]
fn test_samesite_parsing_rfc6265bis() {
    let spec = CookieSpec::new();
    let c = parse_one(&spec, "a=b; SameSite=lax", "https://example.com/");
    assert_eq!(c.same_site, Some(SameSite::Lax));

    let c = parse_one(&spec, "a=b; SameSite=None; Secure", "https://example.com/");
    assert_eq!(c.same_site, Some(SameSite::None));

    let c = parse_one(&spec, "a=b; SameSite=bogus", "https://example.com/");
    assert_eq!(c.same_site, None);
    assert_eq!(c.attribute("samesite"), Some(Some("bogus")));
}

#[test]
fn test_domain_attribute_parsing_rfc6265_section_5_2_3() {
    let spec = CookieSpec::new();
    let c = parse_one(&spec, "a=b; Domain=.Example.com", "http://www.example.com/");
    assert_eq!(c.domain, "example.com");

    // Trailing dot: attribute ignored, cookie stays host-only
    let c = parse_one(&spec, "a=b; Domain=example.com.", "http://www.example.com/");
    assert_eq!(c.domain, "www.example.com");
    assert!(c.is_host_only());

    let err = spec
        .parse(&set_cookie("a=b; Domain"), &origin("http://www.example.com/"))
        .unwrap_err();
    assert!(err.is_malformed());
}
