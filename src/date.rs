//! Cookie date parsing (RFC 6265 section 5.1.1).
//!
//! Browsers do not parse `Expires` as a strict RFC 1123 date. They split the
//! value on a wide delimiter set and pick out the time, day, month and year
//! from whichever tokens look like them, in any order.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

fn is_date_delimiter(byte: u8) -> bool {
    matches!(byte, 0x09 | 0x20..=0x2F | 0x3B..=0x40 | 0x5B..=0x60 | 0x7B..=0x7E)
}

/// Leading run of 1..=max digits, rejected if more digits follow.
fn leading_digits(token: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = token.bytes().take_while(u8::is_ascii_digit).count();
    if len < min || len > max {
        return None;
    }
    let value = token[..len].parse().ok()?;
    Some((value, &token[len..]))
}

fn parse_time(token: &str) -> Option<(u32, u32, u32)> {
    let (hour, rest) = leading_digits(token, 1, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (minute, rest) = leading_digits(rest, 1, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (second, _) = leading_digits(rest, 1, 2)?;
    Some((hour, minute, second))
}

fn parse_month(token: &str) -> Option<u32> {
    let prefix = token.get(..3)?;
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(prefix))
        .map(|idx| idx as u32 + 1)
}

/// Parse a cookie date. Returns `None` for anything a browser would ignore.
pub fn parse_cookie_date(value: &str) -> Option<DateTime<Utc>> {
    let mut time = None;
    let mut day = None;
    let mut month = None;
    let mut year = None;

    for token in value.split(|c: char| c.is_ascii() && is_date_delimiter(c as u8)) {
        if token.is_empty() {
            continue;
        }
        if time.is_none() {
            if let Some(t) = parse_time(token) {
                time = Some(t);
                continue;
            }
        }
        if day.is_none() {
            if let Some((d, _)) = leading_digits(token, 1, 2) {
                day = Some(d);
                continue;
            }
        }
        if month.is_none() {
            if let Some(m) = parse_month(token) {
                month = Some(m);
                continue;
            }
        }
        if year.is_none() {
            if let Some((y, _)) = leading_digits(token, 2, 4) {
                year = Some(y);
                continue;
            }
        }
    }

    let (hour, minute, second) = time?;
    let day = day?;
    let month = month?;
    let year = match year? {
        y @ 70..=99 => y + 1900,
        y @ 0..=69 => y + 2000,
        y => y,
    };

    if !(1..=31).contains(&day) || year < 1601 || hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)?.and_hms_opt(hour, minute, second)?;
    Some(Utc.from_utc_datetime(&naive))
}
