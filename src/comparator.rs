//! Orderings for cookies sharing one outgoing `Cookie` header.

use std::cmp::Ordering;

use crate::config::CookieOrdering;
use crate::cookie::{attr, Cookie};

/// Total order over cookies, used only when formatting several at once.
pub trait CookieComparator: Send + Sync {
    fn compare(&self, a: &Cookie, b: &Cookie) -> Ordering;
}

impl<F> CookieComparator for F
where
    F: Fn(&Cookie, &Cookie) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &Cookie, b: &Cookie) -> Ordering {
        self(a, b)
    }
}

/// Longer paths first; among equal lengths, earlier creation first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLengthComparator;

impl CookieComparator for PathLengthComparator {
    fn compare(&self, a: &Cookie, b: &Cookie) -> Ordering {
        b.path
            .len()
            .cmp(&a.path.len())
            .then_with(|| a.creation_time.cmp(&b.creation_time))
    }
}

/// `Priority` attribute rank. Missing or unknown values count as Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn of(cookie: &Cookie) -> Self {
        match cookie.attribute(attr::PRIORITY).flatten() {
            Some(v) if v.eq_ignore_ascii_case("high") => Self::High,
            Some(v) if v.eq_ignore_ascii_case("low") => Self::Low,
            _ => Self::Medium,
        }
    }
}

/// Higher priority first, then [`PathLengthComparator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityComparator;

impl CookieComparator for PriorityComparator {
    fn compare(&self, a: &Cookie, b: &Cookie) -> Ordering {
        Priority::of(b)
            .cmp(&Priority::of(a))
            .then_with(|| PathLengthComparator.compare(a, b))
    }
}

pub(crate) fn for_ordering(ordering: CookieOrdering) -> Box<dyn CookieComparator> {
    match ordering {
        CookieOrdering::PathLength => Box::new(PathLengthComparator),
        CookieOrdering::Priority => Box::new(PriorityComparator),
    }
}
