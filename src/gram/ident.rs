//! Element identifiers for tagged words and diagram elements
//!
//! Identifiers come from an [IdGenerator] the caller owns and threads through
//! explicitly. There is no module-level counter: sharing a generator across
//! threads is safe because the sequence lives in an atomic, and two sessions
//! that want independent sequences simply own two generators.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier for an element produced during one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElementId(u64);

impl ElementId {
    pub fn value(self) -> u64 {
        self.0
    }

    /// Base-36 short code, as shown in element labels
    pub fn short_code(self) -> String {
        const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut n = self.0;
        let mut out = Vec::new();
        loop {
            out.push(DIGITS[(n % 36) as usize]);
            n /= 36;
            if n == 0 {
                break;
            }
        }
        out.reverse();
        String::from_utf8(out).unwrap_or_default()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_code())
    }
}

/// Monotonic identifier source for a single session
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: u64) -> Self {
        IdGenerator {
            next: AtomicU64::new(first),
        }
    }

    /// Produce the next identifier. Monotonic under concurrent use.
    pub fn next_id(&self) -> ElementId {
        ElementId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
