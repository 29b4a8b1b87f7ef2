//! Process identity.

use core::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a simulated process holding one allocation.
///
/// Ids are minted from a monotonic counter and never reused within a run,
/// even after the process is deallocated. Internally an id is a plain
/// integer; the `P<n>` string form exists only at the I/O boundary, through
/// the [`Display`](fmt::Display) and [`FromStr`] impls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessId(u32);

impl ProcessId {
    pub(crate) const fn new(seq: u32) -> Self {
        Self(seq)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Parse `P<n>` as printed by [`Display`](fmt::Display); a bare `<n>` is
/// also accepted.
impl FromStr for ProcessId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['P', 'p']).unwrap_or(s);
        digits.parse().map(Self)
    }
}
