use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque party identifier (e.g. a DID). The core never inspects its
/// internal structure, only compares it for equality and orders it
/// lexicographically as a tie-breaker.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(pub String);

impl Did {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Did {
    fn from(s: &str) -> Self {
        Did(s.to_owned())
    }
}

impl From<String> for Did {
    fn from(s: String) -> Self {
        Did(s)
    }
}

/// A lexicographically-sortable, timestamp-ordered record key.
///
/// The allocation scheme for rkeys (e.g. TID-style base32-sortable
/// identifiers) belongs to the sync layer; the core only requires that
/// two rkeys compare the way they were created, which `Ord` captures.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rkey(pub String);

impl Rkey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Rkey {
    fn from(s: &str) -> Self {
        Rkey(s.to_owned())
    }
}

impl From<String> for Rkey {
    fn from(s: String) -> Self {
        Rkey(s)
    }
}
