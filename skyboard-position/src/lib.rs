//! Fractional-index position allocator (component 1 of the core).
//!
//! Positions are strings over a 62-symbol alphabet (`0-9A-Za-z`, in that
//! byte order) used to totally order tasks within a column without ever
//! needing to renumber a neighbor — a writer who can only append to their
//! own repository can still move a single task anywhere in any column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE: u16 = 62;

/// The number of `between(prev, None)` steps the legacy `order` integer
/// migration (§4.4 step 1) will take before it stops advancing, to bound
/// pathological inputs. Not semantic: any sufficiently large value gives
/// the same relative ordering, but all clients must agree on one.
pub const LEGACY_ORDER_STEP_CAP: u32 = 10_000;

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum PositionError {
    #[error("left position `{left}` is not strictly less than right position `{right}`")]
    InvalidOrder { left: String, right: String },
    #[error("position `{0}` is empty or contains a character outside the alphabet")]
    AlphabetViolation(String),
}

/// A fractional-index position string. `Ord` is plain byte-wise string
/// order, which coincides with alphabet order because the alphabet's
/// byte values are already monotone in the order we want (`0-9` then
/// `A-Z` then `a-z`).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn digit_value(c: u8) -> Option<u8> {
        ALPHABET.iter().position(|&d| d == c).map(|i| i as u8)
    }

    fn validate(s: &str) -> Result<(), PositionError> {
        if s.is_empty() || !s.bytes().all(|b| Self::digit_value(b).is_some()) {
            return Err(PositionError::AlphabetViolation(s.to_owned()));
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)?;
        Ok(Position(s.to_owned()))
    }
}

impl TryFrom<String> for Position {
    type Error = PositionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Position(s))
    }
}

/// Computes a position strictly between `left` and `right`, treating an
/// absent side as -infinity / +infinity.
///
/// This is the classic digit-by-digit fractional-indexing midpoint: strip
/// the common prefix, then either split the gap between the first
/// differing digits (when it is wide enough to hold a digit strictly
/// between them) or commit to the narrower of the two digits and recurse
/// one level deeper to find a point past it.
pub fn between(left: Option<&Position>, right: Option<&Position>) -> Result<Position, PositionError> {
    if let (Some(l), Some(r)) = (left, right) {
        if l.0 >= r.0 {
            return Err(PositionError::InvalidOrder {
                left: l.0.clone(),
                right: r.0.clone(),
            });
        }
    }
    let a = left.map(|p| p.0.as_bytes()).unwrap_or(&[]);
    let b = right.map(|p| p.0.as_bytes());
    let digits = midpoint_digits(a, b);
    Ok(Position(digits))
}

fn midpoint_digits(a: &[u8], b: Option<&[u8]>) -> String {
    // Strip the common prefix, treating a missing byte on either side as
    // the digit '0' for the purpose of comparison only (it does not get
    // emitted unless the loop actually consumes it from both sides).
    if let Some(b) = b {
        let mut n = 0;
        while n < a.len().max(b.len()) {
            let da = a.get(n).copied();
            let db = b.get(n).copied();
            match (da, db) {
                (Some(x), Some(y)) if x == y => n += 1,
                (None, Some(y)) if y == ALPHABET[0] => n += 1,
                _ => break,
            }
        }
        if n > 0 {
            let prefix = std::str::from_utf8(&b[..n]).unwrap();
            return prefix.to_owned() + &midpoint_digits(&a[n.min(a.len())..], Some(&b[n..]));
        }
    }

    let digit_a: i32 = a.first().map(|&c| Position::digit_value(c).unwrap() as i32).unwrap_or(0);
    let digit_b: i32 = match b {
        None => BASE as i32,
        Some(b) => match b.first() {
            Some(&c) => Position::digit_value(c).unwrap() as i32,
            None => BASE as i32,
        },
    };

    if digit_b - digit_a > 1 {
        let mid = ((digit_a + digit_b) / 2) as usize;
        String::from(ALPHABET[mid] as char)
    } else if let Some(b) = b {
        if b.len() > 1 {
            String::from(b[0] as char)
        } else {
            let rest = a.get(1..).unwrap_or(&[]);
            String::from(ALPHABET[digit_a as usize] as char) + &midpoint_digits(rest, None)
        }
    } else {
        let rest = a.get(1..).unwrap_or(&[]);
        String::from(ALPHABET[digit_a as usize] as char) + &midpoint_digits(rest, None)
    }
}

/// Derives a fractional position for a task that only carries the legacy
/// `order` integer, by repeatedly inserting at the tail `order` times,
/// capped at [`LEGACY_ORDER_STEP_CAP`].
pub fn order_to_position(order: u32) -> Position {
    let steps = order.min(LEGACY_ORDER_STEP_CAP);
    let mut pos: Option<Position> = None;
    for _ in 0..=steps {
        pos = Some(between(pos.as_ref(), None).expect("tail insertion never violates ordering"));
    }
    pos.expect("at least one step always runs")
}
