mod error;
mod ids;
mod timestamp;

pub use error::{err, Error, Result};
pub use ids::{Did, Rkey};
pub use timestamp::{Timestamp, TimestampParseError};
