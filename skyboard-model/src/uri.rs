use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skyboard_base::{Did, Rkey};

/// The closed set of record kinds the core knows about. `board`, `task`,
/// `op`, and `trust` are the core collections (§3); `comment`, `approval`,
/// and `reaction` are peripheral but still need a URI token since the
/// visibility predicate gates them too (§4.2).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Board,
    Task,
    Op,
    Trust,
    Comment,
    Approval,
    Reaction,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Board => "board",
            Collection::Task => "task",
            Collection::Op => "op",
            Collection::Trust => "trust",
            Collection::Comment => "comment",
            Collection::Approval => "approval",
            Collection::Reaction => "reaction",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum RecordUriError {
    #[error("record uri `{0}` is missing the at:// scheme")]
    MissingScheme(String),
    #[error("record uri `{0}` does not have exactly party/collection/rkey segments")]
    WrongSegmentCount(String),
    #[error("record uri `{0}` names unknown collection `{1}`")]
    UnknownCollection(String, String),
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "board" => Ok(Collection::Board),
            "task" => Ok(Collection::Task),
            "op" => Ok(Collection::Op),
            "trust" => Ok(Collection::Trust),
            "comment" => Ok(Collection::Comment),
            "approval" => Ok(Collection::Approval),
            "reaction" => Ok(Collection::Reaction),
            other => Err(other.to_owned()),
        }
    }
}

/// The canonical cross-repository reference to a record:
/// `at://<party>/<collection>/<rkey>`. Opaque to the core beyond parsing
/// and comparison — only the Op Builder constructs these, only the Op
/// Filter and Materializer compare them.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordUri {
    pub party: Did,
    pub collection: Collection,
    pub rkey: Rkey,
}

impl RecordUri {
    pub fn new(party: Did, collection: Collection, rkey: Rkey) -> Self {
        RecordUri {
            party,
            collection,
            rkey,
        }
    }
}

impl fmt::Display for RecordUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at://{}/{}/{}", self.party, self.collection, self.rkey)
    }
}

impl FromStr for RecordUri {
    type Err = RecordUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("at://")
            .ok_or_else(|| RecordUriError::MissingScheme(s.to_owned()))?;
        let parts: Vec<&str> = rest.split('/').collect();
        let [party, collection, rkey] = parts[..] else {
            return Err(RecordUriError::WrongSegmentCount(s.to_owned()));
        };
        let collection = Collection::from_str(collection)
            .map_err(|c| RecordUriError::UnknownCollection(s.to_owned(), c))?;
        Ok(RecordUri {
            party: Did::from(party),
            collection,
            rkey: Rkey::from(rkey),
        })
    }
}

impl TryFrom<String> for RecordUri {
    type Error = RecordUriError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RecordUri> for String {
    fn from(uri: RecordUri) -> String {
        uri.to_string()
    }
}
