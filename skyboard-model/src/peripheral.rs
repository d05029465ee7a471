use serde::{Deserialize, Serialize};
use skyboard_base::{Did, Rkey, Timestamp};

use crate::uri::RecordUri;

/// Owner-authored record naming a specific Task or Comment URI as
/// visible on an open board despite its author being untrusted. Grants
/// visibility without promoting the author to trusted (§3).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub owner: Did,
    pub rkey: Rkey,
    pub board_uri: RecordUri,
    pub target_uri: RecordUri,
    pub created_at: Timestamp,
}

/// A threaded remark on a Task. Not folded into LWW state by the core,
/// but its author is subject to the same visibility predicate as a Task
/// author (§4.2 names "Task or Comment" explicitly).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub owner: Did,
    pub rkey: Rkey,
    pub board_uri: RecordUri,
    pub target_uri: RecordUri,
    pub body: String,
    pub created_at: Timestamp,
}

/// A lightweight acknowledgement (e.g. an emoji) attached to a Task or
/// Comment.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub owner: Did,
    pub rkey: Rkey,
    pub board_uri: RecordUri,
    pub target_uri: RecordUri,
    pub kind: String,
    pub created_at: Timestamp,
}
