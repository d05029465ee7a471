use serde::{Deserialize, Serialize};
use skyboard_base::{Did, Rkey, Timestamp};

use crate::uri::RecordUri;

/// A grant, authored by a board owner, marking another party's records
/// as mergeable on that board. Trust records from any other author are
/// ignored by the core (§3).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trust {
    pub owner: Did,
    pub rkey: Rkey,
    pub trusted_party: Did,
    pub board_uri: RecordUri,
    pub created_at: Timestamp,
}
