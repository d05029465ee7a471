use serde::{Deserialize, Serialize};
use skyboard_base::{Did, Rkey, Timestamp};
use skyboard_position::Position;

use crate::board::{ColumnId, LabelId};
use crate::uri::{Collection, RecordUri};

/// A sparse delta over the mutable fields of a task. Each field is
/// independently optional: absent means "this op does not touch this
/// field", not "reset to default". `title: Some(String::new())` (an
/// explicit empty string) must remain distinguishable from `title: None`
/// on the wire, which is why these are plain `Option<T>` with
/// `skip_serializing_if` rather than a flattened/defaulted struct.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<LabelId>>,
}

impl FieldDelta {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.column_id.is_none()
            && self.position.is_none()
            && self.label_ids.is_none()
    }
}

/// A partial mutation targeting a task in some (possibly different)
/// repository. Authored by any party, not necessarily the task's author.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Op {
    pub owner: Did,
    pub rkey: Rkey,
    pub target_task_uri: RecordUri,
    pub board_uri: RecordUri,
    pub delta: FieldDelta,
    pub created_at: Timestamp,
}

impl Op {
    pub fn op_uri(&self) -> RecordUri {
        RecordUri::new(self.owner.clone(), Collection::Op, self.rkey.clone())
    }
}
