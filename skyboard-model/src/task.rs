use serde::{Deserialize, Serialize};
use skyboard_base::{Did, Rkey, Timestamp};
use skyboard_position::Position;

use crate::board::{ColumnId, LabelId};
use crate::uri::{Collection, RecordUri};

/// The initial state of a task. Never rewritten once authored — every
/// subsequent change is carried by an [`crate::op::Op`] (§3). The author
/// is not required to own the board.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub owner: Did,
    pub rkey: Rkey,
    pub board_uri: RecordUri,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub column_id: ColumnId,
    /// Fractional-index position. Absent on tasks written before
    /// fractional indexing existed; such tasks instead carry `order`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Legacy integer order, present only on pre-fractional-index tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<LabelId>>,
    pub created_at: Timestamp,
}

impl Task {
    pub fn task_uri(&self) -> RecordUri {
        RecordUri::new(self.owner.clone(), Collection::Task, self.rkey.clone())
    }

    /// The task's base position, deriving it from the legacy `order`
    /// field (§4.4 step 1) when no fractional-index position was ever
    /// written.
    pub fn base_position(&self) -> Position {
        match &self.position {
            Some(p) => p.clone(),
            None => skyboard_position::order_to_position(self.order.unwrap_or(0)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample(position: Option<Position>, order: Option<u32>) -> Task {
        Task {
            owner: Did::from("alice"),
            rkey: Rkey::from("t1"),
            board_uri: RecordUri::new(Did::from("alice"), Collection::Board, Rkey::from("b1")),
            title: "Fix login bug".into(),
            description: None,
            column_id: ColumnId("todo".into()),
            position,
            order,
            label_ids: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn base_position_prefers_explicit_position() {
        let explicit: Position = "a0".parse().unwrap();
        let task = sample(Some(explicit.clone()), Some(7));
        assert_eq!(task.base_position(), explicit);
    }

    #[test]
    fn base_position_derives_from_legacy_order_when_absent() {
        let task0 = sample(None, Some(0));
        let task1 = sample(None, Some(1));
        assert!(task0.base_position() < task1.base_position());
    }

    #[test]
    fn base_position_defaults_order_zero_when_both_absent() {
        let task = sample(None, None);
        assert_eq!(task.base_position(), skyboard_position::order_to_position(0));
    }
}
