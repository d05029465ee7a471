use serde::{Deserialize, Serialize};
use skyboard_base::{Did, Rkey, Timestamp};

use crate::uri::{Collection, RecordUri};

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub String);

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(pub String);

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub order: i64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    pub color: String,
}

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum BoardError {
    #[error("board has duplicate column id `{0}`")]
    DuplicateColumnId(String),
}

/// A board definition: owned by one party, write-once. The board's
/// column/label configuration is an anchor — it is never mutated by Ops
/// and does not participate in LWW.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub owner: Did,
    pub rkey: Rkey,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub open: bool,
    pub created_at: Timestamp,
}

impl Board {
    pub fn board_uri(&self) -> RecordUri {
        RecordUri::new(self.owner.clone(), Collection::Board, self.rkey.clone())
    }

    /// Validates the column-id-uniqueness invariant (§3). The ordered
    /// `columns` list itself defines the total order over columns; callers
    /// sort by `Column::order` to get that sequence.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = std::collections::BTreeSet::new();
        for column in &self.columns {
            if !seen.insert(&column.id) {
                return Err(BoardError::DuplicateColumnId(column.id.0.clone()));
            }
        }
        Ok(())
    }

    pub fn columns_in_order(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.columns.iter().any(|c| &c.id == id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn col(id: &str, order: i64) -> Column {
        Column {
            id: ColumnId(id.into()),
            name: id.into(),
            order,
        }
    }

    #[test]
    fn rejects_duplicate_column_ids() {
        let board = Board {
            owner: Did::from("alice"),
            rkey: Rkey::from("b1"),
            columns: vec![col("todo", 0), col("todo", 1)],
            labels: vec![],
            open: false,
            created_at: Timestamp::now(),
        };
        assert_eq!(
            board.validate(),
            Err(BoardError::DuplicateColumnId("todo".into()))
        );
    }

    #[test]
    fn columns_in_order_sorts_by_declared_order() {
        let board = Board {
            owner: Did::from("alice"),
            rkey: Rkey::from("b1"),
            columns: vec![col("doing", 1), col("todo", 0), col("done", 2)],
            labels: vec![],
            open: false,
            created_at: Timestamp::now(),
        };
        let ids: Vec<&str> = board
            .columns_in_order()
            .iter()
            .map(|c| c.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["todo", "doing", "done"]);
    }
}
