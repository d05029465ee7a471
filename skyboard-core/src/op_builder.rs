use std::cell::Cell;

use skyboard_base::{Did, Rkey, Timestamp};
use skyboard_lww::EffectiveTask;
use skyboard_model::{Collection, ColumnId, FieldDelta, LabelId, Op, RecordUri, Task};
use skyboard_position::{self, Position, PositionError};

#[derive(Debug, thiserror::Error)]
pub enum OpBuilderError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] PositionError),
}

/// Stamps timestamps that are monotone non-decreasing within one
/// process (§4.6's contract). Cross-process ordering is out of scope —
/// the LWW resolver tolerates arbitrary clock skew by design, so a
/// backward jump here only needs clamping to `previous + 1ms`, not
/// rejecting.
#[derive(Default)]
pub struct Clock {
    last: Cell<Option<Timestamp>>,
}

impl Clock {
    pub fn new() -> Self {
        Clock {
            last: Cell::new(None),
        }
    }

    pub fn now(&self) -> Timestamp {
        let candidate = Timestamp::now();
        let stamped = match self.last.get() {
            Some(prev) if candidate <= prev => prev.succ_millis(),
            _ => candidate,
        };
        self.last.set(Some(stamped));
        stamped
    }
}

/// Constructs well-formed Task and Op records for the sync layer to
/// persist (§4.6). Rkey allocation itself stays with the caller: the
/// rkey encoding scheme (e.g. TID-style base32) belongs to the sync
/// layer, not the core (see `skyboard_base::Rkey`'s docs), so every
/// constructor here takes a freshly-minted rkey as a parameter rather
/// than generating one.
pub struct OpBuilder<'a> {
    clock: &'a Clock,
}

impl<'a> OpBuilder<'a> {
    pub fn new(clock: &'a Clock) -> Self {
        OpBuilder { clock }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_task(
        &self,
        author: Did,
        rkey: Rkey,
        board_uri: RecordUri,
        column_id: ColumnId,
        after_position: Option<&Position>,
        before_position: Option<&Position>,
        title: String,
        description: Option<String>,
        label_ids: Option<Vec<LabelId>>,
    ) -> Result<Task, OpBuilderError> {
        let position = skyboard_position::between(after_position, before_position)?;
        Ok(Task {
            owner: author,
            rkey,
            board_uri,
            title,
            description,
            column_id,
            position: Some(position),
            order: None,
            label_ids,
            created_at: self.clock.now(),
        })
    }

    pub fn op_update(
        &self,
        author: Did,
        rkey: Rkey,
        target: &EffectiveTask,
        board_uri: RecordUri,
        delta: FieldDelta,
    ) -> Op {
        Op {
            owner: author,
            rkey,
            target_task_uri: RecordUri::new(
                target.owner.clone(),
                Collection::Task,
                target.rkey.clone(),
            ),
            board_uri,
            delta,
            created_at: self.clock.now(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn op_move(
        &self,
        author: Did,
        rkey: Rkey,
        target: &EffectiveTask,
        board_uri: RecordUri,
        new_column_id: ColumnId,
        after_position: Option<&Position>,
        before_position: Option<&Position>,
    ) -> Result<Op, OpBuilderError> {
        let position = skyboard_position::between(after_position, before_position)?;
        Ok(self.op_update(
            author,
            rkey,
            target,
            board_uri,
            FieldDelta {
                column_id: Some(new_column_id),
                position: Some(position),
                ..Default::default()
            },
        ))
    }
}
