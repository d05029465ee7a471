use std::collections::BTreeSet;

use skyboard_base::{Did, Rkey};
use skyboard_core::MaterializeInput;
use skyboard_model::{Board, Op, RecordUri, Task, Trust};
use skyboard_trust::derive_owner_trusts;

use crate::fixtures::t0;

/// Accumulates the owned record set for one materialization scenario,
/// then lends it out as a [`MaterializeInput`]. Tests build one of
/// these per scenario (S1-S6 and ad hoc cases) instead of hand-wiring
/// the borrow lifetimes every time. `owner_trusts` is always kept in
/// sync with `trusts` via [`derive_owner_trusts`] rather than poked
/// directly, so scenarios exercise the same owner-scoped filtering the
/// core does.
pub struct ScenarioBuilder {
    pub board: Board,
    pub tasks: Vec<Task>,
    pub ops: Vec<Op>,
    pub trusts: Vec<Trust>,
    pub owner_trusts: BTreeSet<Did>,
    pub approved_uris: BTreeSet<RecordUri>,
}

impl ScenarioBuilder {
    pub fn new(board: Board) -> Self {
        ScenarioBuilder {
            board,
            tasks: Vec::new(),
            ops: Vec::new(),
            trusts: Vec::new(),
            owner_trusts: BTreeSet::new(),
            approved_uris: BTreeSet::new(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_op(mut self, op: Op) -> Self {
        self.ops.push(op);
        self
    }

    /// Asserts a `Trust` record from the board owner naming
    /// `trusted_party`, then re-derives `owner_trusts` from the full set
    /// of asserted trusts.
    pub fn trust(mut self, trusted_party: Did) -> Self {
        let rkey = Rkey::from(format!("trust{}", self.trusts.len() + 1));
        self.trusts.push(Trust {
            owner: self.board.owner.clone(),
            rkey,
            trusted_party,
            board_uri: self.board.board_uri(),
            created_at: t0(),
        });
        self.owner_trusts = derive_owner_trusts(&self.trusts, &self.board.owner);
        self
    }

    pub fn approve(mut self, uri: RecordUri) -> Self {
        self.approved_uris.insert(uri);
        self
    }

    pub fn input<'a>(&'a self, viewer: &'a Did) -> MaterializeInput<'a> {
        MaterializeInput {
            board: &self.board,
            tasks: &self.tasks,
            ops: &self.ops,
            owner_trusts: &self.owner_trusts,
            viewer,
            approved_uris: &self.approved_uris,
        }
    }
}
