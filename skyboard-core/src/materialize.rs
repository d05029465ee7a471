use std::collections::{BTreeMap, BTreeSet};

use skyboard_base::{Did, Rkey};
use skyboard_lww::{resolve_refs, EffectiveTask};
use skyboard_model::{Board, ColumnId, Op, RecordUri, Task};
use skyboard_trust::{split_applied_and_pending, TrustContext};

use crate::diagnostics::Diagnostics;

/// Borrowed view over everything one materialization run needs (§4.5
/// step 0 / §6's sync-layer contract already resolved to a snapshot).
pub struct MaterializeInput<'a> {
    pub board: &'a Board,
    pub tasks: &'a [Task],
    pub ops: &'a [Op],
    pub owner_trusts: &'a BTreeSet<Did>,
    pub viewer: &'a Did,
    pub approved_uris: &'a BTreeSet<RecordUri>,
}

#[derive(Clone, Debug, Default)]
pub struct MaterializeOutput {
    pub columns: BTreeMap<ColumnId, Vec<EffectiveTask>>,
    pub orphaned: Vec<EffectiveTask>,
    pub pending_proposals: Vec<Op>,
    pub untrusted_tasks: Vec<Task>,
}

/// The end-to-end transformation from raw records to a renderable view
/// (§4.5). Never panics and never fails; malformed or dangling input is
/// routed to `diagnostics` and excluded from the view rather than
/// aborting the run.
pub fn materialize(input: &MaterializeInput, diagnostics: &dyn Diagnostics) -> MaterializeOutput {
    let mut seen: BTreeSet<(Did, Rkey)> = BTreeSet::new();
    let mut tasks: Vec<&Task> = Vec::new();
    for task in input.tasks {
        if seen.insert((task.owner.clone(), task.rkey.clone())) {
            tasks.push(task);
        }
    }

    let known_uris: BTreeSet<RecordUri> = tasks.iter().map(|t| t.task_uri()).collect();
    let mut seen_ops: BTreeSet<(Did, Rkey)> = BTreeSet::new();
    let mut ops_by_target: BTreeMap<RecordUri, Vec<&Op>> = BTreeMap::new();
    for op in input.ops {
        if !seen_ops.insert((op.owner.clone(), op.rkey.clone())) {
            continue;
        }
        if known_uris.contains(&op.target_task_uri) {
            ops_by_target
                .entry(op.target_task_uri.clone())
                .or_default()
                .push(op);
        } else {
            diagnostics.dangling_op_target(&op.op_uri(), &op.target_task_uri);
        }
    }

    let ctx = TrustContext::new(&input.board.owner, input.viewer, input.owner_trusts);

    let mut output = MaterializeOutput::default();

    for task in tasks {
        let task_uri = task.task_uri();
        let empty: Vec<&Op> = Vec::new();
        let ops_for_task = ops_by_target.get(&task_uri).unwrap_or(&empty);
        let (applied, pending) = split_applied_and_pending(ops_for_task, &task.owner, &ctx);
        let effective = resolve_refs(task, &applied);

        let visible = ctx.is_content_visible(
            &task.owner,
            &task_uri,
            input.board.open,
            input.approved_uris,
        );
        if !visible {
            output.untrusted_tasks.push(task.clone());
            continue;
        }

        output
            .pending_proposals
            .extend(pending.into_iter().cloned());

        if input.board.has_column(&effective.column_id) {
            output
                .columns
                .entry(effective.column_id.clone())
                .or_default()
                .push(effective);
        } else {
            diagnostics.orphaned_task(&task_uri, &effective.column_id);
            output.orphaned.push(effective);
        }
    }

    let sort_key = |t: &EffectiveTask| (t.position.clone(), t.owner.clone(), t.rkey.clone());
    for column in output.columns.values_mut() {
        column.sort_by_key(sort_key);
    }
    output.orphaned.sort_by_key(sort_key);

    output
}

#[cfg(test)]
mod test {
    use super::*;
    use skyboard_model::{Collection, Column, FieldDelta};

    fn did(s: &str) -> Did {
        Did::from(s)
    }

    fn board_uri(owner: &Did) -> RecordUri {
        RecordUri::new(owner.clone(), Collection::Board, Rkey::from("b1"))
    }

    fn sample_board(open: bool) -> Board {
        Board {
            owner: did("alice"),
            rkey: Rkey::from("b1"),
            columns: vec![
                Column {
                    id: ColumnId("todo".into()),
                    name: "Todo".into(),
                    order: 0,
                },
                Column {
                    id: ColumnId("doing".into()),
                    name: "Doing".into(),
                    order: 1,
                },
            ],
            labels: vec![],
            open,
            created_at: "2024-01-01T00:00:00.000Z".parse().unwrap(),
        }
    }

    fn sample_task(owner: &str, rkey: &str, created_at: &str) -> Task {
        Task {
            owner: did(owner),
            rkey: Rkey::from(rkey),
            board_uri: board_uri(&did("alice")),
            title: "Fix login bug".into(),
            description: None,
            column_id: ColumnId("todo".into()),
            position: Some("a0".parse().unwrap()),
            order: None,
            label_ids: None,
            created_at: created_at.parse().unwrap(),
        }
    }

    /// S1: a trusted collaborator's cross-repo move is applied.
    #[test]
    fn trusted_collaborator_move_is_applied() {
        let board = sample_board(false);
        let task = sample_task("alice", "t1", "2024-01-01T00:00:00.000Z");
        let mut trusts = BTreeSet::new();
        trusts.insert(did("bob"));
        let op = Op {
            owner: did("bob"),
            rkey: Rkey::from("o1"),
            target_task_uri: task.task_uri(),
            board_uri: board.board_uri(),
            delta: FieldDelta {
                column_id: Some(ColumnId("doing".into())),
                ..Default::default()
            },
            created_at: "2024-01-02T00:00:00.000Z".parse().unwrap(),
        };
        let tasks = [task];
        let ops = [op];
        let approved = BTreeSet::new();
        let input = MaterializeInput {
            board: &board,
            tasks: &tasks,
            ops: &ops,
            owner_trusts: &trusts,
            viewer: &did("alice"),
            approved_uris: &approved,
        };
        let out = materialize(&input, &crate::diagnostics::NullDiagnostics);
        assert!(out.pending_proposals.is_empty());
        let doing = out.columns.get(&ColumnId("doing".into())).unwrap();
        assert_eq!(doing.len(), 1);
        assert_eq!(doing[0].title, "Fix login bug");
        assert_eq!(doing[0].last_modified_by, did("bob"));
    }

    /// S2: an untrusted author's op is pending, task stays unchanged.
    #[test]
    fn untrusted_op_is_pending_not_applied() {
        let board = sample_board(false);
        let task = sample_task("alice", "t1", "2024-01-01T00:00:00.000Z");
        let trusts = BTreeSet::new();
        let op = Op {
            owner: did("carol"),
            rkey: Rkey::from("o1"),
            target_task_uri: task.task_uri(),
            board_uri: board.board_uri(),
            delta: FieldDelta {
                title: Some("pwned".into()),
                ..Default::default()
            },
            created_at: "2024-01-03T00:00:00.000Z".parse().unwrap(),
        };
        let tasks = [task];
        let ops = [op];
        let approved = BTreeSet::new();
        let input = MaterializeInput {
            board: &board,
            tasks: &tasks,
            ops: &ops,
            owner_trusts: &trusts,
            viewer: &did("alice"),
            approved_uris: &approved,
        };
        let out = materialize(&input, &crate::diagnostics::NullDiagnostics);
        let todo = out.columns.get(&ColumnId("todo".into())).unwrap();
        assert_eq!(todo[0].title, "Fix login bug");
        assert_eq!(out.pending_proposals.len(), 1);
        assert_eq!(out.pending_proposals[0].owner, did("carol"));
    }

    /// S6: a task author's own op always applies, even to a viewer with
    /// no trust relation to that author.
    #[test]
    fn self_edit_via_op_applies_for_any_viewer() {
        let board = sample_board(false);
        let task = sample_task("dan", "t1", "2024-01-01T00:00:00.000Z");
        let trusts = BTreeSet::new();
        let op = Op {
            owner: did("dan"),
            rkey: Rkey::from("o1"),
            target_task_uri: task.task_uri(),
            board_uri: board.board_uri(),
            delta: FieldDelta {
                title: Some("final".into()),
                ..Default::default()
            },
            created_at: "2024-01-02T00:00:00.000Z".parse().unwrap(),
        };
        let tasks = [task];
        let ops = [op];
        let approved = BTreeSet::new();
        let input = MaterializeInput {
            board: &board,
            tasks: &tasks,
            ops: &ops,
            owner_trusts: &trusts,
            viewer: &did("alice"),
            approved_uris: &approved,
        };
        let out = materialize(&input, &crate::diagnostics::NullDiagnostics);
        // Dan is untrusted on Alice's board and not the viewer, so the
        // task itself is invisible to Alice — only its visibility, not
        // the op eligibility, gates this; the op itself is still
        // `applied` internally per §4.3 since `author == task.owner`.
        assert_eq!(out.untrusted_tasks.len(), 1);
        assert!(out.columns.is_empty());
    }

    #[test]
    fn unknown_column_lands_in_orphaned_bucket() {
        let board = sample_board(false);
        let mut task = sample_task("alice", "t1", "2024-01-01T00:00:00.000Z");
        task.column_id = ColumnId("nonexistent".into());
        let trusts = BTreeSet::new();
        let tasks = [task];
        let ops: [Op; 0] = [];
        let approved = BTreeSet::new();
        let input = MaterializeInput {
            board: &board,
            tasks: &tasks,
            ops: &ops,
            owner_trusts: &trusts,
            viewer: &did("alice"),
            approved_uris: &approved,
        };
        let out = materialize(&input, &crate::diagnostics::NullDiagnostics);
        assert_eq!(out.orphaned.len(), 1);
        assert!(out.columns.is_empty());
    }

    #[test]
    fn duplicate_task_records_dedupe_by_owner_and_rkey() {
        let board = sample_board(false);
        let task = sample_task("alice", "t1", "2024-01-01T00:00:00.000Z");
        let tasks = [task.clone(), task];
        let trusts = BTreeSet::new();
        let ops: [Op; 0] = [];
        let approved = BTreeSet::new();
        let input = MaterializeInput {
            board: &board,
            tasks: &tasks,
            ops: &ops,
            owner_trusts: &trusts,
            viewer: &did("alice"),
            approved_uris: &approved,
        };
        let out = materialize(&input, &crate::diagnostics::NullDiagnostics);
        let todo = out.columns.get(&ColumnId("todo".into())).unwrap();
        assert_eq!(todo.len(), 1);
    }

    #[test]
    fn dangling_op_target_is_dropped_not_fatal() {
        let board = sample_board(false);
        let task = sample_task("alice", "t1", "2024-01-01T00:00:00.000Z");
        let stray_op = Op {
            owner: did("alice"),
            rkey: Rkey::from("o1"),
            target_task_uri: RecordUri::new(did("alice"), Collection::Task, Rkey::from("ghost")),
            board_uri: board.board_uri(),
            delta: FieldDelta {
                title: Some("ignored".into()),
                ..Default::default()
            },
            created_at: "2024-01-02T00:00:00.000Z".parse().unwrap(),
        };
        let tasks = [task];
        let ops = [stray_op];
        let trusts = BTreeSet::new();
        let approved = BTreeSet::new();
        let input = MaterializeInput {
            board: &board,
            tasks: &tasks,
            ops: &ops,
            owner_trusts: &trusts,
            viewer: &did("alice"),
            approved_uris: &approved,
        };
        let out = materialize(&input, &crate::diagnostics::NullDiagnostics);
        let todo = out.columns.get(&ColumnId("todo".into())).unwrap();
        assert_eq!(todo[0].title, "Fix login bug");
        assert!(out.pending_proposals.is_empty());
    }
}
