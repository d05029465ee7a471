use skyboard_base::{Did, Rkey, Timestamp};
use skyboard_model::{ColumnId, LabelId, Op, RecordUri, Task};
use skyboard_position::Position;

/// Identifies one of the five task fields an [`Op`] can rewrite. Each
/// resolves independently of the others (P4): a write to one field never
/// shadows a concurrent write to a different field, even from the same
/// op.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MutableField {
    Title,
    Description,
    ColumnId,
    Position,
    LabelIds,
}

impl MutableField {
    pub const ALL: [MutableField; 5] = [
        MutableField::Title,
        MutableField::Description,
        MutableField::ColumnId,
        MutableField::Position,
        MutableField::LabelIds,
    ];
}

/// A task with its applied ops folded in. Every field here is the
/// current LWW winner; `last_modified_at`/`last_modified_by` name the
/// most recent op to touch *any* field, falling back to the task's own
/// authorship if no op ever applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EffectiveTask {
    pub owner: Did,
    pub rkey: Rkey,
    pub board_uri: RecordUri,
    pub title: String,
    pub description: Option<String>,
    pub column_id: ColumnId,
    pub position: Position,
    pub label_ids: Vec<LabelId>,
    pub last_modified_at: Timestamp,
    pub last_modified_by: Did,
}

/// Folds `applied` onto `base`, one field at a time, under strict
/// last-writer-wins (§4.4 step 3): a field is overwritten only when the
/// incoming op's timestamp is *strictly greater* than the timestamp
/// currently held for that field, otherwise it is ignored. `applied`
/// need not arrive pre-sorted: this re-sorts by `(created_at, author,
/// rkey)` first so that, on a timestamp tie, the first-sorted op (by
/// author, then rkey) is the one that gets to stake that strictly-greater
/// claim and every later op at the same timestamp is ignored — the same
/// result regardless of arrival order (P1, P2).
pub fn resolve(base: &Task, applied: &[Op]) -> EffectiveTask {
    let refs: Vec<&Op> = applied.iter().collect();
    resolve_refs(base, &refs)
}

/// Same fold as [`resolve`], for callers (the materializer) that already
/// hold borrowed ops rather than an owned slice.
pub fn resolve_refs(base: &Task, applied: &[&Op]) -> EffectiveTask {
    let mut ordered: Vec<&Op> = applied.to_vec();
    ordered.sort_by(|a, b| {
        (&a.created_at, &a.owner, &a.rkey).cmp(&(&b.created_at, &b.owner, &b.rkey))
    });

    let mut title: Option<(Timestamp, String)> = None;
    let mut description: Option<(Timestamp, Option<String>)> = None;
    let mut column_id: Option<(Timestamp, ColumnId)> = None;
    let mut position: Option<(Timestamp, Position)> = None;
    let mut label_ids: Option<(Timestamp, Vec<LabelId>)> = None;
    let mut last_touch: Option<&Op> = None;

    fn wins<T>(slot: &Option<(Timestamp, T)>, at: &Timestamp) -> bool {
        match slot {
            Some((stored, _)) => at > stored,
            None => true,
        }
    }

    for op in &ordered {
        if let Some(v) = &op.delta.title {
            if wins(&title, &op.created_at) {
                title = Some((op.created_at.clone(), v.clone()));
            }
        }
        if let Some(v) = &op.delta.description {
            if wins(&description, &op.created_at) {
                description = Some((op.created_at.clone(), Some(v.clone())));
            }
        }
        if let Some(v) = &op.delta.column_id {
            if wins(&column_id, &op.created_at) {
                column_id = Some((op.created_at.clone(), v.clone()));
            }
        }
        if let Some(v) = &op.delta.position {
            if wins(&position, &op.created_at) {
                position = Some((op.created_at.clone(), v.clone()));
            }
        }
        if let Some(v) = &op.delta.label_ids {
            if wins(&label_ids, &op.created_at) {
                label_ids = Some((op.created_at.clone(), v.clone()));
            }
        }
        let touches = !op.delta.is_empty();
        if touches {
            let beats_last_touch = match last_touch {
                Some(prev) => op.created_at > prev.created_at,
                None => true,
            };
            if beats_last_touch {
                last_touch = Some(*op);
            }
        }
    }

    let (last_modified_at, last_modified_by) = match last_touch {
        Some(op) => (op.created_at.clone(), op.owner.clone()),
        None => (base.created_at.clone(), base.owner.clone()),
    };

    EffectiveTask {
        owner: base.owner.clone(),
        rkey: base.rkey.clone(),
        board_uri: base.board_uri.clone(),
        title: title.map(|(_, v)| v).unwrap_or_else(|| base.title.clone()),
        description: description
            .map(|(_, v)| v)
            .unwrap_or_else(|| base.description.clone()),
        column_id: column_id
            .map(|(_, v)| v)
            .unwrap_or_else(|| base.column_id.clone()),
        position: position.map(|(_, v)| v).unwrap_or_else(|| base.base_position()),
        label_ids: label_ids
            .map(|(_, v)| v)
            .unwrap_or_else(|| base.label_ids.clone().unwrap_or_default()),
        last_modified_at,
        last_modified_by,
    }
}
