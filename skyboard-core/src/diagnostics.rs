use skyboard_model::{ColumnId, RecordUri};

/// Sink for the non-fatal conditions in the error taxonomy (§7):
/// dangling op targets and orphaned column references. The
/// materializer never fails on these; it reports them here and keeps
/// going. `skyboard-admin` provides the `tracing`-backed implementation
/// used outside tests.
pub trait Diagnostics {
    fn dangling_op_target(&self, op_uri: &RecordUri, target_task_uri: &RecordUri);
    fn orphaned_task(&self, task_uri: &RecordUri, column_id: &ColumnId);
}

/// Discards every diagnostic. Useful where a scenario is already known
/// not to trigger any and the caller doesn't want to wire up tracing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn dangling_op_target(&self, _op_uri: &RecordUri, _target_task_uri: &RecordUri) {}
    fn orphaned_task(&self, _task_uri: &RecordUri, _column_id: &ColumnId) {}
}
