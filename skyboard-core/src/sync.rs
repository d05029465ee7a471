use skyboard_model::{Approval, Board, Op, RecordUri, Task, Trust};

/// What the core consumes from the sync layer for one materialization
/// (§6). The firehose client, repository fetcher, and local record
/// cache that implement this are external collaborators (§1) — no
/// implementation ships in this crate.
pub trait SnapshotSource {
    fn board(&self, board_uri: &RecordUri) -> Option<Board>;
    fn tasks(&self, board_uri: &RecordUri) -> Vec<Task>;
    fn ops(&self, board_uri: &RecordUri) -> Vec<Op>;
    fn trusts(&self, board_uri: &RecordUri) -> Vec<Trust>;
    fn approvals(&self, board_uri: &RecordUri) -> Vec<Approval>;
}

/// What the core produces for the sync layer to persist (§6's write
/// interface). The core never writes directly; the Op Builder only
/// ever returns records for a `RecordSink` to hand off.
pub trait RecordSink {
    fn put_task(&mut self, task: Task) -> Result<(), skyboard_base::Error>;
    fn put_op(&mut self, op: Op) -> Result<(), skyboard_base::Error>;
}
