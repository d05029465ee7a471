//! Public API surface for the Skyboard materialization engine.
//!
//! This crate re-exports the pieces a host application wires together:
//! the record model, the position allocator, the trust/visibility and
//! op-filter predicates, the per-field LWW resolver, and the
//! materializer/op builder that sit on top of them. It hosts no wire
//! client, no UI, and no CLI — those remain external collaborators.

pub use skyboard_admin::{init_tracing, Config, TracingDiagnostics};
pub use skyboard_core::{
    materialize, Clock, Diagnostics, MaterializeInput, MaterializeOutput, NullDiagnostics,
    OpBuilder, OpBuilderError, RecordSink, SnapshotSource,
};
pub use skyboard_lww::{resolve, EffectiveTask, MutableField};
pub use skyboard_model::{
    Approval, Board, BoardError, Collection, Column, ColumnId, Comment, FieldDelta, Label,
    LabelId, Op, Reaction, RecordUri, RecordUriError, Task, Trust,
};
pub use skyboard_position::{between, order_to_position, Position, PositionError};
pub use skyboard_trust::{
    classify_op, derive_owner_trusts, is_eligible_for_merge, OpClass, TrustContext,
};

pub use skyboard_base::{err, Did, Error, Result, Rkey, Timestamp, TimestampParseError};
