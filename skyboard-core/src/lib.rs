mod diagnostics;
mod materialize;
mod op_builder;
mod sync;

pub use diagnostics::{Diagnostics, NullDiagnostics};
pub use materialize::{materialize, MaterializeInput, MaterializeOutput};
pub use op_builder::{Clock, OpBuilder, OpBuilderError};
pub use sync::{RecordSink, SnapshotSource};
