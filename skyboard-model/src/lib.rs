mod board;
mod op;
mod peripheral;
mod task;
mod trust;
mod uri;

pub use board::{Board, BoardError, Column, ColumnId, Label, LabelId};
pub use op::{FieldDelta, Op};
pub use peripheral::{Approval, Comment, Reaction};
pub use task::Task;
pub use trust::Trust;
pub use uri::{Collection, RecordUri, RecordUriError};
