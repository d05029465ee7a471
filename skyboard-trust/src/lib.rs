mod derive;
mod op_filter;
mod visibility;

pub use derive::derive_owner_trusts;
pub use op_filter::{classify_op, is_eligible_for_merge, split_applied_and_pending, OpClass};
pub use visibility::TrustContext;
