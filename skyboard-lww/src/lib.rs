mod resolve;

pub use resolve::{resolve, resolve_refs, EffectiveTask, MutableField};
