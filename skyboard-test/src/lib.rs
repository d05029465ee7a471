mod fixtures;
mod scenario;

pub use fixtures::{collection_uri, t, t0, BoardFixture, TaskFixture};
pub use scenario::ScenarioBuilder;
