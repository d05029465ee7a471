mod config;
mod diagnostics;
mod tracing_init;

pub use config::Config;
pub use diagnostics::TracingDiagnostics;
pub use tracing_init::init_tracing;
