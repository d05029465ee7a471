use tracing_subscriber::EnvFilter;

/// Installs a `tracing` fmt subscriber reading `RUST_LOG` (default
/// `info`). Library crates (`skyboard-base`, `skyboard-core`, ...) only
/// ever call `tracing::{debug,warn,error}` — nothing below this binary
/// boundary configures a subscriber itself, so calling this twice in
/// one process would double-install and panic; callers should call it
/// once, from `main`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
