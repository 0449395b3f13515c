//! Host-side plumbing shared by the terminal and web front-ends: TOML
//! configuration and the SQLite best-score store.

pub mod config;
pub mod store;

use twenty48_core::best_score::BestScoreStore;
use twenty48_core::engine::GridEngine;
use twenty48_core::session::Session;

pub use config::Config;
pub use store::SqliteStore;

/// Session type used by the binaries.
pub type HostSession = Session<Box<dyn BestScoreStore + Send>>;

/// Build a fresh session from configuration. `seed` overrides `config.seed`.
pub fn build_session(config: &Config, seed: Option<u64>) -> HostSession {
    let engine = match seed.or(config.seed) {
        Some(seed) => GridEngine::with_seed(seed),
        None => GridEngine::new(),
    };
    Session::new(engine, config.open_store())
}
