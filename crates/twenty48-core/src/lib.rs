//! twenty48-core: the 2048 grid engine and the thin pieces every front-end shares.
//!
//! This crate provides:
//! - `engine`: `Grid`, `Direction`, the slide/merge ops and `GridEngine`
//! - `best_score`: a `BestScoreStore` seam and the `BestScore` tracker
//! - `session`: engine + best score, the unit a front-end holds
//! - `input`: key and swipe translation into `Direction`
//! - `palette`: tile colors
//!
//! Quick start:
//! ```
//! use twenty48_core::best_score::MemoryStore;
//! use twenty48_core::engine::{Direction, GridEngine};
//! use twenty48_core::session::Session;
//!
//! let mut session = Session::new(GridEngine::with_seed(42), MemoryStore::new());
//! let _ = session.apply(Direction::Left);
//! let snap = session.snapshot();
//! assert!(snap.best_score >= snap.score);
//! ```

pub mod best_score;
pub mod engine;
pub mod input;
pub mod palette;
pub mod session;
