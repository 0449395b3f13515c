//! Best-score tracking on top of a pluggable persistence backend.

use anyhow::Result;
use log::warn;

use crate::engine::Score;

/// Somewhere to keep the best score between sessions.
pub trait BestScoreStore {
    /// Previously saved best score, `None` if nothing was ever saved.
    fn load(&mut self) -> Result<Option<Score>>;
    fn save(&mut self, best: Score) -> Result<()>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load(&mut self) -> Result<Option<Score>> {
        (**self).load()
    }

    fn save(&mut self, best: Score) -> Result<()> {
        (**self).save(best)
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    best: Option<Score>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: Score) -> Self {
        Self { best: Some(best) }
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&mut self) -> Result<Option<Score>> {
        Ok(self.best)
    }

    fn save(&mut self, best: Score) -> Result<()> {
        self.best = Some(best);
        Ok(())
    }
}

/// Known best score plus the store it is written back to.
///
/// Storage failures never surface: a failed load counts as "no best score
/// yet", a failed save is logged and the in-memory value still advances.
#[derive(Debug)]
pub struct BestScore<S> {
    best: Score,
    store: S,
}

impl<S: BestScoreStore> BestScore<S> {
    pub fn open(mut store: S) -> Self {
        let best = match store.load() {
            Ok(best) => best.unwrap_or(0),
            Err(err) => {
                warn!("failed to load best score, starting from 0: {err:#}");
                0
            }
        };
        Self { best, store }
    }

    /// Record `score`; persists only when it beats the known best.
    /// Returns true if the best score advanced.
    pub fn observe(&mut self, score: Score) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = self.store.save(score) {
            warn!("failed to save best score {score}: {err:#}");
        }
        true
    }

    #[inline]
    pub fn get(&self) -> Score {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    /// Store that fails every call, counting attempts.
    #[derive(Default)]
    struct BrokenStore {
        saves: usize,
    }

    impl BestScoreStore for BrokenStore {
        fn load(&mut self) -> Result<Option<Score>> {
            bail!("storage unavailable")
        }

        fn save(&mut self, _best: Score) -> Result<()> {
            self.saves += 1;
            bail!("storage unavailable")
        }
    }

    #[test]
    fn it_defaults_to_zero() {
        let best = BestScore::open(MemoryStore::new());
        assert_eq!(best.get(), 0);
    }

    #[test]
    fn it_saves_only_improvements() {
        let mut best = BestScore::open(MemoryStore::with_best(100));
        assert_eq!(best.get(), 100);
        assert!(!best.observe(40));
        assert!(!best.observe(100));
        assert_eq!(best.store().best, Some(100));
        assert!(best.observe(120));
        assert_eq!(best.get(), 120);
        assert_eq!(best.store().best, Some(120));
    }

    #[test]
    fn it_survives_broken_storage() {
        let mut best = BestScore::open(BrokenStore::default());
        assert_eq!(best.get(), 0);
        assert!(best.observe(8));
        assert_eq!(best.get(), 8);
        assert_eq!(best.store().saves, 1);
    }

    #[test]
    fn it_works_through_a_box() {
        let store: Box<dyn BestScoreStore> = Box::new(MemoryStore::with_best(16));
        let mut best = BestScore::open(store);
        assert_eq!(best.get(), 16);
        assert!(best.observe(32));
    }
}
