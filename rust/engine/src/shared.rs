use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::Engine;
use crate::errors::GameError;
use crate::game::RoundState;
use crate::player::PlayerAction;

/// Cloneable handle to one session, for callers that answer on another thread
/// (advisory lookups, rendering loops). All access is serialized through the
/// lock, so transitions stay atomic.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Engine>, GameError> {
        self.inner.lock().map_err(|_| {
            tracing::error!("engine lock poisoned");
            GameError::SessionPoisoned
        })
    }

    pub fn apply(&self, action: PlayerAction) -> Result<RoundState, GameError> {
        self.lock()?.apply(action)
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Result<R, GameError> {
        let mut engine = self.lock()?;
        Ok(f(&mut engine))
    }

    pub fn state(&self) -> Result<RoundState, GameError> {
        Ok(self.lock()?.state())
    }

    pub fn balance(&self) -> Result<u32, GameError> {
        Ok(self.lock()?.balance())
    }

    pub fn awaits_decision_for(&self, round_id: u64) -> Result<bool, GameError> {
        Ok(self.lock()?.awaits_decision_for(round_id))
    }
}
