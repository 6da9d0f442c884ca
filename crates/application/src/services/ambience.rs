//! Ambient sound selection
//!
//! Keeps the looping ambient sound in line with the displayed weather:
//! the sound of the current condition while weather is shown, silence
//! otherwise. Loading keeps whatever is playing.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::QueryState;
use crate::ports::{AmbientSoundPort, ConditionAssetsPort};

/// Drives an [`AmbientSoundPort`] from [`QueryState`] transitions
pub struct AmbienceService {
    sink: Arc<dyn AmbientSoundPort>,
    assets: Arc<dyn ConditionAssetsPort>,
    current: Mutex<Option<String>>,
}

impl std::fmt::Debug for AmbienceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbienceService")
            .field("current", &*self.current.lock())
            .finish_non_exhaustive()
    }
}

impl AmbienceService {
    #[must_use]
    pub fn new(sink: Arc<dyn AmbientSoundPort>, assets: Arc<dyn ConditionAssetsPort>) -> Self {
        Self {
            sink,
            assets,
            current: Mutex::new(None),
        }
    }

    /// Sound currently playing, if any
    #[must_use]
    pub fn playing(&self) -> Option<String> {
        self.current.lock().clone()
    }

    /// React to a new state
    ///
    /// Replaying the same sound is a no-op so repeated `Ready` states for
    /// the same condition do not restart the loop.
    pub fn apply(&self, state: &QueryState) {
        match state {
            QueryState::Loading { .. } => {},
            QueryState::Ready { snapshot, .. } => {
                let sound = self.assets.assets_for(&snapshot.current.condition).sound;
                let mut current = self.current.lock();
                if current.as_deref() != Some(sound.as_str()) {
                    debug!(sound = %sound, "Switching ambient sound");
                    self.sink.play(&sound);
                    *current = Some(sound);
                }
            },
            QueryState::Idle | QueryState::Failed { .. } => {
                let mut current = self.current.lock();
                if current.take().is_some() {
                    debug!("Stopping ambient sound");
                    self.sink.stop();
                }
            },
        }
    }
}
