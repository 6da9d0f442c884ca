//! Ambient sound output port

#[cfg(test)]
use mockall::automock;

/// Sink for the looping ambient sound of the displayed condition
#[cfg_attr(test, automock)]
pub trait AmbientSoundPort: Send + Sync {
    /// Start looping `sound`, replacing whatever is playing
    fn play(&self, sound: &str);

    /// Silence the ambient sound
    fn stop(&self);
}
