//! Ambient sound reporting for the terminal
//!
//! A terminal cannot loop audio, so the sink announces what would be
//! playing.

use std::io::Write;

use application::AmbientSoundPort;
use parking_lot::Mutex;
use tracing::debug;

/// [`AmbientSoundPort`] that writes a status line per change
#[derive(Debug)]
pub struct TerminalSound<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalSound<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> AmbientSoundPort for TerminalSound<W> {
    fn play(&self, sound: &str) {
        debug!(sound, "Ambient sound started");
        let _ = writeln!(self.out.lock(), "♪ {sound}");
    }

    fn stop(&self) {
        debug!("Ambient sound stopped");
        let _ = writeln!(self.out.lock(), "♪ (silence)");
    }
}
