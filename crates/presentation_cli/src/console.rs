//! Shared line-oriented output

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Cloneable handle to one output stream
///
/// Every clone writes to the same stream, one whole line at a time, so
/// output from concurrent tasks never interleaves mid-line.
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<dyn Write + Send>>,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Console {
    pub fn stdout() -> Self {
        Self::new(Arc::new(Mutex::new(io::stdout())))
    }

    pub fn new(out: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self { out }
    }

    /// Write `text` followed by a newline and flush
    pub fn line(&self, text: &str) {
        let mut out = self.out.lock();
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.lock().flush()
    }
}

#[cfg(test)]
pub(crate) fn capture() -> (Console, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    (Console::new(buffer.clone()), buffer)
}
