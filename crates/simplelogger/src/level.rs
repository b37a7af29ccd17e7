//! Live, shared severity threshold

use simplelogger_types::Level;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// A severity threshold that can be changed while loggers are running
///
/// Clones share the same cell. The facade keeps one and hands clones to every
/// backend filter it builds, so a level change reaches the live logger without
/// a rebuild.
#[derive(Debug, Clone)]
pub struct AtomicLevel {
    inner: Arc<AtomicU8>,
}

impl AtomicLevel {
    pub fn new(level: Level) -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(level.as_u8())),
        }
    }

    /// Current threshold
    pub fn get(&self) -> Level {
        Level::from_u8(self.inner.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set(&self, level: Level) {
        self.inner.store(level.as_u8(), Ordering::SeqCst);
    }

    /// Whether a message at `level` passes the threshold
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.get()
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(Level::default())
    }
}
