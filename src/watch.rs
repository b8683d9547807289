//! Debounced change notification.
//!
//! Bursts of change events collapse into one re-render: every event that
//! arrives within the quiet period cancels the pending render and
//! reschedules it.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use log::{debug, trace};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{PixseqError, Result};

/// Quiet period before a re-render fires.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

/// Coalesces events from a channel into debounced batches.
pub struct Debouncer<T> {
    rx: Receiver<T>,
    delay: Duration,
}

impl<T> Debouncer<T> {
    pub fn new(rx: Receiver<T>, delay: Duration) -> Self {
        Self { rx, delay }
    }

    /// Block until an event arrives and `delay` then passes without another.
    ///
    /// Returns how many events were coalesced, or `None` once the sender is
    /// gone and no event is pending.
    pub fn wait(&self) -> Option<usize> {
        self.rx.recv().ok()?;
        let mut count = 1;

        loop {
            match self.rx.recv_timeout(self.delay) {
                Ok(_) => {
                    count += 1;
                    trace!("debounce reset after {} events", count);
                }
                Err(RecvTimeoutError::Timeout) => return Some(count),
                Err(RecvTimeoutError::Disconnected) => return Some(count),
            }
        }
    }
}

/// Watches one file and forwards its change events to a debouncer.
pub struct FileWatcher {
    // Dropping the watcher stops event delivery.
    _watcher: RecommendedWatcher,
    debouncer: Debouncer<()>,
}

impl FileWatcher {
    /// Watch `path` for modifications, debounced by `delay`.
    ///
    /// The parent directory is watched so editors that replace the file on
    /// save are still seen.
    pub fn new(path: &Path, delay: Duration) -> Result<Self> {
        let target = path.canonicalize().map_err(|e| PixseqError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to resolve watched file: {}", e),
        })?;
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let (tx, rx) = mpsc::channel();
        let watched = target.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) if is_relevant(&event, &watched) => {
                    let _ = tx.send(());
                }
                Ok(_) => {}
                Err(e) => debug!("watch error: {}", e),
            }
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!("watching {}", target.display());

        Ok(Self {
            _watcher: watcher,
            debouncer: Debouncer::new(rx, delay),
        })
    }

    /// Block until the file has changed and settled.
    pub fn wait(&self) -> Option<usize> {
        self.debouncer.wait()
    }
}

fn is_relevant(event: &Event, target: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event.paths.iter().any(|p| p == target)
}
