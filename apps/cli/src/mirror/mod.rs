//! Two-way mirroring of question files between the app and home folders.
//!
//! Each folder gets its own watcher, event loop thread and [`SyncHandler`].
//! Handlers share nothing; a handler only suppresses its own re-entry.

use anyhow::Context;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant, SystemTime};
use thiserror::Error;

use crate::output::staging_path;

/// Marker in temporary files some editors write before renaming.
const TEMP_FILE_MARKER: &str = ".goutputstream-";

/// A single file copy that failed. Logged, never fatal.
#[derive(Debug, Error)]
#[error("Error syncing {filename}: {source}")]
pub struct SyncError {
    pub filename: String,
    #[source]
    pub source: io::Error,
}

/// What a handler did with one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Not a mirrored file (directory, temp file, dotfile, non-Markdown, gone).
    Ignored,
    /// A copy of this file is still settling; it is re-checked once it settles.
    Busy,
    /// Source modification time matches the last copy or the target.
    Unchanged,
    /// The target was modified more recently than the source.
    TargetNewer,
    Copied(String),
}

/// Copies changed `.md` files from one folder into the other.
#[derive(Debug)]
pub struct SyncHandler {
    source_dir: PathBuf,
    target_dir: PathBuf,
    settle_delay: Duration,
    /// Files copied recently, guarded until the settle deadline.
    settling: HashMap<String, Instant>,
    /// Settling files that saw another event while guarded.
    pending: HashSet<String>,
    last_synced: HashMap<String, SystemTime>,
}

impl SyncHandler {
    pub fn new(source_dir: PathBuf, target_dir: PathBuf, settle_delay: Duration) -> Self {
        Self {
            source_dir,
            target_dir,
            settle_delay,
            settling: HashMap::new(),
            pending: HashSet::new(),
            last_synced: HashMap::new(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Whether any copy made by this handler is still inside its settle window.
    pub fn is_syncing(&self) -> bool {
        let now = Instant::now();
        self.settling.values().any(|until| now < *until)
    }

    /// File name of `path` if it is a candidate for mirroring.
    pub fn mirrored_name(path: &Path) -> Option<String> {
        let full = path.to_string_lossy();
        if full.ends_with(".tmp") || full.contains(TEMP_FILE_MARKER) {
            return None;
        }

        let name = path.file_name()?.to_string_lossy();
        if name.starts_with('.') || !name.ends_with(".md") {
            return None;
        }
        Some(name.into_owned())
    }

    /// Handle a create or modify notification for `path`.
    pub fn handle_path(&mut self, path: &Path) -> Result<SyncOutcome, SyncError> {
        if path.is_dir() {
            return Ok(SyncOutcome::Ignored);
        }
        let Some(filename) = Self::mirrored_name(path) else {
            return Ok(SyncOutcome::Ignored);
        };

        if let Some(until) = self.settling.get(&filename) {
            if Instant::now() < *until {
                self.pending.insert(filename);
                return Ok(SyncOutcome::Busy);
            }
            self.settling.remove(&filename);
            self.pending.remove(&filename);
        }

        let source_meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SyncOutcome::Ignored),
            Err(source) => return Err(SyncError { filename, source }),
        };
        let modified = match source_meta.modified() {
            Ok(modified) => modified,
            Err(source) => return Err(SyncError { filename, source }),
        };
        if self.last_synced.get(&filename) == Some(&modified) {
            return Ok(SyncOutcome::Unchanged);
        }

        let target = self.target_dir.join(&filename);
        if let Ok(target_meta) = fs::metadata(&target) {
            if let Ok(target_modified) = target_meta.modified() {
                if target_modified > modified {
                    return Ok(SyncOutcome::TargetNewer);
                }
                if target_modified == modified && target_meta.len() == source_meta.len() {
                    self.last_synced.insert(filename, modified);
                    return Ok(SyncOutcome::Unchanged);
                }
            }
        }

        if let Err(source) = copy_preserving_mtime(path, &target) {
            return Err(SyncError { filename, source });
        }
        self.last_synced.insert(filename.clone(), modified);
        self.settling.insert(filename.clone(), Instant::now() + self.settle_delay);
        Ok(SyncOutcome::Copied(filename))
    }

    /// Release files whose settle window has passed, re-checking any that
    /// changed while guarded.
    pub fn release_settled(&mut self) -> Vec<(PathBuf, Result<SyncOutcome, SyncError>)> {
        let now = Instant::now();
        let settled: Vec<String> = self
            .settling
            .iter()
            .filter(|(_, until)| **until <= now)
            .map(|(name, _)| name.clone())
            .collect();

        let mut outcomes = Vec::new();
        for name in settled {
            self.settling.remove(&name);
            if self.pending.remove(&name) {
                let path = self.source_dir.join(&name);
                let outcome = self.handle_path(&path);
                outcomes.push((path, outcome));
            }
        }
        outcomes
    }

    /// Handle a raw watcher event. Only creations and modifications count.
    pub fn handle_event(&mut self, event: &Event) {
        if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            return;
        }

        for path in &event.paths {
            let outcome = self.handle_path(path);
            self.log_outcome(path, outcome);
        }
    }

    /// Re-check files that settled since the last call.
    pub fn flush_settled(&mut self) {
        for (path, outcome) in self.release_settled() {
            self.log_outcome(&path, outcome);
        }
    }

    fn log_outcome(&self, path: &Path, outcome: Result<SyncOutcome, SyncError>) {
        match outcome {
            Ok(SyncOutcome::Copied(filename)) => {
                println!("Synced: {filename}");
                tracing::info!(
                    filename = %filename,
                    from = %self.source_dir.display(),
                    to = %self.target_dir.display(),
                    "file mirrored"
                );
            }
            Ok(outcome) => tracing::trace!(path = %path.display(), ?outcome, "event skipped"),
            Err(e) => tracing::error!(filename = %e.filename, error = %e.source, "{e}"),
        }
    }
}

/// Copy `from` to `to` and give the copy the source's modification time.
///
/// The data is staged under a hidden `.tmp` name next to `to` and renamed
/// into place, so `to` is never seen half-written.
pub fn copy_preserving_mtime(from: &Path, to: &Path) -> io::Result<()> {
    let modified = fs::metadata(from)?.modified()?;
    let staging = staging_path(to)?;

    let result = fs::copy(from, &staging)
        .and_then(|_| File::options().write(true).open(&staging)?.set_modified(modified))
        .and_then(|()| fs::rename(&staging, to));
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

/// Copy every `.md` file in `from` into `to`. Returns the number copied.
pub fn initial_sync(from: &Path, to: &Path) -> anyhow::Result<usize> {
    let mut copied = 0;
    let entries =
        fs::read_dir(from).with_context(|| format!("failed to read {}", from.display()))?;

    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = SyncHandler::mirrored_name(&path) else {
            continue;
        };
        copy_preserving_mtime(&path, &to.join(name))
            .with_context(|| format!("failed to copy {}", path.display()))?;
        copied += 1;
    }

    Ok(copied)
}

/// One watched folder: its notify watcher plus the thread running its handler.
struct WatchLoop {
    dir: PathBuf,
    watcher: Option<RecommendedWatcher>,
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl WatchLoop {
    fn spawn(handler: SyncHandler) -> anyhow::Result<Self> {
        let dir = handler.source_dir().to_path_buf();
        let (tx, rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    let _ = tx.send(event);
                }
                Err(e) => tracing::warn!(error = %e, "watch error"),
            },
            Config::default(),
        )
        .context("failed to create watcher")?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", dir.display()))?;

        let handle = thread::spawn(move || event_loop(rx, stop_rx, handler));

        Ok(Self {
            dir,
            watcher: Some(watcher),
            stop_tx,
            handle: Some(handle),
        })
    }

    fn stop(&mut self) {
        let _ = self.stop_tx.send(());
        self.watcher = None;
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!(dir = %self.dir.display(), "watch loop panicked");
            }
        }
    }
}

fn event_loop(rx: Receiver<Event>, stop_rx: Receiver<()>, mut handler: SyncHandler) {
    loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }

        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => handler.handle_event(&event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        handler.flush_settled();
    }
}

/// Running mirror between two folders. Stops on [`Mirror::stop`] or drop.
pub struct Mirror {
    loops: Vec<WatchLoop>,
}

impl Mirror {
    /// Seed `home_dir` from `app_dir`, then watch both folders.
    pub fn start(app_dir: &Path, home_dir: &Path, settle_delay: Duration) -> anyhow::Result<Self> {
        fs::create_dir_all(app_dir)
            .with_context(|| format!("failed to create {}", app_dir.display()))?;
        fs::create_dir_all(home_dir)
            .with_context(|| format!("failed to create {}", home_dir.display()))?;

        let seeded = initial_sync(app_dir, home_dir)?;
        tracing::debug!(seeded, "initial sync finished");

        let app_loop = WatchLoop::spawn(SyncHandler::new(
            app_dir.to_path_buf(),
            home_dir.to_path_buf(),
            settle_delay,
        ))?;
        let home_loop = WatchLoop::spawn(SyncHandler::new(
            home_dir.to_path_buf(),
            app_dir.to_path_buf(),
            settle_delay,
        ))?;

        Ok(Self {
            loops: vec![app_loop, home_loop],
        })
    }

    /// Folders being watched.
    pub fn watched_dirs(&self) -> Vec<&Path> {
        self.loops.iter().map(|l| l.dir.as_path()).collect()
    }

    /// Stop both watchers and join their threads.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        for watch_loop in &mut self.loops {
            watch_loop.stop();
        }
        self.loops.clear();
    }
}

impl Drop for Mirror {
    fn drop(&mut self) {
        self.shutdown();
    }
}
