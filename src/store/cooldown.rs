//! Per-user cooldown timestamps backed by a flat text file.
//!
//! The backing file is UTF-8 text, one record per line in the exact
//! shape `<userId> - <timestamp>`, no header. The file outlives the
//! process; giveaway admission reads it to decide whether a user's
//! cooldown has elapsed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;

use crate::domain::UserId;
use crate::error::StoreError;

/// Timestamp format used in cooldown records (local wall-clock).
const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Conventional backing file for the egg-roll cooldown.
pub const DEFAULT_COOLDOWN_FILE: &str = "EggRollCooldown.txt";

/// One line of the backing file.
enum Line {
    /// A well-formed `<userId> - <timestamp>` record.
    Record { user: u64, stamp: String },
    /// Anything else; never matches a user and survives rewrites
    /// verbatim.
    Raw(String),
}

impl Line {
    fn parse(text: &str) -> Self {
        if let Some((id, stamp)) = text.split_once(" - ") {
            if let Ok(user) = id.parse::<u64>() {
                return Self::Record {
                    user,
                    stamp: stamp.to_string(),
                };
            }
        }
        Self::Raw(text.to_string())
    }

    fn render(&self) -> String {
        match self {
            Self::Record { user, stamp } => format!("{user} - {stamp}"),
            Self::Raw(text) => text.clone(),
        }
    }

    fn is_for(&self, user: UserId) -> bool {
        matches!(self, Self::Record { user: u, .. } if *u == user.value())
    }
}

/// File-backed map from user id to last-use timestamp.
///
/// Each mutation loads the whole file, updates the in-memory lines, and
/// rewrites the file atomically (temp file + rename), so a crash leaves
/// either the old or the new contents. All access goes through a mutex;
/// use one store instance per backing file or concurrent writers will
/// race.
pub struct CooldownStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CooldownStore {
    /// Create a store over the given backing file.
    ///
    /// The file does not have to exist yet; it reads as empty and is
    /// created on the first recorded use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record that `user` used their cooldown-gated trade just now.
    pub fn record_use(&self, user: UserId) -> Result<(), StoreError> {
        self.record_use_at(user, Local::now().naive_local())
    }

    /// Record a use at an explicit time.
    ///
    /// Updates the user's existing line in place (position and total
    /// line count unchanged) or appends a new one.
    pub fn record_use_at(&self, user: UserId, when: NaiveDateTime) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut lines = self.load()?;
        let record = Line::Record {
            user: user.value(),
            stamp: when.format(STAMP_FORMAT).to_string(),
        };
        match lines.iter().position(|line| line.is_for(user)) {
            Some(i) => lines[i] = record,
            None => lines.push(record),
        }
        self.store(&lines)
    }

    /// Last recorded use for `user`, if any.
    ///
    /// A record whose timestamp does not parse reads as absent, same as
    /// a malformed line.
    pub fn last_use(&self, user: UserId) -> Result<Option<NaiveDateTime>, StoreError> {
        let _guard = self.lock.lock();
        let lines = self.load()?;
        for line in &lines {
            if let Line::Record { user: u, stamp } = line {
                if *u == user.value() {
                    return Ok(NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok());
                }
            }
        }
        Ok(None)
    }

    fn load(&self) -> Result<Vec<Line>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        Ok(text.lines().map(Line::parse).collect())
    }

    /// Rewrite the backing file with `lines`, one per line, trailing
    /// newline included. Uses write-to-temp-then-rename for atomicity.
    fn store(&self, lines: &[Line]) -> Result<(), StoreError> {
        let mut content = String::new();
        for line in lines {
            content.push_str(&line.render());
            content.push('\n');
        }

        let write_err = |e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        };

        if let Some(parent) = self.path.parent() {
            // A bare file name has an empty parent.
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).map_err(write_err)?;

        // Clean up the temp file on failure
        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Write {
                path: self.path.clone(),
                source: e,
            }
        };

        file.write_all(content.as_bytes())
            .map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }
}
