//! Rotating log file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe writer that rotates the log file when it
//! exceeds a size threshold, keeping a fixed number of timestamped backups.
//! This bounds disk usage for a plugin that may stay loaded for weeks.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Before each write the current file size is checked; past the threshold the
/// file is renamed with a Unix-timestamp suffix and a fresh file is started.
/// Backups beyond [`MAX_BACKUP_FILES`] are removed, oldest first.
///
/// Both the main plugin thread and the worker thread write through the same
/// kind of handle, so all access goes through an internal mutex.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for the given path.
    ///
    /// The file is not opened until the first write, so construction succeeds
    /// even when the path is not writable yet.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            file: Mutex::new(None),
        }
    }

    /// Appends raw bytes to the file, rotating first if it grew too large.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk full) or a poisoned
    /// internal lock.
    pub fn write_bytes(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| std::io::Error::other(format!("log writer lock poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| std::io::Error::other("log file unavailable"))?;
        handle.write_all(bytes)?;
        handle.flush()
    }

    /// Rotates the current file out of the way when it exceeds the size cap.
    fn check_and_rotate(&self, file: &mut Option<File>) -> std::io::Result<()> {
        let size = match fs::metadata(&self.file_path) {
            Ok(metadata) => metadata.len(),
            Err(_) => return Ok(()),
        };

        if size <= MAX_FILE_SIZE_BYTES {
            return Ok(());
        }

        *file = None;

        let backup_path = self
            .file_path
            .with_file_name(format!(
                "{}.{}",
                self.file_name(),
                chrono::Utc::now().timestamp()
            ));
        fs::rename(&self.file_path, backup_path)?;

        self.cleanup_old_backups();
        Ok(())
    }

    /// Removes the oldest backups beyond the retention count.
    ///
    /// Backup names sort chronologically because the suffix is a Unix
    /// timestamp, so a lexicographic sort suffices.
    fn cleanup_old_backups(&self) {
        let Some(dir) = self.file_path.parent() else {
            return;
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        let prefix = format!("{}.", self.file_name());
        let mut backups: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort();

        while backups.len() > MAX_BACKUP_FILES {
            let oldest = backups.remove(0);
            let _ = fs::remove_file(oldest);
        }
    }

    fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Cloneable handle handing the rotating writer to `tracing-subscriber`.
///
/// Implements both `std::io::Write` and `MakeWriter`, so one instance serves
/// as the fmt layer's writer factory while all clones share the underlying
/// file and its rotation state.
#[derive(Clone)]
pub struct LogWriter {
    inner: Arc<FileWriter>,
}

impl LogWriter {
    /// Creates a handle writing to `file_path`.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            inner: Arc::new(FileWriter::new(file_path)),
        }
    }
}

impl std::io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reelfinder.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"first line\n").unwrap();
        writer.write_bytes(b"second line\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }
}
