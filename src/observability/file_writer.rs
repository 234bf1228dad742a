//! Size-rotated line writer for trace output.
//!
//! When appending a line would push the file past `max_bytes`, the current
//! file is renamed to `<name>.<UTC timestamp>` and a fresh one is started.
//! Only the newest `max_backups` rotated files are kept.

use chrono::{NaiveDateTime, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Stamp format for rotated files. Fixed width, so names sort by age.
const BACKUP_STAMP: &str = "%Y%m%dT%H%M%S%.6fZ";

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe appender with size-based rotation.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors while rotating, opening, or writing, and when the
    /// internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.file_path).map(|m| m.len()).unwrap_or(0);
        if current > 0 && current.saturating_add(incoming) > self.policy.max_bytes {
            *file = None;
            self.rotate()?;
        }

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
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file unavailable"))?;

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }
        let stamp = Utc::now().format(BACKUP_STAMP).to_string();
        let mut backup = self.backup_path(&stamp);
        let mut attempt = 1;
        while backup.exists() {
            backup = self.backup_path(&format!("{stamp}-{attempt}"));
            attempt += 1;
        }
        fs::rename(&self.file_path, &backup)?;
        self.prune_backups()
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Rotated files, newest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let prefix = match self.file_path.file_name().and_then(|n| n.to_str()) {
            Some(name) => format!("{name}."),
            None => return Ok(Vec::new()),
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|n| n.strip_prefix(&prefix))
                    .is_some_and(is_backup_suffix)
            })
            .collect();
        backups.sort_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        for stale in self.backups()?.iter().skip(self.policy.max_backups) {
            // A backup that cannot be removed now is retried on the next rotation.
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

/// Matches `<stamp>` or `<stamp>-<n>` as written by rotation.
fn is_backup_suffix(suffix: &str) -> bool {
    let stamp = match suffix.rsplit_once('-') {
        Some((stamp, n)) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => stamp,
        _ => suffix,
    };
    NaiveDateTime::parse_from_str(stamp, BACKUP_STAMP).is_ok()
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn writer_in(dir: &TempDir, max_bytes: u64, max_backups: usize) -> FileWriter {
        FileWriter::new(
            dir.path().join("trace.json"),
            RotationPolicy {
                max_bytes,
                max_backups,
            },
        )
    }

    #[test]
    fn test_appends_lines() {
        let dir = TempDir::new().unwrap();
        let writer = writer_in(&dir, 1024, 3);

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        assert!(writer.backups().unwrap().is_empty());
    }

    #[test]
    fn test_rotates_when_line_would_exceed_limit() {
        let dir = TempDir::new().unwrap();
        let writer = writer_in(&dir, 16, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("abcdefghij").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "abcdefghij\n");

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789\n");
    }

    #[test]
    fn test_oversized_line_goes_to_empty_file() {
        let dir = TempDir::new().unwrap();
        let writer = writer_in(&dir, 4, 3);

        writer.write_line("longer than four bytes").unwrap();

        assert!(writer.backups().unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(writer.path()).unwrap(),
            "longer than four bytes\n"
        );
    }

    #[test]
    fn test_keeps_only_newest_backups() {
        let dir = TempDir::new().unwrap();
        let writer = writer_in(&dir, 8, 2);

        for i in 0..6 {
            writer.write_line(&format!("line-{i}")).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "line-4\n");
        assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "line-3\n");
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "line-5\n");
    }

    #[test]
    fn test_backup_suffix_must_be_a_rotation_stamp() {
        let stamp = Utc::now().format(BACKUP_STAMP).to_string();
        assert!(is_backup_suffix(&stamp));
        assert!(is_backup_suffix(&format!("{stamp}-2")));
        assert!(!is_backup_suffix("bak"));
        assert!(!is_backup_suffix("20240101"));
        assert!(!is_backup_suffix(&format!("{stamp}-x")));
    }

    #[test]
    fn test_pruning_leaves_unrelated_files_alone() {
        let dir = TempDir::new().unwrap();
        let unrelated = dir.path().join("trace.json.bak");
        fs::write(&unrelated, "keep me\n").unwrap();
        let writer = writer_in(&dir, 8, 0);

        writer.write_line("line-0").unwrap();
        writer.write_line("line-1").unwrap();

        assert!(writer.backups().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&unrelated).unwrap(), "keep me\n");
    }

    #[test]
    fn test_default_policy() {
        let policy = RotationPolicy::default();
        assert_eq!(policy.max_bytes, 10 * 1024 * 1024);
        assert_eq!(policy.max_backups, 3);
    }

    #[test]
    fn test_zero_backups_discards_rotated_file() {
        let dir = TempDir::new().unwrap();
        let writer = writer_in(&dir, 8, 0);

        writer.write_line("line-0").unwrap();
        writer.write_line("line-1").unwrap();

        assert!(writer.backups().unwrap().is_empty());
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "line-1\n");
    }
}
