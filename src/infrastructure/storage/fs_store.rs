use crate::domain::storage::MatchSink;
use crate::domain::MatchRecord;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes one JSON object per line. The first record of a run truncates the
/// file, later records are appended.
pub struct JsonLinesStore {
    path: PathBuf,
    written: usize,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}

impl MatchSink for JsonLinesStore {
    fn save_match(&mut self, record: &MatchRecord) -> Result<()> {
        let truncate = self.written == 0;
        if truncate {
            self.ensure_parent()?;
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(truncate)
            .append(!truncate)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        self.written += 1;
        debug!(path = %self.path.display(), truncate, "saved match record");
        Ok(())
    }

    fn written(&self) -> usize {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchSummary, Score};

    fn record(home: &str) -> MatchRecord {
        MatchRecord::new(MatchSummary::new(home, "SK Other"), Score(0, 0), Vec::new())
    }

    #[test]
    fn first_write_truncates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");
        fs::write(&path, "stale line from a previous run\n").unwrap();

        let mut store = JsonLinesStore::new(&path);
        store.save_match(&record("FC Test")).unwrap();
        store.save_match(&record("FC Second")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!content.contains("stale"));
        assert!(lines[0].contains("FC Test"));
        assert!(lines[1].contains("FC Second"));
        assert_eq!(store.written(), 2);
    }

    #[test]
    fn new_run_truncates_again() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");

        let mut first = JsonLinesStore::new(&path);
        first.save_match(&record("FC Test")).unwrap();
        first.save_match(&record("FC Test")).unwrap();

        let mut second = JsonLinesStore::new(&path);
        second.save_match(&record("FC Rerun")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("FC Rerun"));
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("matches.json");

        let mut store = JsonLinesStore::new(&path);
        store.save_match(&record("FC Test")).unwrap();

        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }
}
