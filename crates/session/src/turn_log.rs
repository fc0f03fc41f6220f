//! JSON-lines turn log.
//!
//! One object per line, tagged by `type`. The log is best effort: the first
//! failed write turns it off for the rest of the session.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{TurnClickResult, TurnReport};

/// One log line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    Restart {
        seed: u32,
        empty_cells: usize,
    },
    Turn {
        action: &'static str,
        from: Option<usize>,
        to: Option<usize>,
        path_len: usize,
        score_before: u32,
        score_after: u32,
        cleared: u32,
        spawned: u32,
        empty_cells: usize,
        game_over: bool,
    },
}

impl LogRecord {
    /// Record for an animated turn, given the game state after it resolved.
    pub fn turn(
        result: &TurnClickResult,
        report: Option<TurnReport>,
        empty_cells: usize,
        game_over: bool,
    ) -> Self {
        let report = report.unwrap_or_default();
        LogRecord::Turn {
            action: result.action.as_str(),
            from: result.from,
            to: result.to,
            path_len: result.path.len(),
            score_before: result.score_before,
            score_after: result.score_after,
            cleared: report.cleared(),
            spawned: report.spawned,
            empty_cells,
            game_over,
        }
    }
}

/// Append-only JSONL sink.
pub struct TurnLog {
    sink: Option<Box<dyn Write + Send>>,
    buf: Vec<u8>,
}

impl std::fmt::Debug for TurnLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnLog")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl TurnLog {
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening turn log {}", path.display()))?;
        Ok(Self::from_writer(file))
    }

    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
            buf: Vec::with_capacity(512),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append one record. Returns false when the log is (now) disabled.
    pub fn record(&mut self, record: &LogRecord) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return true;
        }
        self.buf.push(b'\n');

        if sink.write_all(&self.buf).and_then(|_| sink.flush()).is_err() {
            self.sink = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_are_tagged_json_lines() {
        let out = Shared::default();
        let mut log = TurnLog::from_writer(out.clone());
        assert!(log.record(&LogRecord::Restart {
            seed: 7,
            empty_cells: 76
        }));
        assert!(log.record(&LogRecord::Turn {
            action: "moved",
            from: Some(0),
            to: Some(2),
            path_len: 3,
            score_before: 0,
            score_after: 10,
            cleared: 5,
            spawned: 0,
            empty_cells: 80,
            game_over: false,
        }));

        let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"type":"restart","seed":7,"empty_cells":76}"#);
        assert!(lines[1].starts_with(r#"{"type":"turn","action":"moved","from":0,"to":2,"#));
    }

    #[test]
    fn write_failure_disables_log() {
        let mut log = TurnLog::from_writer(Broken);
        assert!(log.is_enabled());
        let rec = LogRecord::Restart {
            seed: 1,
            empty_cells: 76,
        };
        assert!(!log.record(&rec));
        assert!(!log.is_enabled());
        assert!(!log.record(&rec));
    }

    #[test]
    fn disabled_log_ignores_records() {
        let mut log = TurnLog::disabled();
        assert!(!log.record(&LogRecord::Restart {
            seed: 1,
            empty_cells: 0
        }));
    }
}
