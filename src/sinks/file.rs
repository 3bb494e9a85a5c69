//! File sink
//!
//! File sinks are opened in append mode at configuration load, so a target
//! that is not writable fails startup rather than the first emission, and
//! re-running a process against the same target accumulates lines instead
//! of replacing them.

use crate::core::{LogwireError, Result, Severity, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogwireError::sink_unwritable(path.display().to_string(), e))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, _severity: Severity, line: &str) -> Result<()> {
        let write = |w: &mut BufWriter<File>| -> std::io::Result<()> {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            // one durable line per emission
            w.flush()
        };
        write(&mut self.writer)
            .map_err(|e| LogwireError::sink_write(self.path.display().to_string(), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn kind(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_appends_one_line_per_write() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("metrics.csv");

        let mut sink = FileSink::open(&path).expect("open");
        sink.write_line(Severity::Info, "load,1,12.5").expect("write");
        sink.write_line(Severity::Info, "load,2,9.0").expect("write");
        drop(sink);

        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "load,1,12.5\nload,2,9.0\n");
    }

    #[test]
    fn test_reopen_appends() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("metrics.csv");

        for run in 0..2 {
            let mut sink = FileSink::open(&path).expect("open");
            sink.write_line(Severity::Info, &format!("run,{}", run))
                .expect("write");
        }

        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "run,0\nrun,1\n");
    }

    #[test]
    fn test_unwritable_path_fails_at_open() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("no_such_dir").join("metrics.csv");

        let err = FileSink::open(&path).unwrap_err();
        assert!(matches!(err, LogwireError::SinkUnwritable { .. }));
    }
}
