//! Logging bootstrap: one explicit sink, two destinations.
//!
//! Every record goes through a single [`Tee`] writer to both stdout (the
//! live stream) and `roles_diff.log` (the persistent file), timestamped and
//! leveled by `env_logger`'s formatter. Configured exactly once, at process
//! entry.

use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{self, Write};

/// Persistent log file, appended to in the working directory.
pub const LOG_FILE: &str = "roles_diff.log";

/// Writer duplicating every record into two underlying writers.
pub struct Tee<A: Write, B: Write> {
    primary: A,
    secondary: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    /// Wrap two writers.
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.secondary.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

/// Initialize logging for the run.
///
/// Default level is Info so milestone and warning lines always show; `-q`
/// drops to Error, `-v`/`-vv` raise to Debug/Trace.
pub fn init(quiet: bool, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("cannot open log file '{LOG_FILE}'"))?;

    env_logger::Builder::new()
        .filter_level(if quiet { log::LevelFilter::Error } else { level })
        .target(env_logger::Target::Pipe(Box::new(Tee::new(
            io::stdout(),
            file,
        ))))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read as _;

    #[test]
    fn test_tee_writes_both() {
        let mut tee = Tee::new(Vec::new(), Vec::new());
        tee.write_all(b"hello").unwrap();
        tee.flush().unwrap();
        assert_eq!(tee.primary, b"hello");
        assert_eq!(tee.secondary, b"hello");
    }

    #[test]
    fn test_tee_reports_full_length() {
        let mut tee = Tee::new(Vec::new(), Vec::new());
        let written = tee.write(b"0123456789").unwrap();
        assert_eq!(written, 10);
    }

    #[test]
    fn test_tee_into_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles_diff.log");

        let file = File::create(&path).unwrap();
        let mut tee = Tee::new(Vec::new(), file);
        tee.write_all(b"[WARN] mismatch\n").unwrap();
        tee.flush().unwrap();
        drop(tee);

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "[WARN] mismatch\n");
    }
}
