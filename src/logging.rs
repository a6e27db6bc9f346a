//! File-backed sink for the `log` facade.
//!
//! The terminal belongs to the game screen, so records go to a file instead.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{GameError, Result};

struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{:<5} {}: {}", record.level(), record.target(), record.args());
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Truncates `path` and routes every record at or above `level` into it.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| GameError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
        level,
    }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn records_land_in_the_file() {
        let path = std::env::temp_dir().join(format!("maze-log-{}.log", std::process::id()));
        init(&path, LevelFilter::Debug).unwrap();

        log::debug!("hello from the maze");
        log::trace!("too chatty");
        log::logger().flush();

        let contents = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert!(contents.contains("DEBUG"));
        assert!(contents.contains("hello from the maze"));
        assert!(!contents.contains("too chatty"));
    }

    #[test]
    fn unopenable_path_is_reported() {
        let path = Path::new("/nonexistent-dir/for/maze.log");
        let err = init(path, LevelFilter::Info).unwrap_err();
        assert!(matches!(err, GameError::LogFile { .. }));
    }
}
