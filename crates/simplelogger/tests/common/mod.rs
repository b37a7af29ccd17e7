use simplelogger::{Level, LogConfig, LogFacade, TestCapture};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A facade writing to a single file in a fresh temporary directory
#[allow(dead_code)]
pub struct FileFacade {
    pub facade: LogFacade,
    pub capture: TestCapture,
    pub path: PathBuf,
    pub dir: TempDir,
}

/// Create a captured facade at `level` whose output goes to `out.log`
#[allow(dead_code)]
pub fn file_facade(level: Level) -> FileFacade {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let config = LogConfig::default()
        .with_level(level)
        .with_outputs([path.display().to_string()]);
    let (facade, capture) = LogFacade::with_capture(config).unwrap();
    FileFacade {
        facade,
        capture,
        path,
        dir,
    }
}

/// Lines written to `path` so far
#[allow(dead_code)]
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Whether `message` starts with `YYYY-MM-DD HH:MM:SS.mmm - `
#[allow(dead_code)]
pub fn has_message_timestamp(message: &str) -> bool {
    if message.len() < 26 || !message.is_char_boundary(23) {
        return false;
    }
    let (stamp, rest) = message.split_at(23);
    chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.3f").is_ok()
        && stamp.as_bytes()[19] == b'.'
        && rest.starts_with(" - ")
}
