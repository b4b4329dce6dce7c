use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use chrono::Local;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn init_logging() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("jira-report")
        .join("logs");

    init_logging_in(log_dir)
}

/// Start logging into `log_dir`. Until this is called every log function is a no-op.
pub fn init_logging_in(log_dir: PathBuf) -> Result<PathBuf, Box<dyn std::error::Error>> {
    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("jira-report-{}.log", Local::now().format("%Y%m%d-%H%M%S")));

    match LOG_FILE.lock() {
        Ok(mut guard) => *guard = Some(log_file.clone()),
        Err(_) => return Err("log file lock poisoned".into()),
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

fn log_with_level(level: &str, message: &str) {
    let Some(log_file) = get_log_file_path() else {
        return;
    };

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
    {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
    }

    // stdout carries the report itself, so nothing is echoed there
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_log_lines_are_appended_with_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_logging_in(dir.path().to_path_buf()).unwrap();

        log_debug("resolving identity");
        log_error("search failed");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO - Logging initialized"));
        assert!(contents.contains("DEBUG - resolving identity"));
        assert!(contents.contains("ERROR - search failed"));
        assert_eq!(get_log_file_path(), Some(path));
    }
}
