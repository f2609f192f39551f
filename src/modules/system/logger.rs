use crate::modules::system::config::get_data_dir;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_RETENTION_DAYS: u64 = 7;
const MAX_TOTAL_SIZE_BYTES: u64 = 256 * 1024 * 1024;
const TARGET_SIZE_BYTES: u64 = 128 * 1024 * 1024;

struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

pub fn get_log_dir() -> Result<PathBuf, String> {
    let log_dir = get_data_dir()?.join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;
    }

    Ok(log_dir)
}

/// Console + daily-rolling file logging, filtered by `RUST_LOG` (default `info`).
pub fn init_logger() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::Layer::new()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_timer(LocalTimer);

    let log_dir = match get_log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to initialize log directory: {}", e);
            let _ = tracing_subscriber::registry()
                .with(filter_layer)
                .with(console_layer)
                .try_init();
            return;
        }
    };

    let file_appender = tracing_appender::rolling::daily(&log_dir, "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(LocalTimer);
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init();
    // The writer must outlive every pipeline; the process owns it until exit.
    std::mem::forget(guard);

    info!("Log system initialized (Console + File persistence)");
    if let Err(e) = cleanup_old_logs(&log_dir, LOG_RETENTION_DAYS) {
        warn!("Failed to cleanup old logs: {}", e);
    }
}

/// Deletes log files older than `days_to_keep`, then the oldest files until
/// the directory fits the size cap.
pub fn cleanup_old_logs(log_dir: &Path, days_to_keep: u64) -> Result<usize, String> {
    use std::time::{SystemTime, UNIX_EPOCH};

    if !log_dir.exists() {
        return Ok(0);
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| format!("Failed to get system time: {}", e))?
        .as_secs();
    let cutoff_time = now.saturating_sub(days_to_keep * 24 * 60 * 60);

    let mut entries_info = Vec::new();
    let entries =
        fs::read_dir(log_dir).map_err(|e| format!("Failed to read log directory: {}", e))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Ok(metadata) = fs::metadata(&path) {
            let modified_secs = metadata
                .modified()
                .unwrap_or_else(|_| SystemTime::now())
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            entries_info.push((path, metadata.len(), modified_secs));
        }
    }

    let mut deleted_count = 0;
    let mut remaining_entries = Vec::new();
    for (path, size, modified_secs) in entries_info {
        if modified_secs < cutoff_time {
            match fs::remove_file(&path) {
                Ok(()) => {
                    deleted_count += 1;
                    info!("Deleted old log file (expired): {:?}", path.file_name());
                }
                Err(e) => {
                    warn!("Failed to delete old log file {:?}: {}", path, e);
                    remaining_entries.push((path, size, modified_secs));
                }
            }
        } else {
            remaining_entries.push((path, size, modified_secs));
        }
    }

    let mut current_total_size: u64 = remaining_entries.iter().map(|(_, size, _)| *size).sum();
    if current_total_size > MAX_TOTAL_SIZE_BYTES {
        remaining_entries.sort_by_key(|(_, _, modified)| *modified);
        for (path, size, _) in remaining_entries {
            if current_total_size <= TARGET_SIZE_BYTES {
                break;
            }
            if fs::remove_file(&path).is_ok() {
                deleted_count += 1;
                current_total_size -= size;
                info!("Deleted log file (size limit): {:?}", path.file_name());
            }
        }
    }

    Ok(deleted_count)
}
