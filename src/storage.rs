use crate::errors::AppError;
use crate::models::ActivityLog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub const DEFAULT_DATA_PATH: &str = "data/activities.json";

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Reads the persisted log. Any failure yields an empty log instead of an error.
pub async fn load_log(path: &Path) -> ActivityLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<ActivityLog>(&bytes) {
            Ok(log) => log,
            Err(err) => {
                error!(path = %path.display(), "failed to parse activity log: {err}");
                ActivityLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no activity log yet, starting empty");
            ActivityLog::default()
        }
        Err(err) => {
            error!(path = %path.display(), "failed to read activity log: {err}");
            ActivityLog::default()
        }
    }
}

/// Writes the log to a sibling temp file, then renames it over `path`.
///
/// A crash mid-write leaves the previous file intact.
pub async fn persist_log(path: &Path, log: &ActivityLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(log).map_err(AppError::internal)?;
    let staging = staging_path(path);
    fs::write(&staging, payload).await.map_err(AppError::internal)?;
    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(AppError::internal(err));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
