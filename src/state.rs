use crate::models::ActivityLog;
use crate::rank::RankTable;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handler state.
///
/// Every read of the log and every append+save holds `log`, so engine calls
/// never observe a half-written log.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub ranks: RankTable<'static>,
    pub log: Arc<Mutex<ActivityLog>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, ranks: RankTable<'static>, log: ActivityLog) -> Self {
        Self {
            data_path,
            ranks,
            log: Arc::new(Mutex::new(log)),
        }
    }
}
