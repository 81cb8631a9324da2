pub mod aggregate;
pub mod app;
pub mod config;
pub mod display;
pub mod errors;
pub mod goal;
pub mod handlers;
pub mod models;
pub mod range;
pub mod rank;
pub mod state;
pub mod stats;
pub mod storage;
pub mod time_utils;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use rank::RankTable;
pub use state::AppState;
pub use storage::{load_log, resolve_data_path};
