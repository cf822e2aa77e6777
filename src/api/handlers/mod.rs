use crate::config::settings::AppConfig;
use crate::database::DbPool;

pub mod articles;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}
