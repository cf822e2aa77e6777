use anyhow::Result;
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, setup};

/// Recreates the schema and fills it with demo articles
pub struct SeedingService {
    config: AppConfig,
}

impl SeedingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, count: usize) -> Result<usize> {
        let pool = database::create_pool(&self.config.database.path)?;
        let conn = database::get_connection(&pool)?;

        info!("Resetting database at {}", self.config.database.path);
        setup::reset_database(&conn)?;
        setup::seed_articles(&conn, count)
    }
}
