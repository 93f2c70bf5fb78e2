use anyhow::{Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, setup};
use crate::errors::setup_context;

pub struct SetupService {
    config: AppConfig,
}

impl SetupService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Vec<String>> {
        let path = &self.config.database.path;
        info!("=== Setting up database at {} ===", path);

        let pool = database::create_pool(&self.config.database)
            .with_context(|| setup_context(path))?;
        let conn = database::get_connection(&pool)?;

        setup::reset_database(&conn).with_context(|| setup_context(path))?;
        let tables = setup::list_tables(&conn)?;
        info!("  → Created {} tables: {}", tables.len(), tables.join(", "));

        Ok(tables)
    }
}
