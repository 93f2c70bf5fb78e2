use std::env;

pub const DEFAULT_DATABASE_PATH: &str = "esports_stats.db";

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
        }
    }
}

impl DatabaseSettings {
    /// Reads `DATABASE_PATH`, falling back to the default file.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(path) = env::var("DATABASE_PATH") {
            if !path.trim().is_empty() {
                settings.path = path;
            }
        }
        settings
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
        }
    }

    /// Command-line database path wins over the environment.
    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database = self.database.with_path(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_settings() {
        let settings = DatabaseSettings::default();
        assert_eq!(settings.path, DEFAULT_DATABASE_PATH);
        assert_eq!(settings.pool_size, 4);
    }

    #[test]
    fn test_cli_path_overrides_config() {
        let config = AppConfig {
            database: DatabaseSettings::default(),
        }
        .with_database_path(Some("/tmp/stats.db".to_string()));
        assert_eq!(config.database.path, "/tmp/stats.db");

        let unchanged = AppConfig {
            database: DatabaseSettings::default(),
        }
        .with_database_path(None);
        assert_eq!(unchanged.database.path, DEFAULT_DATABASE_PATH);
    }
}
