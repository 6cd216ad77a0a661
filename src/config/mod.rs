use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_admin_key")]
    pub admin_key: String,
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_admin_key() -> String {
    "123456".to_string()
}
fn default_display_date_format() -> String {
    "%d/%m/%Y".to_string()
}
fn default_notice_seconds() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            admin_key: default_admin_key(),
            display_date_format: default_display_date_format(),
            notice_seconds: default_notice_seconds(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rdriverlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rdriverlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdriverlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rdriverlog.sqlite")
    }

    /// How long a success notice stays visible.
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_seconds)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings the program cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.admin_key.trim().is_empty() {
            return Err(AppError::Config("admin_key must not be empty".into()));
        }

        let fmt = &self.display_date_format;
        if fmt.is_empty() || StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid display_date_format '{}'",
                fmt
            )));
        }

        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("rdriverlog.sqlite")
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
