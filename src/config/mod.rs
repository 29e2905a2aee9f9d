use crate::errors::{AppError, AppResult};
use crate::ui::locale::Locale;
use crate::utils::path::expand_tilde_string;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_roster")]
    pub roster: String,
    #[serde(default)]
    pub language: Locale,
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

fn default_roster() -> String {
    Config::config_dir()
        .join("students.csv")
        .to_string_lossy()
        .to_string()
}

fn default_grid_columns() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            roster: default_roster(),
            language: Locale::default(),
            grid_columns: default_grid_columns(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.rollcall`, `%APPDATA%\rollcall`).
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rollcall")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rollcall")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rollcall.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde_string(&cfg.database);
        cfg.roster = expand_tilde_string(&cfg.roster);

        if cfg.grid_columns == 0 {
            return Err(AppError::Config("grid_columns must be at least 1".into()));
        }
        Ok(cfg)
    }

    /// Create the config directory, config file and an empty database file.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(
        custom_db: Option<String>,
        custom_roster: Option<String>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let resolve = |name: String| {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        };

        let db_path = custom_db.map(resolve).unwrap_or_else(Self::database_file);

        let mut config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };
        if let Some(r) = custom_roster {
            config.roster = r;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
