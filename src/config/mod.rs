use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use survey_core::clock::parse_utc_offset;
use time::UtcOffset;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "survey-bot.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_LOGS_DIR: &str = "SURVEY_BOT_LOGS_DIR";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub audit_log: AuditLog,
    pub clock: Clock,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(logs_dir) = env::var(ENV_NAME_LOGS_DIR) {
            cfg.audit_log.dir = logs_dir.into();
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub cors_allowed_origins: Vec<String>,
}

pub struct AuditLog {
    /// File system directory for the daily log files.
    pub dir: PathBuf,
}

pub struct Clock {
    /// Names of time zones, tried in order.
    pub time_zones: Vec<String>,
    pub fallback_utc_offset: UtcOffset,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            audit_log,
            clock,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be positive"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            cors_allowed_origins,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            cors_allowed_origins,
        };

        let raw::AuditLog { dir } = audit_log.unwrap_or_default();
        let audit_log = AuditLog { dir };

        let raw::Clock {
            time_zones,
            fallback_utc_offset,
        } = clock.unwrap_or_default();
        let fallback_utc_offset = parse_utc_offset(&fallback_utc_offset)?;
        let clock = Clock {
            time_zones,
            fallback_utc_offset,
        };

        Ok(Self {
            db,
            webserver,
            audit_log,
            clock,
        })
    }
}
