use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use survey_core::{
    clock::CivilClock,
    gateways::audit::{AuditLog as _, CallSite},
};
use survey_db_sqlite::{run_embedded_database_migrations, Connections};
use survey_gateways::audit_file::FileAuditLog;

mod config;

use self::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "survey-bot", version)]
#[command(about = "Collects and manages survey comments", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let Config {
        db,
        webserver,
        audit_log,
        clock,
    } = Config::try_load_from_file_or_default(cli.config.as_deref())?;

    log::info!("Connecting to SQLite database {}", db.conn_sqlite);
    let connections = Connections::init(&db.conn_sqlite, db.conn_pool_size.into())?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    let clock = CivilClock::new(clock.time_zones, clock.fallback_utc_offset);
    log::info!("Writing audit log into {}", audit_log.dir.display());
    let audit_log = FileAuditLog::new(audit_log.dir, clock.clone());
    audit_log.info(
        CallSite::new("main"),
        &format!("Starting survey-bot v{VERSION}"),
    );

    let web_cfg = survey_webserver::Cfg {
        enable_cors: webserver.enable_cors,
        cors_allowed_origins: webserver.cors_allowed_origins,
    };
    survey_webserver::run(
        connections,
        web_cfg,
        Box::new(clock),
        Box::new(audit_log),
        VERSION,
    )
    .await;
    Ok(())
}
