#[macro_use]
extern crate log;

use survey_core::{clock::Clock, gateways::audit::AuditLog};
use survey_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    cfg: Cfg,
    clock: Box<dyn Clock + Send + Sync>,
    audit_log: Box<dyn AuditLog + Send + Sync>,
    version: &'static str,
) {
    web::run(connections, cfg, clock, audit_log, version).await;
}
