use rocket::{config::Config as RocketCfg, Rocket, Route};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use survey_core::{clock::Clock, gateways::audit::AuditLog};
use survey_db_sqlite::Connections;

pub mod api;
mod guards;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub enable_cors: bool,
    // No cross-origin requests are allowed if empty
    pub cors_allowed_origins: Vec<String>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) struct Gateways {
    clock: Box<dyn Clock + Send + Sync>,
    audit_log: Box<dyn AuditLog + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;
    let Gateways { clock, audit_log } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(guards::Clock(clock))
        .manage(guards::AuditLog(audit_log))
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![
        ("/api", api::routes()),
        ("/swagger", api::swagger_routes()),
    ]
}

fn cors(allowed_origins: &[String]) -> Result<rocket_cors::Cors, rocket_cors::Error> {
    if allowed_origins.is_empty() {
        warn!("CORS is enabled without any allowed origins");
    }
    CorsOptions {
        allowed_origins: AllowedOrigins::some_exact(allowed_origins),
        allowed_headers: AllowedHeaders::all(),
        allow_credentials: true,
        ..Default::default()
    }
    .to_cors()
}

pub async fn run(
    db: Connections,
    cfg: Cfg,
    clock: Box<dyn Clock + Send + Sync>,
    audit_log: Box<dyn AuditLog + Send + Sync>,
    version: &'static str,
) {
    let Cfg {
        enable_cors,
        cors_allowed_origins,
    } = cfg;
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let gateways = Gateways { clock, audit_log };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match cors(&cors_allowed_origins) {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
