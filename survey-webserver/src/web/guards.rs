use survey_core::{clock, gateways::audit};

pub struct Version(pub &'static str);

pub struct Clock(pub Box<dyn clock::Clock + Send + Sync>);

pub struct AuditLog(pub Box<dyn audit::AuditLog + Send + Sync>);
