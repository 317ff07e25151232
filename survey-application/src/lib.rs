#[macro_use]
extern crate log;

mod create_survey_comment;
mod delete_survey_comment;
mod load_survey_comments;
mod update_survey_comment;

pub mod prelude {
    pub use super::{
        create_survey_comment::*, delete_survey_comment::*, load_survey_comments::*,
        update_survey_comment::*,
    };
}

pub mod error;
pub mod operation;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use survey_core::{
    clock::Clock,
    entities::*,
    gateways::audit::{AuditLog, CallSite},
    usecases,
};

use self::{error::AppError, operation::Operation};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use survey_db_sqlite::Connections;
}

/// Records the outcome of a failed flow.
///
/// Missing survey comments are expected and only
/// audited as a warning, everything else is an error.
fn audit_failure(
    audit_log: &dyn AuditLog,
    site: CallSite,
    operation: Operation,
    details: &str,
    err: AppError,
) -> AppError {
    if err.is_not_found() {
        audit_log.warning(site, &format!("Survey comment not found{details}"));
    } else {
        warn!("{} {err}", operation.failure_message());
        audit_log.error(site, &format!("{}{details}", operation.audit_message()), Some(&err));
    }
    err
}
