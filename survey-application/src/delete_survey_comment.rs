use super::*;

/// Soft deletion
pub fn delete_survey_comment(
    connections: &sqlite::Connections,
    clock: &dyn Clock,
    audit_log: &dyn AuditLog,
    id: &Id,
) -> Result<()> {
    let op = Operation::Delete;
    let site = CallSite::new("delete_survey_comment");
    audit_log.transaction(
        site,
        op.action(),
        &format!("Deleting (soft delete) survey comment with ID: {id}"),
    );
    let res = connections
        .exclusive()
        .map_err(AppError::from)
        .and_then(|db| Ok(usecases::delete_survey_comment(&db, clock, id)?));
    match res {
        Ok(()) => {
            audit_log.transaction(
                site,
                op.action(),
                &format!("Successfully deleted (soft delete) survey comment with ID: {id}"),
            );
            Ok(())
        }
        Err(err) => Err(audit_failure(
            audit_log,
            site,
            op,
            &format!(" for deletion with ID: {id}"),
            err,
        )),
    }
}
