use super::*;

pub fn update_survey_comment(
    connections: &sqlite::Connections,
    clock: &dyn Clock,
    audit_log: &dyn AuditLog,
    id: &Id,
    feedback: Feedback,
) -> Result<()> {
    let op = Operation::Update;
    let site = CallSite::new("update_survey_comment");
    audit_log.transaction(
        site,
        op.action(),
        &format!(
            "Updating survey comment with ID: {id}, user name: {}",
            feedback.user_name
        ),
    );
    let res = connections
        .exclusive()
        .map_err(AppError::from)
        .and_then(|db| Ok(usecases::update_survey_comment(&db, clock, id, feedback)?));
    match res {
        Ok(()) => {
            audit_log.transaction(
                site,
                op.action(),
                &format!("Successfully updated survey comment with ID: {id}"),
            );
            Ok(())
        }
        Err(err) => Err(audit_failure(
            audit_log,
            site,
            op,
            &format!(" for update with ID: {id}"),
            err,
        )),
    }
}
