use super::*;

pub fn create_survey_comment(
    connections: &sqlite::Connections,
    clock: &dyn Clock,
    audit_log: &dyn AuditLog,
    feedback: Feedback,
) -> Result<SurveyComment> {
    let op = Operation::Create;
    let site = CallSite::new("create_survey_comment");
    let details = format!(
        " for user name: {}, email: {}",
        feedback.user_name,
        feedback.email.as_deref().unwrap_or("N/A")
    );
    audit_log.transaction(
        site,
        op.action(),
        &format!("Creating a new survey comment{details}"),
    );
    let res = connections
        .exclusive()
        .map_err(AppError::from)
        .and_then(|db| Ok(usecases::create_survey_comment(&db, clock, feedback)?));
    match res {
        Ok(survey_comment) => {
            audit_log.transaction(
                site,
                op.action(),
                &format!(
                    "Successfully created survey comment with ID: {}",
                    survey_comment.id
                ),
            );
            Ok(survey_comment)
        }
        Err(err) => Err(audit_failure(audit_log, site, op, &details, err)),
    }
}
