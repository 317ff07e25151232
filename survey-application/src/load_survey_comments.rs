use super::*;

pub fn load_survey_comments(
    connections: &sqlite::Connections,
    audit_log: &dyn AuditLog,
) -> Result<Vec<SurveyComment>> {
    let op = Operation::GetAll;
    let site = CallSite::new("load_survey_comments");
    audit_log.transaction(site, op.action(), "Retrieving all survey comments");
    let res = connections
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(usecases::load_survey_comments(&db)?));
    match res {
        Ok(survey_comments) => {
            audit_log.transaction(
                site,
                op.action(),
                &format!(
                    "Successfully retrieved {} survey comment(s)",
                    survey_comments.len()
                ),
            );
            Ok(survey_comments)
        }
        Err(err) => Err(audit_failure(audit_log, site, op, "", err)),
    }
}

pub fn get_survey_comment(
    connections: &sqlite::Connections,
    audit_log: &dyn AuditLog,
    id: &Id,
) -> Result<SurveyComment> {
    let op = Operation::GetById;
    let site = CallSite::new("get_survey_comment");
    audit_log.transaction(
        site,
        op.action(),
        &format!("Retrieving survey comment with ID: {id}"),
    );
    let res = connections
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(usecases::get_survey_comment(&db, id)?));
    match res {
        Ok(survey_comment) => {
            audit_log.transaction(
                site,
                op.action(),
                &format!("Successfully retrieved survey comment with ID: {id}"),
            );
            Ok(survey_comment)
        }
        Err(err) => Err(audit_failure(
            audit_log,
            site,
            op,
            &format!(" with ID: {id}"),
            err,
        )),
    }
}
