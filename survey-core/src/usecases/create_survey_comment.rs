use super::prelude::*;

pub(crate) fn check_feedback(feedback: &Feedback) -> Result<()> {
    if feedback.user_name.trim().is_empty() {
        return Err(Error::UserName);
    }
    Ok(())
}

pub fn create_survey_comment<R>(
    repo: &R,
    clock: &dyn Clock,
    feedback: Feedback,
) -> Result<SurveyComment>
where
    R: SurveyCommentRepo,
{
    check_feedback(&feedback)?;
    let survey_comment = SurveyComment::new(Id::new(), feedback, clock.now());
    log::debug!("Creating survey comment {}", survey_comment.id);
    repo.create_survey_comment(&survey_comment)?;
    Ok(survey_comment)
}
