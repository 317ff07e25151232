use super::prelude::*;

pub fn load_survey_comments<R>(repo: &R) -> Result<Vec<SurveyComment>>
where
    R: SurveyCommentRepo,
{
    let survey_comments = repo.all_active_survey_comments()?;
    debug_assert!(survey_comments.iter().all(SurveyComment::is_active));
    Ok(survey_comments)
}

pub fn get_survey_comment<R>(repo: &R, id: &Id) -> Result<SurveyComment>
where
    R: SurveyCommentRepo,
{
    Ok(repo.get_active_survey_comment(id)?)
}
