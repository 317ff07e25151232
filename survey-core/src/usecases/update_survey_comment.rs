use super::{create_survey_comment::check_feedback, prelude::*};

/// Replaces all answers of an active survey comment.
///
/// Optional fields that are missing in `feedback` are cleared.
/// Concurrent updates are not detected, the last one wins.
pub fn update_survey_comment<R>(
    repo: &R,
    clock: &dyn Clock,
    id: &Id,
    feedback: Feedback,
) -> Result<()>
where
    R: SurveyCommentRepo,
{
    check_feedback(&feedback)?;
    let updated_at = clock.now();
    let count = repo.update_active_survey_comment(id, &feedback, updated_at)?;
    if count == 0 {
        log::debug!("No active survey comment {id} to update");
        return Err(RepoError::NotFound.into());
    }
    debug_assert_eq!(1, count);
    Ok(())
}
