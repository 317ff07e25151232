use super::prelude::*;

/// Marks an active survey comment as deleted.
///
/// The entity is retained in the database, but it will not
/// be visible anymore. Deleting it again fails with `NotFound`.
pub fn delete_survey_comment<R>(repo: &R, clock: &dyn Clock, id: &Id) -> Result<()>
where
    R: SurveyCommentRepo,
{
    let deleted_at = clock.now();
    let count = repo.soft_delete_active_survey_comment(id, deleted_at)?;
    if count == 0 {
        log::debug!("No active survey comment {id} to delete");
        return Err(RepoError::NotFound.into());
    }
    debug_assert_eq!(1, count);
    Ok(())
}
