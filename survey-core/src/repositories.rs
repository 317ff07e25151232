// Low-level database access traits.
// Soft-deleted entities are invisible for all read and
// write operations. They are never physically removed.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait SurveyCommentRepo {
    fn create_survey_comment(&self, survey_comment: &SurveyComment) -> Result<()>;

    // Only active survey comments, newest first
    fn all_active_survey_comments(&self) -> Result<Vec<SurveyComment>>;
    fn get_active_survey_comment(&self, id: &Id) -> Result<SurveyComment>;

    // Return the number of affected (active) survey comments
    fn update_active_survey_comment(
        &self,
        id: &Id,
        feedback: &Feedback,
        updated_at: Timestamp,
    ) -> Result<usize>;
    fn soft_delete_active_survey_comment(&self, id: &Id, deleted_at: Timestamp) -> Result<usize>;
}
