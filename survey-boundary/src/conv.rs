use super::*;
use survey_entities as e;

impl From<e::survey_comment::SurveyComment> for SurveyComment {
    fn from(from: e::survey_comment::SurveyComment) -> Self {
        let e::survey_comment::SurveyComment {
            id,
            feedback,
            deleted,
            created_at,
            updated_at,
        } = from;
        let e::survey_comment::Feedback {
            user_name,
            email,
            usage_without_attachment,
            usage_with_attachment,
            department,
            section,
            remark,
        } = feedback;
        Self {
            id: id.to_string(),
            user_name,
            email,
            usage_without_attachment,
            usage_with_attachment,
            department,
            section,
            remark,
            is_deleted: deleted,
            created_date: created_at.into(),
            updated_date: updated_at.map(Into::into),
        }
    }
}

impl From<NewSurveyComment> for e::survey_comment::Feedback {
    fn from(from: NewSurveyComment) -> Self {
        let NewSurveyComment {
            user_name,
            email,
            usage_without_attachment,
            usage_with_attachment,
            department,
            section,
            remark,
        } = from;
        Self {
            user_name,
            email,
            usage_without_attachment,
            usage_with_attachment,
            department,
            section,
            remark,
        }
    }
}
