#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds. The corresponding
// `_offset` columns store the UTC offset in seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = survey_comment)]
pub struct NewSurveyComment<'a> {
    pub id: String,
    pub user_name: &'a str,
    pub email: Option<&'a str>,
    pub usage_without_attachment: Option<&'a str>,
    pub usage_with_attachment: Option<&'a str>,
    pub department: Option<&'a str>,
    pub section: Option<&'a str>,
    pub remark: Option<&'a str>,
    pub is_deleted: bool,
    pub created_at: i64,
    pub created_offset: i32,
    pub updated_at: Option<i64>,
    pub updated_offset: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = survey_comment, treat_none_as_null = true)]
pub struct SurveyCommentFeedbackChangeset<'a> {
    pub user_name: &'a str,
    pub email: Option<&'a str>,
    pub usage_without_attachment: Option<&'a str>,
    pub usage_with_attachment: Option<&'a str>,
    pub department: Option<&'a str>,
    pub section: Option<&'a str>,
    pub remark: Option<&'a str>,
    pub updated_at: Option<i64>,
    pub updated_offset: Option<i32>,
}

#[derive(Queryable)]
pub struct SurveyComment {
    pub id: String,
    pub user_name: String,
    pub email: Option<String>,
    pub usage_without_attachment: Option<String>,
    pub usage_with_attachment: Option<String>,
    pub department: Option<String>,
    pub section: Option<String>,
    pub remark: Option<String>,
    pub is_deleted: bool,
    pub created_at: i64,
    pub created_offset: i32,
    pub updated_at: Option<i64>,
    pub updated_offset: Option<i32>,
}

impl<'a> From<&'a survey_core::entities::SurveyComment> for NewSurveyComment<'a> {
    fn from(from: &'a survey_core::entities::SurveyComment) -> Self {
        let survey_core::entities::SurveyComment {
            id,
            feedback,
            deleted,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.to_string(),
            user_name: &feedback.user_name,
            email: feedback.email.as_deref(),
            usage_without_attachment: feedback.usage_without_attachment.as_deref(),
            usage_with_attachment: feedback.usage_with_attachment.as_deref(),
            department: feedback.department.as_deref(),
            section: feedback.section.as_deref(),
            remark: feedback.remark.as_deref(),
            is_deleted: *deleted,
            created_at: created_at.as_millis(),
            created_offset: created_at.offset_seconds(),
            updated_at: updated_at.as_ref().map(|t| t.as_millis()),
            updated_offset: updated_at.as_ref().map(|t| t.offset_seconds()),
        }
    }
}

impl<'a> SurveyCommentFeedbackChangeset<'a> {
    pub fn new(
        feedback: &'a survey_core::entities::Feedback,
        updated_at: survey_core::entities::Timestamp,
    ) -> Self {
        Self {
            user_name: &feedback.user_name,
            email: feedback.email.as_deref(),
            usage_without_attachment: feedback.usage_without_attachment.as_deref(),
            usage_with_attachment: feedback.usage_with_attachment.as_deref(),
            department: feedback.department.as_deref(),
            section: feedback.section.as_deref(),
            remark: feedback.remark.as_deref(),
            updated_at: Some(updated_at.as_millis()),
            updated_offset: Some(updated_at.offset_seconds()),
        }
    }
}
