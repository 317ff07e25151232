use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

#[cfg(feature = "entity-conversions")]
mod conv;

pub const MAX_USER_NAME_LEN: u64 = 200;
pub const MAX_EMAIL_LEN: u64 = 200;
pub const MAX_DEPARTMENT_LEN: u64 = 500;
pub const MAX_SECTION_LEN: u64 = 500;
pub const MAX_REMARK_LEN: u64 = 200;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
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
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_date: Option<OffsetDateTime>,
}

/// Payload for submitting a new survey comment.
///
/// Only `userName` is mandatory. Optional fields that are
/// missing in the payload are stored as `null`.
#[derive(Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewSurveyComment {
    #[validate(
        length(min = 1, max = MAX_USER_NAME_LEN),
        custom(function = "check_not_blank")
    )]
    pub user_name: String,
    #[validate(length(max = MAX_EMAIL_LEN))]
    pub email: Option<String>,
    pub usage_without_attachment: Option<String>,
    pub usage_with_attachment: Option<String>,
    #[validate(length(max = MAX_DEPARTMENT_LEN))]
    pub department: Option<String>,
    #[validate(length(max = MAX_SECTION_LEN))]
    pub section: Option<String>,
    #[validate(length(max = MAX_REMARK_LEN))]
    pub remark: Option<String>,
}

/// Payload for replacing all answers of an existing survey comment.
///
/// Every field overwrites the stored value, i.e. omitted
/// optional fields are reset to `null`.
pub type UpdateSurveyComment = NewSurveyComment;

fn check_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}
