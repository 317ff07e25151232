use crate::{id::*, time::*};

/// The answers of a single survey participant.
///
/// These are the mutable fields of a [`SurveyComment`] that are
/// replaced as a whole on every update.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub user_name                : String,
    pub email                    : Option<String>,
    pub usage_without_attachment : Option<String>,
    pub usage_with_attachment    : Option<String>,
    pub department               : Option<String>,
    pub section                  : Option<String>,
    pub remark                   : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyComment {
    pub id         : Id,
    pub feedback   : Feedback,
    // Soft deletion: the entity is retained but
    // invisible for all read and write operations.
    pub deleted    : bool,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
}

impl SurveyComment {
    pub fn new(id: Id, feedback: Feedback, created_at: Timestamp) -> Self {
        Self {
            id,
            feedback,
            deleted: false,
            created_at,
            updated_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}
