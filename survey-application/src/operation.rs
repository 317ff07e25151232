use std::fmt;

/// The operations on survey comments as seen from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Tag of the audit log transaction.
    pub const fn action(self) -> &'static str {
        match self {
            Self::GetAll => "GET_ALL",
            Self::GetById => "GET_BY_ID",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Message that is reported to clients if the operation failed.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::GetAll => "An error occurred while retrieving survey comments.",
            Self::GetById => "An error occurred while retrieving the survey comment.",
            Self::Create => "An error occurred while creating the survey comment.",
            Self::Update => "An error occurred while updating the survey comment.",
            Self::Delete => "An error occurred while deleting the survey comment.",
        }
    }

    pub(crate) fn audit_message(self) -> &'static str {
        let msg = self.failure_message();
        msg.strip_suffix('.').unwrap_or(msg)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.action())
    }
}
