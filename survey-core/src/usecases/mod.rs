mod create_survey_comment;
mod delete_survey_comment;
mod error;
mod load_survey_comments;
mod update_survey_comment;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_survey_comment::*, delete_survey_comment::*, error::Error, load_survey_comments::*,
    update_survey_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        clock::Clock,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
