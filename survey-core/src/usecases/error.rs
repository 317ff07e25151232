use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The user name is missing")]
    UserName,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}
