use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use survey_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod survey_comment;


type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn timestamp_from_row(millis: i64, offset_seconds: i32) -> Result<Timestamp> {
    Timestamp::from_millis(millis, offset_seconds).map_err(|err| {
        anyhow!("Invalid timestamp {millis} ms with UTC offset {offset_seconds} s: {err}").into()
    })
}
