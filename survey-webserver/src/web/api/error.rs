use super::json_error_response;
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use survey_application::{error::AppError, operation::Operation};
use survey_core::{entities::IdParseError, usecases::Error as ParameterError};
use thiserror::Error;
use validator::ValidationErrors;

pub const NOT_FOUND_MESSAGE: &str = "Survey comment not found.";

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error("{}", .operation.failure_message())]
    App {
        operation: Operation,
        #[source]
        err: AppError,
    },
    #[error("Invalid survey comment id.")]
    InvalidId(#[source] IdParseError),
    #[error("Invalid survey comment.")]
    Validation(#[from] ValidationErrors),
    #[error("Invalid JSON payload.")]
    Json(#[source] anyhow::Error),
}

impl Error {
    pub fn flow(operation: Operation) -> impl FnOnce(AppError) -> Self {
        move |err| Self::App { operation, err }
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::Json(anyhow!(err)),
            JsonError::Parse(_str, err) => Self::Json(anyhow!(err)),
        }
    }
}

impl From<IdParseError> for Error {
    fn from(err: IdParseError) -> Self {
        Self::InvalidId(err)
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let message = self.to_string();
        match self {
            Error::App { operation, err } => {
                if err.is_not_found() {
                    return json_error_response(
                        req,
                        NOT_FOUND_MESSAGE.to_string(),
                        None,
                        Status::NotFound,
                    );
                }
                if let AppError::Business(err @ ParameterError::UserName) = &err {
                    return json_error_response(
                        req,
                        "Invalid survey comment.".to_string(),
                        Some(err.to_string()),
                        Status::BadRequest,
                    );
                }
                error!("{operation} failed: {err}");
                json_error_response(
                    req,
                    message,
                    Some(err.to_string()),
                    Status::InternalServerError,
                )
            }
            Error::InvalidId(err) => {
                json_error_response(req, message, Some(err.to_string()), Status::BadRequest)
            }
            Error::Validation(errors) => {
                json_error_response(req, message, Some(errors.to_string()), Status::BadRequest)
            }
            Error::Json(err) => json_error_response(
                req,
                message,
                Some(err.to_string()),
                Status::UnprocessableEntity,
            ),
        }
    }
}
