use std::result;

use rocket::{
    self, delete, get,
    http::{ContentType, Status},
    post, put,
    response::{self, content::RawHtml, status::Created, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};
use survey_application::{operation::Operation, prelude as flows};
use survey_boundary::{self as json, Error as JsonErrorResponse};
use survey_core::entities::*;
use survey_db_sqlite::Connections;

use super::guards::*;

mod error;
mod survey_comments;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   survey comments   --- //
        survey_comments::get_survey_comments,
        survey_comments::get_survey_comment,
        survey_comments::post_survey_comment,
        survey_comments::put_survey_comment,
        survey_comments::delete_survey_comment,
        // ---   server   --- //
        util::get_version,
        util::get_api,
    ]
}

pub fn swagger_routes() -> Vec<Route> {
    routes![util::get_swagger_ui]
}

fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    message: String,
    error: Option<String>,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse { message, error };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
