use super::*;
use validator::Validate as _;

const BASE_PATH: &str = "/api/survey-comments";

#[get("/survey-comments")]
pub fn get_survey_comments(
    connections: &State<Connections>,
    audit_log: &State<AuditLog>,
) -> Result<Vec<json::SurveyComment>> {
    let survey_comments = flows::load_survey_comments(connections, &*audit_log.0)
        .map_err(ApiError::flow(Operation::GetAll))?;
    Ok(Json(
        survey_comments
            .into_iter()
            .map(json::SurveyComment::from)
            .collect(),
    ))
}

#[get("/survey-comments/<id>")]
pub fn get_survey_comment(
    connections: &State<Connections>,
    audit_log: &State<AuditLog>,
    id: &str,
) -> Result<json::SurveyComment> {
    let id = id.parse::<Id>()?;
    let survey_comment = flows::get_survey_comment(connections, &*audit_log.0, &id)
        .map_err(ApiError::flow(Operation::GetById))?;
    Ok(Json(survey_comment.into()))
}

#[post("/survey-comments", data = "<new_survey_comment>")]
pub fn post_survey_comment(
    connections: &State<Connections>,
    clock: &State<Clock>,
    audit_log: &State<AuditLog>,
    new_survey_comment: JsonResult<json::NewSurveyComment>,
) -> result::Result<Created<Json<json::SurveyComment>>, ApiError> {
    let new_survey_comment = new_survey_comment?.into_inner();
    new_survey_comment.validate()?;
    let survey_comment = flows::create_survey_comment(
        connections,
        &*clock.0,
        &*audit_log.0,
        new_survey_comment.into(),
    )
    .map_err(ApiError::flow(Operation::Create))?;
    let location = format!("{BASE_PATH}/{}", survey_comment.id);
    Ok(Created::new(location).body(Json(survey_comment.into())))
}

#[put("/survey-comments/<id>", data = "<survey_comment>")]
pub fn put_survey_comment(
    connections: &State<Connections>,
    clock: &State<Clock>,
    audit_log: &State<AuditLog>,
    id: &str,
    survey_comment: JsonResult<json::UpdateSurveyComment>,
) -> StatusResult {
    let id = id.parse::<Id>()?;
    let survey_comment = survey_comment?.into_inner();
    survey_comment.validate()?;
    flows::update_survey_comment(
        connections,
        &*clock.0,
        &*audit_log.0,
        &id,
        survey_comment.into(),
    )
    .map_err(ApiError::flow(Operation::Update))?;
    Ok(Status::NoContent)
}

#[delete("/survey-comments/<id>")]
pub fn delete_survey_comment(
    connections: &State<Connections>,
    clock: &State<Clock>,
    audit_log: &State<AuditLog>,
    id: &str,
) -> StatusResult {
    let id = id.parse::<Id>()?;
    flows::delete_survey_comment(connections, &*clock.0, &*audit_log.0, &id)
        .map_err(ApiError::flow(Operation::Delete))?;
    Ok(Status::NoContent)
}
