use super::*;

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

#[get("/server/openapi.yaml")]
pub fn get_api() -> (ContentType, &'static str) {
    let data = include_str!("../../../openapi.yaml");
    (ContentType::new("text", "yaml"), data)
}

#[get("/")]
pub fn get_swagger_ui() -> RawHtml<&'static str> {
    RawHtml(include_str!("../../../swagger-ui.html"))
}
