use crate::error::ApiResult;
use crate::generator::ProjectGenerator;
use actix_web::{post, web, HttpResponse};
use shared_types::GenerateProjectRequest;

#[post("/api/generate")]
pub async fn generate_project(
    req: web::Json<GenerateProjectRequest>,
    generator: web::Data<ProjectGenerator>,
) -> ApiResult<HttpResponse> {
    let project = generator.generate(&req).await?;
    Ok(HttpResponse::Ok().json(project))
}
