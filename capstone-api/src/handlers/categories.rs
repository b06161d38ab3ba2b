use actix_web::{get, HttpResponse, Responder};
use shared_types::{CategoriesResponse, ProjectCategory};

#[get("/api/categories")]
pub async fn list_categories() -> impl Responder {
    let categories = ProjectCategory::ALL.iter().map(|c| c.info()).collect();
    HttpResponse::Ok().json(CategoriesResponse { categories })
}
