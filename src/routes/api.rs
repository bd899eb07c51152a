use actix_web::{HttpResponse, Responder, get, web};

use crate::params::ListParams;
use crate::repository::DieselRepository;
use crate::services::api as api_service;

#[get("/v1/projects")]
/// JSON variant of the projects listing, same search and paging rules.
pub async fn api_v1_projects(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_projects(repo.get_ref(), &params) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list projects: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
