//! Developer listing and profile pages.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::params::ListParams;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, profiles as profiles_service};

#[get("/")]
/// Lists developers, optionally narrowed to those with a matching skill.
pub async fn show_profiles(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match profiles_service::load_profiles_page(repo.get_ref(), &params) {
        Ok(profiles) => {
            let mut context = base_context(&flash_messages, "profiles");
            context.insert("search_query", &profiles.search_query);
            context.insert("profiles", &profiles);

            render_template(&tera, "users/profiles.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load profiles: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/profile/{profile_id}/")]
pub async fn show_profile(
    profile_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match profiles_service::load_profile_page(repo.get_ref(), profile_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "profiles");
            context.insert("profile", &data.profile);
            context.insert("top_skills", &data.top_skills);
            context.insert("other_skills", &data.other_skills);
            context.insert("projects", &data.projects);

            render_template(&tera, "users/user-profile.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Profile not found.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load profile: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
