//! Project listing, detail, review and edit pages.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::projects::{DeleteProjectForm, ProjectForm, ReviewForm};
use crate::params::ListParams;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, projects as projects_service};

#[get("/projects/")]
pub async fn show_projects(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match projects_service::load_projects_page(repo.get_ref(), &params) {
        Ok(projects) => {
            let mut context = base_context(&flash_messages, "projects");
            context.insert("search_query", &projects.search_query);
            context.insert("projects", &projects);

            render_template(&tera, "projects/projects.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load projects: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/projects/{project_id:\\d+}/")]
pub async fn show_project(
    project_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match projects_service::load_project_page(repo.get_ref(), project_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "projects");
            context.insert("project", &data.project);
            context.insert("owner", &data.owner);
            context.insert("reviews", &data.reviews);

            render_template(&tera, "projects/single-project.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Project not found.").send();
            redirect("/projects/")
        }
        Err(err) => {
            log::error!("Failed to load project: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/projects/{project_id:\\d+}/review")]
/// Records an up or down vote and refreshes the project's vote tally.
pub async fn review_project(
    project_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Form<ReviewForm>,
) -> impl Responder {
    let project_id = project_id.into_inner();
    let project_url = format!("/projects/{project_id}/");

    match projects_service::submit_review(repo.get_ref(), project_id, form.into_inner()) {
        Ok(_) => {
            FlashMessage::success("Your review was successfully submitted!").send();
            redirect(&project_url)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Project not found.").send();
            redirect("/projects/")
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::Conflict(message)) => {
            FlashMessage::error(message).send();
            redirect(&project_url)
        }
        Err(err) => {
            log::error!("Failed to submit review for project {project_id}: {err}");
            FlashMessage::error("Failed to submit the review.").send();
            redirect(&project_url)
        }
    }
}

#[get("/projects/create-project/")]
pub async fn new_project(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match projects_service::load_project_form(repo.get_ref(), None) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "projects");
            context.insert("project", &data.project);
            context.insert("tags", &data.tags);
            context.insert("form_action", "/projects/create-project/");

            render_template(&tera, "projects/project-form.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load project form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/projects/create-project/")]
pub async fn create_project(repo: web::Data<DieselRepository>, form: web::Bytes) -> impl Responder {
    let result = ProjectForm::from_bytes(form.as_ref())
        .map_err(ServiceError::from)
        .and_then(|form| projects_service::create_project(repo.get_ref(), form));

    match result {
        Ok(project) => {
            FlashMessage::success("Project was added successfully!").send();
            redirect(&format!("/projects/{}/", project.id))
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::Conflict(message)) => {
            FlashMessage::error(message).send();
            redirect("/projects/create-project/")
        }
        Err(err) => {
            log::error!("Failed to create project: {err}");
            FlashMessage::error("Failed to add the project.").send();
            redirect("/projects/create-project/")
        }
    }
}

#[get("/projects/update-project/{project_id}/")]
pub async fn edit_project(
    project_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let project_id = project_id.into_inner();

    match projects_service::load_project_form(repo.get_ref(), Some(project_id)) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "projects");
            context.insert("project", &data.project);
            context.insert("tags", &data.tags);
            context.insert(
                "form_action",
                &format!("/projects/update-project/{project_id}/"),
            );

            render_template(&tera, "projects/project-form.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Project not found.").send();
            redirect("/projects/")
        }
        Err(err) => {
            log::error!("Failed to load project form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/projects/update-project/{project_id}/")]
pub async fn update_project(
    project_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Bytes,
) -> impl Responder {
    let project_id = project_id.into_inner();
    let form_url = format!("/projects/update-project/{project_id}/");

    let result = ProjectForm::from_bytes(form.as_ref())
        .map_err(ServiceError::from)
        .and_then(|form| projects_service::update_project(repo.get_ref(), project_id, form));

    match result {
        Ok(project) => {
            FlashMessage::success("Project was updated successfully!").send();
            redirect(&format!("/projects/{}/", project.id))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Project not found.").send();
            redirect("/projects/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Only the owner can edit this project.").send();
            redirect(&format!("/projects/{project_id}/"))
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::Conflict(message)) => {
            FlashMessage::error(message).send();
            redirect(&form_url)
        }
        Err(err) => {
            log::error!("Failed to update project {project_id}: {err}");
            FlashMessage::error("Failed to update the project.").send();
            redirect(&form_url)
        }
    }
}

#[post("/projects/delete-project/{project_id}/")]
pub async fn delete_project(
    project_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Form<DeleteProjectForm>,
) -> impl Responder {
    let project_id = project_id.into_inner();

    match projects_service::delete_project(repo.get_ref(), project_id, form.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Project was deleted.").send();
            redirect("/projects/")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Project not found.").send();
            redirect("/projects/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Only the owner can delete this project.").send();
            redirect(&format!("/projects/{project_id}/"))
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/projects/{project_id}/"))
        }
        Err(err) => {
            log::error!("Failed to delete project {project_id}: {err}");
            FlashMessage::error("Failed to delete the project.").send();
            redirect("/projects/")
        }
    }
}
