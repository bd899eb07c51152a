//! devsearch: a developer directory with searchable profiles and projects.
//!
//! The `data` feature exposes the keyword filter, the paginator and the
//! persistence layer; `server` adds the Actix-web application on top.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(all(test, feature = "data"))]
mod fixtures;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod listing;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod params;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod search;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::api::api_v1_projects;
    use crate::routes::profiles::{show_profile, show_profiles};
    use crate::routes::projects::{
        create_project, delete_project, edit_project, new_project, review_project, show_project,
        show_projects, update_project,
    };

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid secret key: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        let static_dir = server_config.static_dir.clone();

        log::info!("Starting devsearch on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/static", &static_dir))
                .service(web::scope("/api").service(api_v1_projects))
                .service(show_profiles)
                .service(show_profile)
                .service(show_projects)
                .service(new_project)
                .service(create_project)
                .service(edit_project)
                .service(update_project)
                .service(delete_project)
                .service(show_project)
                .service(review_project)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
