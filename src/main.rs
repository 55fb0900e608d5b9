pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, contact, developer, project};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::admin_config::AdminConfig;
use crate::auth::adapter::outgoing::configured_credential_store::ConfiguredCredentialStore;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, FormatAwareHasher};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::config::{load_env_files, ServerConfig};
use crate::contact::adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::service::{
    CreateContactService, DeleteContactService, GetContactsService, GetSingleContactService,
    PatchContactService,
};
use crate::developer::adapter::outgoing::{DeveloperQueryPostgres, DeveloperRepositoryPostgres};
use crate::developer::application::developer_use_cases::DeveloperUseCases;
use crate::developer::application::service::{
    CreateDeveloperService, DeleteDeveloperService, GetDevelopersService,
    GetSingleDeveloperService, PatchDeveloperService,
};
use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    PatchProjectService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub developer: DeveloperUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
}

impl AppState {
    fn from_connection(
        db: Arc<DatabaseConnection>,
        login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    ) -> Self {
        let developer_repo = DeveloperRepositoryPostgres::new(Arc::clone(&db));
        let developer_query = DeveloperQueryPostgres::new(Arc::clone(&db));
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
        let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
        let contact_query = ContactQueryPostgres::new(db);

        Self {
            login_admin_use_case,
            developer: DeveloperUseCases {
                create: Arc::new(CreateDeveloperService::new(developer_repo.clone())),
                get_list: Arc::new(GetDevelopersService::new(developer_query.clone())),
                get_single: Arc::new(GetSingleDeveloperService::new(developer_query)),
                patch: Arc::new(PatchDeveloperService::new(developer_repo.clone())),
                delete: Arc::new(DeleteDeveloperService::new(developer_repo)),
            },
            project: ProjectUseCases {
                create: Arc::new(CreateProjectService::new(project_repo.clone())),
                get_list: Arc::new(GetProjectsService::new(project_query.clone())),
                get_single: Arc::new(GetSingleProjectService::new(project_query)),
                patch: Arc::new(PatchProjectService::new(project_repo.clone())),
                delete: Arc::new(DeleteProjectService::new(project_repo)),
            },
            contact: ContactUseCases {
                create: Arc::new(CreateContactService::new(contact_repo.clone())),
                get_list: Arc::new(GetContactsService::new(contact_query.clone())),
                get_single: Arc::new(GetSingleContactService::new(contact_query)),
                patch: Arc::new(PatchContactService::new(contact_repo.clone())),
                delete: Arc::new(DeleteContactService::new(contact_repo)),
            },
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = load_env_files();
    info!(%environment, "Starting portfolio API");

    let server_config = ServerConfig::from_env(environment).context("server configuration")?;
    let jwt_config = JwtConfig::from_env().context("JWT configuration")?;
    let admin_config = AdminConfig::from_env().context("admin configuration")?;
    let argon2 = Argon2Hasher::from_env().context("argon2 configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(server_config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if server_config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Admin credential is resolved once; login only verifies against it
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(FormatAwareHasher::new(argon2));
    let credential = admin_config
        .into_credential(password_hasher.as_ref())
        .await
        .context("failed to prepare admin credential")?;
    info!(admin = %credential.principal.email, "Admin credential loaded");

    let jwt_service = JwtTokenService::new(jwt_config);
    let login_admin_use_case = LoginAdminUseCase::new(
        ConfiguredCredentialStore::new(credential),
        password_hasher,
        Arc::new(jwt_service.clone()),
    );

    let state = AppState::from_connection(Arc::clone(&db_arc), Arc::new(login_admin_use_case));
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    if server_config.cors_allowed_origins.is_empty() && server_config.is_production() {
        warn!("CORS_ALLOWED_ORIGINS is empty; cross-origin requests will be rejected");
    }

    let bind_address = server_config.bind_address();
    info!(%bind_address, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&server_config))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_cors(config: &ServerConfig) -> Cors {
    if config.cors_allowed_origins.is_empty() {
        return if config.is_production() {
            Cors::default()
        } else {
            Cors::permissive()
        };
    }

    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_admin_handler);
    // Developer
    cfg.service(crate::developer::adapter::incoming::web::routes::get_developers_handler);
    cfg.service(crate::developer::adapter::incoming::web::routes::get_single_developer_handler);
    cfg.service(crate::developer::adapter::incoming::web::routes::create_developer_handler);
    cfg.service(crate::developer::adapter::incoming::web::routes::patch_developer_handler);
    cfg.service(crate::developer::adapter::incoming::web::routes::delete_developer_handler);
    // Projects: the static /projects/featured must precede /projects/{id}
    cfg.service(crate::project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::patch_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Contacts
    cfg.service(crate::contact::adapter::incoming::web::routes::create_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contacts_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_single_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::patch_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
