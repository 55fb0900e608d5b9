use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::auth::application::domain::entities::{AdminPrincipal, Role};
use crate::auth::application::use_cases::login_admin::{LoginResponse, LoginUser};
use crate::contact::adapter::incoming::web::routes::{CreateContactRequest, PatchContactRequest};
use crate::contact::application::domain::entities::Contact;
use crate::developer::adapter::incoming::web::routes::{
    CreateDeveloperRequest, PatchDeveloperRequest,
};
use crate::developer::application::domain::entities::{Developer, Skill, SocialLink};
use crate::project::adapter::incoming::web::routes::{CreateProjectRequest, PatchProjectRequest};
use crate::project::application::domain::entities::{Project, ProjectImage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Developer profile, projects and contact inbox for a personal portfolio site"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::current_admin_handler,

        // Developer endpoints
        crate::developer::adapter::incoming::web::routes::create_developer_handler,
        crate::developer::adapter::incoming::web::routes::get_developers_handler,
        crate::developer::adapter::incoming::web::routes::get_single_developer_handler,
        crate::developer::adapter::incoming::web::routes::patch_developer_handler,
        crate::developer::adapter::incoming::web::routes::delete_developer_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::project::adapter::incoming::web::routes::patch_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::create_contact_handler,
        crate::contact::adapter::incoming::web::routes::get_contacts_handler,
        crate::contact::adapter::incoming::web::routes::get_single_contact_handler,
        crate::contact::adapter::incoming::web::routes::patch_contact_handler,
        crate::contact::adapter::incoming::web::routes::delete_contact_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth
            LoginRequestDto,
            LoginResponse,
            LoginUser,
            AdminPrincipal,
            Role,

            // Developer
            Developer,
            SocialLink,
            Skill,
            CreateDeveloperRequest,
            PatchDeveloperRequest,

            // Project
            Project,
            ProjectImage,
            CreateProjectRequest,
            PatchProjectRequest,

            // Contact
            Contact,
            CreateContactRequest,
            PatchContactRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin login and token check"),
        (name = "developer", description = "Portfolio owner profile"),
        (name = "projects", description = "Portfolio projects"),
        (name = "contacts", description = "Contact form inbox"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from POST /auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/auth/login",
            "/auth/me",
            "/developer",
            "/developer/{developer_id}",
            "/projects",
            "/projects/featured",
            "/projects/{project_id}",
            "/contacts",
            "/contacts/{contact_id}",
        ] {
            assert!(paths.contains_key(path), "missing path {}", path);
        }

        let schemes = &doc.components.as_ref().unwrap().security_schemes;
        assert!(schemes.contains_key("BearerAuth"));
    }
}
