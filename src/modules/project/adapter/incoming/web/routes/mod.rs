mod create_project;
mod delete_project;
mod get_projects;
mod get_single_project;
mod patch_project;

pub use create_project::{create_project_handler, CreateProjectRequest};
pub use create_project::__path_create_project_handler;
pub use delete_project::delete_project_handler;
pub use delete_project::__path_delete_project_handler;
pub use get_projects::{get_featured_projects_handler, get_projects_handler, ProjectListQuery};
pub use get_projects::__path_get_featured_projects_handler;
pub use get_projects::__path_get_projects_handler;
pub use get_single_project::get_single_project_handler;
pub use get_single_project::__path_get_single_project_handler;
pub use patch_project::{patch_project_handler, PatchProjectRequest};
pub use patch_project::__path_patch_project_handler;
