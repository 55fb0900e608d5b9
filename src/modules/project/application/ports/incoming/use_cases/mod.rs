mod create_project;
mod delete_project;
mod get_projects;
mod get_single_project;
mod patch_project;

pub use create_project::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use patch_project::{PatchProjectCommand, PatchProjectError, PatchProjectUseCase};
