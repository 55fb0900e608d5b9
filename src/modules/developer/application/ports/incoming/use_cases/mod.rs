mod create_developer;
mod delete_developer;
mod get_developers;
mod get_single_developer;
mod patch_developer;

pub use create_developer::{CreateDeveloperCommand, CreateDeveloperError, CreateDeveloperUseCase};
pub use delete_developer::{DeleteDeveloperError, DeleteDeveloperUseCase};
pub use get_developers::{GetDevelopersError, GetDevelopersUseCase};
pub use get_single_developer::{GetSingleDeveloperError, GetSingleDeveloperUseCase};
pub use patch_developer::{PatchDeveloperCommand, PatchDeveloperError, PatchDeveloperUseCase};
