mod create_developer_service;
mod delete_developer_service;
mod get_developers_service;
mod get_single_developer_service;
mod patch_developer_service;

pub use create_developer_service::CreateDeveloperService;
pub use delete_developer_service::DeleteDeveloperService;
pub use get_developers_service::GetDevelopersService;
pub use get_single_developer_service::GetSingleDeveloperService;
pub use patch_developer_service::PatchDeveloperService;
