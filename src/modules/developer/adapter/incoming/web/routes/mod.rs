mod create_developer;
mod delete_developer;
mod get_developers;
mod get_single_developer;
mod patch_developer;

pub use create_developer::{create_developer_handler, CreateDeveloperRequest};
pub use create_developer::__path_create_developer_handler;
pub use delete_developer::delete_developer_handler;
pub use delete_developer::__path_delete_developer_handler;
pub use get_developers::get_developers_handler;
pub use get_developers::__path_get_developers_handler;
pub use get_single_developer::get_single_developer_handler;
pub use get_single_developer::__path_get_single_developer_handler;
pub use patch_developer::{patch_developer_handler, PatchDeveloperRequest};
pub use patch_developer::__path_patch_developer_handler;
