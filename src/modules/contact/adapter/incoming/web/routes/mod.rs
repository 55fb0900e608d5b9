mod create_contact;
mod delete_contact;
mod get_contacts;
mod get_single_contact;
mod patch_contact;

pub use create_contact::{create_contact_handler, CreateContactRequest};
pub use create_contact::__path_create_contact_handler;
pub use delete_contact::delete_contact_handler;
pub use delete_contact::__path_delete_contact_handler;
pub use get_contacts::get_contacts_handler;
pub use get_contacts::__path_get_contacts_handler;
pub use get_single_contact::get_single_contact_handler;
pub use get_single_contact::__path_get_single_contact_handler;
pub use patch_contact::{patch_contact_handler, PatchContactRequest};
pub use patch_contact::__path_patch_contact_handler;
