mod create_contact_service;
mod delete_contact_service;
mod get_contacts_service;
mod get_single_contact_service;
mod patch_contact_service;

pub use create_contact_service::CreateContactService;
pub use delete_contact_service::DeleteContactService;
pub use get_contacts_service::GetContactsService;
pub use get_single_contact_service::GetSingleContactService;
pub use patch_contact_service::PatchContactService;
