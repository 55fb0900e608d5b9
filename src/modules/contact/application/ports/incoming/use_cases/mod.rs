mod create_contact;
mod delete_contact;
mod get_contacts;
mod get_single_contact;
mod patch_contact;

pub use create_contact::{CreateContactCommand, CreateContactError, CreateContactUseCase};
pub use delete_contact::{DeleteContactError, DeleteContactUseCase};
pub use get_contacts::{GetContactsError, GetContactsUseCase};
pub use get_single_contact::{GetSingleContactError, GetSingleContactUseCase};
pub use patch_contact::{PatchContactCommand, PatchContactError, PatchContactUseCase};
