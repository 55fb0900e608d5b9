use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactUseCase, DeleteContactUseCase, GetContactsUseCase, GetSingleContactUseCase,
    PatchContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub create: Arc<dyn CreateContactUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetContactsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleContactUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchContactUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactUseCase + Send + Sync>,
}
