use std::sync::Arc;

use crate::modules::developer::application::ports::incoming::use_cases::{
    CreateDeveloperUseCase, DeleteDeveloperUseCase, GetDevelopersUseCase,
    GetSingleDeveloperUseCase, PatchDeveloperUseCase,
};

#[derive(Clone)]
pub struct DeveloperUseCases {
    pub create: Arc<dyn CreateDeveloperUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetDevelopersUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleDeveloperUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchDeveloperUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteDeveloperUseCase + Send + Sync>,
}
