use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactUseCase, DeleteContactUseCase, GetContactsUseCase, GetSingleContactUseCase,
    PatchContactUseCase,
};
use crate::modules::developer::application::developer_use_cases::DeveloperUseCases;
use crate::modules::developer::application::ports::incoming::use_cases::{
    CreateDeveloperUseCase, DeleteDeveloperUseCase, GetDevelopersUseCase,
    GetSingleDeveloperUseCase, PatchDeveloperUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    PatchProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds `AppState` for handler tests. Every slot starts with a stub; tests
/// swap in the use case they exercise.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    developer: DeveloperUseCases,
    project: ProjectUseCases,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdminUseCase),
            developer: DeveloperUseCases {
                create: Arc::new(StubCreateDeveloperUseCase),
                get_list: Arc::new(StubGetDevelopersUseCase),
                get_single: Arc::new(StubGetSingleDeveloperUseCase),
                patch: Arc::new(StubPatchDeveloperUseCase),
                delete: Arc::new(StubDeleteDeveloperUseCase),
            },
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                patch: Arc::new(StubPatchProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            contact: ContactUseCases {
                create: Arc::new(StubCreateContactUseCase),
                get_list: Arc::new(StubGetContactsUseCase),
                get_single: Arc::new(StubGetSingleContactUseCase),
                patch: Arc::new(StubPatchContactUseCase),
                delete: Arc::new(StubDeleteContactUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(
        mut self,
        uc: impl ILoginAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    // Developer

    pub fn with_developer_use_cases(mut self, use_cases: DeveloperUseCases) -> Self {
        self.developer = use_cases;
        self
    }

    pub fn with_create_developer(
        mut self,
        uc: impl CreateDeveloperUseCase + Send + Sync + 'static,
    ) -> Self {
        self.developer.create = Arc::new(uc);
        self
    }

    pub fn with_get_developers(
        mut self,
        uc: impl GetDevelopersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.developer.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_developer(
        mut self,
        uc: impl GetSingleDeveloperUseCase + Send + Sync + 'static,
    ) -> Self {
        self.developer.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_developer(
        mut self,
        uc: impl PatchDeveloperUseCase + Send + Sync + 'static,
    ) -> Self {
        self.developer.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_developer(
        mut self,
        uc: impl DeleteDeveloperUseCase + Send + Sync + 'static,
    ) -> Self {
        self.developer.delete = Arc::new(uc);
        self
    }

    // Project

    pub fn with_project_use_cases(mut self, use_cases: ProjectUseCases) -> Self {
        self.project = use_cases;
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_project(
        mut self,
        uc: impl PatchProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // Contact

    pub fn with_contact_use_cases(mut self, use_cases: ContactUseCases) -> Self {
        self.contact = use_cases;
        self
    }

    pub fn with_create_contact(
        mut self,
        uc: impl CreateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.create = Arc::new(uc);
        self
    }

    pub fn with_get_contacts(mut self, uc: impl GetContactsUseCase + Send + Sync + 'static) -> Self {
        self.contact.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_contact(
        mut self,
        uc: impl GetSingleContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_contact(
        mut self,
        uc: impl PatchContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_contact(
        mut self,
        uc: impl DeleteContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            developer: self.developer,
            project: self.project,
            contact: self.contact,
        })
    }
}
