use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginError, LoginRequest, LoginResponse,
};
use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, CreateContactError, CreateContactUseCase, DeleteContactError,
    DeleteContactUseCase, GetContactsError, GetContactsUseCase, GetSingleContactError,
    GetSingleContactUseCase, PatchContactCommand, PatchContactError, PatchContactUseCase,
};
use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::incoming::use_cases::{
    CreateDeveloperCommand, CreateDeveloperError, CreateDeveloperUseCase, DeleteDeveloperError,
    DeleteDeveloperUseCase, GetDevelopersError, GetDevelopersUseCase, GetSingleDeveloperError,
    GetSingleDeveloperUseCase, PatchDeveloperCommand, PatchDeveloperError, PatchDeveloperUseCase,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
    GetSingleProjectUseCase, PatchProjectCommand, PatchProjectError, PatchProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectListFilter;

// Fillers for the use cases a handler test does not exercise. Reads answer
// with an empty result; writes panic so an unexpected call fails the test.

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

/* --------------------------------------------------
 * Developer
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateDeveloperUseCase;

#[async_trait]
impl CreateDeveloperUseCase for StubCreateDeveloperUseCase {
    async fn execute(
        &self,
        _command: CreateDeveloperCommand,
    ) -> Result<Developer, CreateDeveloperError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetDevelopersUseCase;

#[async_trait]
impl GetDevelopersUseCase for StubGetDevelopersUseCase {
    async fn execute(&self) -> Result<Vec<Developer>, GetDevelopersError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleDeveloperUseCase;

#[async_trait]
impl GetSingleDeveloperUseCase for StubGetSingleDeveloperUseCase {
    async fn execute(&self, _developer_id: Uuid) -> Result<Developer, GetSingleDeveloperError> {
        Err(GetSingleDeveloperError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubPatchDeveloperUseCase;

#[async_trait]
impl PatchDeveloperUseCase for StubPatchDeveloperUseCase {
    async fn execute(
        &self,
        _developer_id: Uuid,
        _command: PatchDeveloperCommand,
    ) -> Result<Developer, PatchDeveloperError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteDeveloperUseCase;

#[async_trait]
impl DeleteDeveloperUseCase for StubDeleteDeveloperUseCase {
    async fn execute(&self, _developer_id: Uuid) -> Result<(), DeleteDeveloperError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self, _filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<Project, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubPatchProjectUseCase;

#[async_trait]
impl PatchProjectUseCase for StubPatchProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _command: PatchProjectCommand,
    ) -> Result<Project, PatchProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateContactUseCase;

#[async_trait]
impl CreateContactUseCase for StubCreateContactUseCase {
    async fn execute(&self, _command: CreateContactCommand) -> Result<Contact, CreateContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetContactsUseCase;

#[async_trait]
impl GetContactsUseCase for StubGetContactsUseCase {
    async fn execute(&self) -> Result<Vec<Contact>, GetContactsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleContactUseCase;

#[async_trait]
impl GetSingleContactUseCase for StubGetSingleContactUseCase {
    async fn execute(&self, _contact_id: Uuid) -> Result<Contact, GetSingleContactError> {
        Err(GetSingleContactError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubPatchContactUseCase;

#[async_trait]
impl PatchContactUseCase for StubPatchContactUseCase {
    async fn execute(
        &self,
        _contact_id: Uuid,
        _command: PatchContactCommand,
    ) -> Result<Contact, PatchContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteContactUseCase;

#[async_trait]
impl DeleteContactUseCase for StubDeleteContactUseCase {
    async fn execute(&self, _contact_id: Uuid) -> Result<(), DeleteContactError> {
        unimplemented!("Not used in this test")
    }
}
