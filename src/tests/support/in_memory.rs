use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError,
    CreateContactData, PatchContactData,
};
use crate::modules::developer::application::domain::entities::Developer;
use crate::modules::developer::application::ports::outgoing::{
    CreateDeveloperData, DeveloperQuery, DeveloperQueryError, DeveloperRepository,
    DeveloperRepositoryError, PatchDeveloperData,
};
use crate::modules::project::application::domain::entities::{validate_date_range, Project};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectListFilter, ProjectQuery, ProjectQueryError,
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::patch::PatchField;

fn apply<T>(slot: &mut T, field: PatchField<T>) {
    if let PatchField::Value(v) = field {
        *slot = v;
    }
}

fn apply_nullable<T>(slot: &mut Option<T>, field: PatchField<T>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = None,
        PatchField::Value(v) => *slot = Some(v),
    }
}

/* --------------------------------------------------
 * Developer
 * -------------------------------------------------- */

/// Vec-backed developer table holding at most one row, like the unique
/// singleton index.
#[derive(Clone, Default)]
pub struct InMemoryDeveloperStore {
    rows: Arc<Mutex<Vec<Developer>>>,
}

impl InMemoryDeveloperStore {
    pub fn snapshot(&self) -> Vec<Developer> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperStore {
    async fn create_developer(
        &self,
        data: CreateDeveloperData,
    ) -> Result<Developer, DeveloperRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.is_empty() {
            return Err(DeveloperRepositoryError::ProfileAlreadyExists);
        }

        let now = Utc::now();
        let developer = Developer {
            id: Uuid::new_v4(),
            name: data.name,
            title: data.title,
            bio: data.bio,
            email: data.email,
            phone: data.phone,
            address: data.address,
            avatar: data.avatar,
            resume: data.resume,
            social_links: data.social_links,
            skills: data.skills,
            created_at: now,
            updated_at: now,
        };

        rows.push(developer.clone());
        Ok(developer)
    }

    async fn patch_developer(
        &self,
        developer_id: Uuid,
        data: PatchDeveloperData,
    ) -> Result<Developer, DeveloperRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|d| d.id == developer_id)
            .ok_or(DeveloperRepositoryError::NotFound)?;

        apply(&mut row.name, data.name);
        apply(&mut row.title, data.title);
        apply(&mut row.bio, data.bio);
        apply(&mut row.email, data.email);
        apply_nullable(&mut row.phone, data.phone);
        apply_nullable(&mut row.address, data.address);
        apply_nullable(&mut row.avatar, data.avatar);
        apply_nullable(&mut row.resume, data.resume);
        apply(&mut row.social_links, data.social_links);
        apply(&mut row.skills, data.skills);
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete_developer(&self, developer_id: Uuid) -> Result<(), DeveloperRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id != developer_id);

        if rows.len() == before {
            return Err(DeveloperRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl DeveloperQuery for InMemoryDeveloperStore {
    async fn list_developers(&self) -> Result<Vec<Developer>, DeveloperQueryError> {
        Ok(self.snapshot())
    }

    async fn find_developer(
        &self,
        developer_id: Uuid,
    ) -> Result<Option<Developer>, DeveloperQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == developer_id)
            .cloned())
    }
}

/* --------------------------------------------------
 * Projects
 * -------------------------------------------------- */

/// Vec-backed project table. Clones share rows.
#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    rows: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectStore {
    pub fn snapshot(&self) -> Vec<Project> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            long_description: data.long_description,
            featured_image: data.featured_image,
            images: data.images,
            technologies: data.technologies,
            github_url: data.github_url,
            live_url: data.live_url,
            featured: data.featured,
            start_date: data.start_date,
            end_date: data.end_date,
            order: data.order,
            created_at: now,
            updated_at: now,
        };

        self.rows.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut next = row.clone();
        apply(&mut next.title, data.title);
        apply(&mut next.description, data.description);
        apply_nullable(&mut next.long_description, data.long_description);
        apply_nullable(&mut next.featured_image, data.featured_image);
        apply(&mut next.images, data.images);
        apply(&mut next.technologies, data.technologies);
        apply_nullable(&mut next.github_url, data.github_url);
        apply_nullable(&mut next.live_url, data.live_url);
        apply(&mut next.featured, data.featured);
        apply_nullable(&mut next.start_date, data.start_date);
        apply_nullable(&mut next.end_date, data.end_date);
        apply(&mut next.order, data.order);

        validate_date_range(next.start_date, next.end_date)
            .map_err(|_| ProjectRepositoryError::InvalidDateRange)?;

        next.updated_at = Utc::now();
        *row = next.clone();
        Ok(next)
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != project_id);

        if rows.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectStore {
    async fn list_projects(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        let mut projects: Vec<Project> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.featured.map_or(true, |f| p.featured == f))
            .cloned()
            .collect();

        projects.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));
        Ok(projects)
    }

    async fn find_project(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == project_id)
            .cloned())
    }
}

/* --------------------------------------------------
 * Contacts
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct InMemoryContactStore {
    rows: Arc<Mutex<Vec<Contact>>>,
}

impl InMemoryContactStore {
    pub fn snapshot(&self) -> Vec<Contact> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactStore {
    async fn create_contact(
        &self,
        data: CreateContactData,
    ) -> Result<Contact, ContactRepositoryError> {
        let now = Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            read: false,
            archived: false,
            created_at: now,
            updated_at: now,
        };

        self.rows.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn patch_contact(
        &self,
        contact_id: Uuid,
        data: PatchContactData,
    ) -> Result<Contact, ContactRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or(ContactRepositoryError::NotFound)?;

        apply(&mut row.name, data.name);
        apply(&mut row.email, data.email);
        apply_nullable(&mut row.subject, data.subject);
        apply(&mut row.message, data.message);
        apply(&mut row.read, data.read);
        apply(&mut row.archived, data.archived);
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete_contact(&self, contact_id: Uuid) -> Result<(), ContactRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != contact_id);

        if rows.len() == before {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ContactQuery for InMemoryContactStore {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ContactQueryError> {
        let mut contacts = self.rows.lock().unwrap().clone();
        // Newest first; equal timestamps put the latest insert on top
        contacts.reverse();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contacts)
    }

    async fn find_contact(&self, contact_id: Uuid) -> Result<Option<Contact>, ContactQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == contact_id)
            .cloned())
    }
}
