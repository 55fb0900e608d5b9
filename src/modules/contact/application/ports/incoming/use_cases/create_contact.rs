use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::outgoing::CreateContactData;
use crate::shared::validation::{email, optional_text, required_text, ValidationError};

#[derive(Debug, Clone)]
pub struct CreateContactCommand {
    data: CreateContactData,
}

impl CreateContactCommand {
    pub fn new(data: CreateContactData) -> Result<Self, ValidationError> {
        let data = CreateContactData {
            name: required_text("name", &data.name)?,
            email: email("email", &data.email)?,
            subject: optional_text(data.subject),
            message: required_text("message", &data.message)?,
        };

        Ok(Self { data })
    }

    pub fn data(&self) -> &CreateContactData {
        &self.data
    }

    pub fn into_data(self) -> CreateContactData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContactUseCase: Send + Sync {
    async fn execute(&self, command: CreateContactCommand) -> Result<Contact, CreateContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> CreateContactData {
        CreateContactData {
            name: " A ".to_string(),
            email: "a@x.com".to_string(),
            subject: Some(" ".to_string()),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_valid_message_normalized() {
        let command = CreateContactCommand::new(data()).unwrap();

        assert_eq!(command.data().name, "A");
        assert_eq!(command.data().subject, None);
    }

    #[test]
    fn test_long_name_and_subject_kept_whole() {
        let mut d = data();
        d.name = "A".repeat(400);
        d.subject = Some("S".repeat(400));

        let command = CreateContactCommand::new(d).unwrap();

        assert_eq!(command.data().name.len(), 400);
        assert_eq!(command.data().subject.as_deref().map(str::len), Some(400));
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut d = data();
        d.message = "   ".to_string();

        assert_eq!(
            CreateContactCommand::new(d).unwrap_err(),
            ValidationError::Required("message")
        );
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut d = data();
        d.email = "not-an-email".to_string();

        assert!(matches!(
            CreateContactCommand::new(d),
            Err(ValidationError::Invalid { field: "email", .. })
        ));
    }
}
