use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;
use crate::shared::validation::{ValidationErrors, Validator};

//
// ──────────────────────────────────────────────────────────
// Submit Contact Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl SubmitContactCommand {
    pub fn new(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<Self, ValidationErrors> {
        Validator::new()
            .length("name", &name, 1, Some(100))
            .email("email", &email)
            .length("subject", &subject, 1, Some(200))
            .length("message", &message, 1, Some(2000))
            .finish()?;

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<SubmitContactCommand, ValidationErrors> {
        SubmitContactCommand::new(
            name.to_string(),
            email.to_string(),
            subject.to_string(),
            message.to_string(),
        )
    }

    #[test]
    fn valid_command_keeps_values() {
        let cmd = command("Jane", "jane@example.com", "Hello", "Nice site").unwrap();
        assert_eq!(cmd.name(), "Jane");
        assert_eq!(cmd.email(), "jane@example.com");
        assert_eq!(cmd.subject(), "Hello");
        assert_eq!(cmd.message(), "Nice site");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let errors = command("Jane", "not-an-email", "Hello", "Hi").unwrap_err();
        assert!(errors.has_field("email"));
        assert_eq!(errors.fields().len(), 1);
    }

    #[test]
    fn length_limits_are_enforced() {
        let errors = command(
            &"n".repeat(101),
            "jane@example.com",
            &"s".repeat(201),
            &"m".repeat(2001),
        )
        .unwrap_err();

        assert!(errors.has_field("name"));
        assert!(errors.has_field("subject"));
        assert!(errors.has_field("message"));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let errors = command("", "jane@example.com", "", "").unwrap_err();
        assert_eq!(errors.fields().len(), 3);
    }

    #[test]
    fn upper_bounds_are_accepted() {
        assert!(command(
            &"n".repeat(100),
            "jane@example.com",
            &"s".repeat(200),
            &"m".repeat(2000),
        )
        .is_ok());
    }
}
