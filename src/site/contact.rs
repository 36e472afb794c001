//! Contact form handling.
//!
//! Submissions are only simulated: the form is validated, a short delay
//! stands in for delivery, and the message is logged. Nothing is persisted
//! or sent anywhere.

use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// Fields posted from the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Required fields that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Invalid(Vec<FormField>),
}

impl ContactForm {
    /// Check required fields. Phone is optional.
    pub fn validate(&self) -> Result<(), Vec<FormField>> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(FormField::Name);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            invalid.push(FormField::Email);
        }
        if self.subject.trim().is_empty() {
            invalid.push(FormField::Subject);
        }
        if self.message.trim().is_empty() {
            invalid.push(FormField::Message);
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(invalid)
        }
    }
}

/// Validate and "send" a contact form after `delay`.
pub async fn submit(form: &ContactForm, delay: Duration) -> SubmissionOutcome {
    if let Err(fields) = form.validate() {
        info!("Rejected contact form: invalid {:?}", fields);
        return SubmissionOutcome::Invalid(fields);
    }

    tokio::time::sleep(delay).await;
    info!(
        "Contact message from {} <{}>: {} ({} chars)",
        form.name.trim(),
        form.email.trim(),
        form.subject.trim(),
        form.message.chars().count()
    );
    SubmissionOutcome::Sent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            subject: "Project".to_string(),
            message: "We need a website.".to_string(),
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_invalid() {
        let form = ContactForm {
            name: "  ".to_string(),
            message: "\n".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate(),
            Err(vec![FormField::Name, FormField::Message])
        );
    }

    #[test]
    fn test_email_requires_at_sign() {
        let form = ContactForm {
            email: "ada.example.com".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(vec![FormField::Email]));
    }

    #[test]
    fn test_empty_form_lists_all_required() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(vec![
                FormField::Name,
                FormField::Email,
                FormField::Subject,
                FormField::Message
            ])
        );
    }

    // ==================== Submission Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let started = tokio::time::Instant::now();
        let outcome = submit(&valid_form(), Duration::from_millis(1000)).await;

        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_invalid_returns_immediately() {
        let started = tokio::time::Instant::now();
        let outcome = submit(&ContactForm::default(), Duration::from_millis(1000)).await;

        assert!(matches!(outcome, SubmissionOutcome::Invalid(_)));
        assert!(started.elapsed() < Duration::from_millis(1000));
    }
}
