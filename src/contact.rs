use std::{fmt, future::Future, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

/// Raw field values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated message, ready for a [`SubmissionSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    Missing(ContactField),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A message is already being sent")]
    InFlight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Submission was interrupted")]
    Interrupted,
}

fn required(value: &str, field: ContactField) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(value.to_string())
    }
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        let name = required(&self.name, ContactField::Name)?;
        let email = required(&self.email, ContactField::Email)?;
        let message = required(&self.message, ContactField::Message)?;
        let subject = Some(self.subject.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(ContactMessage {
            name,
            email,
            subject,
            message,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
}

impl SubmissionPhase {
    /// Validates the form and moves to `Sending`.
    ///
    /// Nothing reaches a sink while another send is pending. On error the phase is unchanged.
    pub fn begin(&mut self, form: &ContactForm) -> Result<ContactMessage, SubmitError> {
        if *self == Self::Sending {
            return Err(SubmitError::InFlight);
        }
        let message = form.validate()?;
        *self = Self::Sending;
        Ok(message)
    }

    /// Settles a send: back to `Idle`, form cleared only on success.
    pub fn finish(&mut self, form: &mut ContactForm, outcome: Result<(), SinkError>) -> Notice {
        *self = Self::Idle;
        match outcome {
            Ok(()) => {
                *form = ContactForm::default();
                Notice::sent()
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                Notice::from(&err)
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        *self == Self::Sending
    }
}

/// Where validated contact messages go.
pub trait SubmissionSink {
    fn submit(&self, message: ContactMessage) -> impl Future<Output = Result<(), SinkError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Destructive,
}

/// Toast-style feedback shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: NoticeTone,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            title: "Message Sent! ✨",
            description: "Thank you for reaching out. I'll get back to you soon!",
            tone: NoticeTone::Success,
        }
    }

    pub fn missing_information() -> Self {
        Self {
            title: "Missing Information",
            description: "Please fill in all required fields.",
            tone: NoticeTone::Destructive,
        }
    }

    pub fn failed() -> Self {
        Self {
            title: "Message Not Sent",
            description: "Something went wrong. Please try again or reach out by email.",
            tone: NoticeTone::Destructive,
        }
    }
}

impl From<&SinkError> for Notice {
    fn from(_: &SinkError) -> Self {
        Self::failed()
    }
}

impl From<&ValidationError> for Notice {
    fn from(_: &ValidationError) -> Self {
        Self::missing_information()
    }
}
