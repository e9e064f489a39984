use serde::{de::Error as _, Deserialize};
use serde_json::Value;

use super::{ContactEmail, ContactMessage, ContactName};

/// Body of a contact form submission as it arrives on the wire.
/// Absent fields and explicit `null`s are both treated as missing.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Parses a raw request body.
    ///
    /// Only a JSON object maps onto the form fields. Any other non-null JSON
    /// value (array, string, number, boolean) yields a form with every field
    /// missing. Invalid JSON, `null`, and fields that are not strings are
    /// parse errors.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => Self::deserialize(object),
            Value::Null => Err(serde_json::Error::custom("body is null")),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("All fields are required")]
    MissingField,
    #[error("Invalid email address")]
    InvalidEmail,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = SubmissionError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = form.name.and_then(|n| ContactName::parse(n).ok());
        let message = form.message.and_then(|m| ContactMessage::parse(m).ok());
        let email = form.email.filter(|e| !e.is_empty());

        // Every field is checked for presence before the email shape is looked at.
        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(SubmissionError::MissingField);
        };
        let email = ContactEmail::parse(email).map_err(|_| SubmissionError::InvalidEmail)?;

        Ok(Self {
            name,
            email,
            message,
        })
    }
}
