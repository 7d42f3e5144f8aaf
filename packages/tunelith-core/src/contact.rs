//! Contact form submission handling.

use crate::record::MessageRecord;
use crate::store::MessageStore;
use crate::Result;
use serde::Deserialize;

/// Reasons a submission is rejected before anything is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field was empty after trimming
    #[error("Tous les champs sont obligatoires")]
    MissingFields,

    /// The email lacks an `@` or a `.`
    #[error("Adresse email invalide")]
    InvalidEmail,
}

/// Raw contact form fields as received from a request.
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A submission that passed validation, with whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Trim and check the fields.
    pub fn validate(&self) -> std::result::Result<ValidSubmission, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if !email.contains('@') || !email.contains('.') {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(ValidSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl ValidSubmission {
    /// Stamp the submission with the current time.
    pub fn into_record(self) -> MessageRecord {
        MessageRecord::new(&self.name, &self.email, &self.message)
    }
}

/// Validate a submission and persist it.
///
/// Returns the stored record. Nothing is written when validation fails.
pub fn submit<S>(store: &S, submission: ContactSubmission) -> Result<MessageRecord>
where
    S: MessageStore + ?Sized,
{
    let record = submission.validate()?.into_record();
    let outcome = store.append(&record)?;

    tracing::info!(
        "New message from {} <{}> (json synced: {})",
        record.name,
        record.email,
        outcome.json_synced
    );

    Ok(record)
}
