use crate::model::{ContactField, ContactId, MAX_CONTACT_ID};
use thiserror::Error;

/// Rejections raised by the field validators and by `Contact` construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone number must be in the format (###) ###-####, got {0:?}")]
    InvalidPhone(String),

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("{0} cannot be empty")]
    EmptyField(ContactField),

    #[error("Contact id must be between 1 and {}", MAX_CONTACT_ID)]
    InvalidId,

    #[error("Contact {0} was updated before it was created")]
    InvertedTimestamps(ContactId),
}

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No contact found with ID {0}")]
    ContactNotFound(ContactId),

    #[error("A contact with ID {0} already exists")]
    DuplicateId(ContactId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read contacts from {location}: {reason}")]
    Deserialization { location: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
