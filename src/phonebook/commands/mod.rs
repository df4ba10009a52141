use crate::config::PhonebookConfig;
use crate::model::{ChangeRecord, Contact};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod filter;
pub mod group;
pub mod history;
pub mod import;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Contacts sharing the same last-name initial.
#[derive(Debug, Clone)]
pub struct ContactGroup {
    pub initial: char,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts created, changed or removed by the command
    pub affected_contacts: Vec<Contact>,
    /// Contacts to show, in display order
    pub listed_contacts: Vec<Contact>,
    pub groups: Vec<ContactGroup>,
    pub history: Vec<ChangeRecord>,
    pub config: Option<PhonebookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_groups(mut self, groups: Vec<ContactGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_history(mut self, history: Vec<ChangeRecord>) -> Self {
        self.history = history;
        self
    }

    pub fn with_config(mut self, config: PhonebookConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command changed the collection and it should be persisted.
    pub fn is_mutation(&self) -> bool {
        !self.affected_contacts.is_empty()
    }
}

pub(crate) fn not_found(id: crate::model::ContactId) -> CmdMessage {
    CmdMessage::warning(format!("No contact found with ID {}", id))
}
