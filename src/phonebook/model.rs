use crate::error::ValidationError;
use crate::validation::{
    normalize_optional, validate_name, validate_optional_email, validate_phone,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub type ContactId = u64;

/// Largest id a contact may carry. The store's counter always holds
/// `max id + 1`, so the top of the integer range stays free for it.
pub const MAX_CONTACT_ID: ContactId = ContactId::MAX - 1;

fn check_id(id: ContactId) -> Result<(), ValidationError> {
    if (1..=MAX_CONTACT_ID).contains(&id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidId)
    }
}

/// The user-editable fields of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
    EmailAddress,
    Address,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::PhoneNumber,
        ContactField::EmailAddress,
        ContactField::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::PhoneNumber => "phone_number",
            ContactField::EmailAddress => "email_address",
            ContactField::Address => "address",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        ContactField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| format!("Unknown contact field: {}", s))
    }
}

/// One audit entry: a single field changing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub timestamp: DateTime<Utc>,
    pub field: ContactField,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Field values for a contact that does not have an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: Option<String>,
    pub address: Option<String>,
}

impl NewContact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email_address: None,
            address: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email_address = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A partial update: only the fields that are `Some` change.
///
/// The optional contact fields use a nested `Option` so that an update can
/// distinguish "leave alone" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<Option<String>>,
    pub address: Option<Option<String>>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn email_address(mut self, value: impl Into<String>) -> Self {
        self.email_address = Some(Some(value.into()));
        self
    }

    pub fn clear_email_address(mut self) -> Self {
        self.email_address = Some(None);
        self
    }

    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(Some(value.into()));
        self
    }

    pub fn clear_address(mut self) -> Self {
        self.address = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// The fields this update touches, in application order.
    pub fn fields(&self) -> Vec<ContactField> {
        let mut fields = Vec::new();
        if self.first_name.is_some() {
            fields.push(ContactField::FirstName);
        }
        if self.last_name.is_some() {
            fields.push(ContactField::LastName);
        }
        if self.phone_number.is_some() {
            fields.push(ContactField::PhoneNumber);
        }
        if self.email_address.is_some() {
            fields.push(ContactField::EmailAddress);
        }
        if self.address.is_some() {
            fields.push(ContactField::Address);
        }
        fields
    }

    /// Validates every supplied value, normalizing blank optional text to a clear.
    fn validated(self) -> Result<Self, ValidationError> {
        if let Some(name) = &self.first_name {
            validate_name(ContactField::FirstName, name)?;
        }
        if let Some(name) = &self.last_name {
            validate_name(ContactField::LastName, name)?;
        }
        if let Some(phone) = &self.phone_number {
            validate_phone(phone)?;
        }
        let email_address = match self.email_address {
            Some(email) => Some(validate_optional_email(email)?),
            None => None,
        };
        Ok(Self {
            email_address,
            address: self.address.map(normalize_optional),
            ..self
        })
    }
}

/// A stored contact.
///
/// Fields are private so the validation and history invariants cannot be
/// bypassed: every post-creation change goes through [`Contact::apply_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord")]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone_number: String,
    email_address: Option<String>,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    history: Vec<ChangeRecord>,
}

impl Contact {
    pub fn new(id: ContactId, fields: NewContact) -> Result<Self, ValidationError> {
        check_id(id)?;
        validate_name(ContactField::FirstName, &fields.first_name)?;
        validate_name(ContactField::LastName, &fields.last_name)?;
        validate_phone(&fields.phone_number)?;
        let email_address = validate_optional_email(fields.email_address)?;

        let now = Utc::now();
        Ok(Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone_number: fields.phone_number,
            email_address,
            address: normalize_optional(fields.address),
            created_at: now,
            updated_at: now,
            history: Vec::new(),
        })
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ContactId) {
        self.id = id;
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn history(&self) -> &[ChangeRecord] {
        &self.history
    }

    pub fn field_value(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FirstName => Some(&self.first_name),
            ContactField::LastName => Some(&self.last_name),
            ContactField::PhoneNumber => Some(&self.phone_number),
            ContactField::EmailAddress => self.email_address(),
            ContactField::Address => self.address(),
        }
    }

    /// Applies every field present in `update` and returns the history records
    /// appended for them.
    ///
    /// All supplied values are validated before anything is assigned, so a
    /// rejected update leaves the contact untouched. An empty update is a no-op,
    /// `updated_at` included.
    pub fn apply_update(
        &mut self,
        update: ContactUpdate,
    ) -> Result<Vec<ChangeRecord>, ValidationError> {
        let update = update.validated()?;
        let mut changes = Vec::new();

        if let Some(value) = update.first_name {
            changes.push(self.set_first_name(value));
        }
        if let Some(value) = update.last_name {
            changes.push(self.set_last_name(value));
        }
        if let Some(value) = update.phone_number {
            changes.push(self.set_phone_number(value));
        }
        if let Some(value) = update.email_address {
            changes.push(self.set_email_address(value));
        }
        if let Some(value) = update.address {
            changes.push(self.set_address(value));
        }

        Ok(changes)
    }

    fn set_first_name(&mut self, value: String) -> ChangeRecord {
        let old = std::mem::replace(&mut self.first_name, value.clone());
        self.record_change(ContactField::FirstName, Some(old), Some(value))
    }

    fn set_last_name(&mut self, value: String) -> ChangeRecord {
        let old = std::mem::replace(&mut self.last_name, value.clone());
        self.record_change(ContactField::LastName, Some(old), Some(value))
    }

    fn set_phone_number(&mut self, value: String) -> ChangeRecord {
        let old = std::mem::replace(&mut self.phone_number, value.clone());
        self.record_change(ContactField::PhoneNumber, Some(old), Some(value))
    }

    fn set_email_address(&mut self, value: Option<String>) -> ChangeRecord {
        let old = std::mem::replace(&mut self.email_address, value.clone());
        self.record_change(ContactField::EmailAddress, old, value)
    }

    fn set_address(&mut self, value: Option<String>) -> ChangeRecord {
        let old = std::mem::replace(&mut self.address, value.clone());
        self.record_change(ContactField::Address, old, value)
    }

    fn record_change(
        &mut self,
        field: ContactField,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> ChangeRecord {
        // Never let the clock step backwards past the previous change.
        let timestamp = Utc::now().max(self.updated_at);
        self.updated_at = timestamp;
        let record = ChangeRecord {
            timestamp,
            field,
            old_value,
            new_value,
        };
        self.history.push(record.clone());
        record
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Wire shape of a persisted contact, validated on its way into a [`Contact`].
#[derive(Deserialize)]
struct ContactRecord {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone_number: String,
    #[serde(default)]
    email_address: Option<String>,
    #[serde(default)]
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    history: Vec<ChangeRecord>,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        check_id(record.id)?;
        if record.updated_at < record.created_at {
            return Err(ValidationError::InvertedTimestamps(record.id));
        }
        validate_name(ContactField::FirstName, &record.first_name)?;
        validate_name(ContactField::LastName, &record.last_name)?;
        validate_phone(&record.phone_number)?;
        let email_address = validate_optional_email(record.email_address)?;

        Ok(Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            phone_number: record.phone_number,
            email_address,
            address: normalize_optional(record.address),
            created_at: record.created_at,
            updated_at: record.updated_at,
            history: record.history,
        })
    }
}

/// Keys a contact list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    FirstName,
    #[default]
    LastName,
    PhoneNumber,
    EmailAddress,
    Address,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Id,
        SortField::FirstName,
        SortField::LastName,
        SortField::PhoneNumber,
        SortField::EmailAddress,
        SortField::Address,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::PhoneNumber => "phone_number",
            SortField::EmailAddress => "email_address",
            SortField::Address => "address",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }

    /// Natural ascending order of the field's value; absent values sort first.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::FirstName => a.first_name.cmp(&b.first_name),
            SortField::LastName => a.last_name.cmp(&b.last_name),
            SortField::PhoneNumber => a.phone_number.cmp(&b.phone_number),
            SortField::EmailAddress => a.email_address.cmp(&b.email_address),
            SortField::Address => a.address.cmp(&b.address),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| format!("Unknown sort field: {}", s))
    }
}
