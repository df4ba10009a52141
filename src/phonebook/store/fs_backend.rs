use super::backend::{decode_contacts, encode_contacts, StorageBackend};
use crate::error::{PhonebookError, Result};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores every contact in a single JSON file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PhonebookError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_contacts(&self) -> Result<Option<Vec<Contact>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(PhonebookError::Io)?;
        decode_contacts(&content, &self.location()).map(Some)
    }

    fn write_contacts(&self, contacts: &[Contact]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.ensure_dir(&parent)?;

        let content = encode_contacts(contacts)?;

        // Write then rename so a crash never leaves a half-written file behind
        let tmp_file = parent.join(format!(".contacts-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(PhonebookError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(PhonebookError::Io)?;

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactUpdate, NewContact};
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("contacts.json"));
        assert!(backend.read_contacts().unwrap().is_none());
    }

    #[test]
    fn write_creates_parent_directories_and_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("nested");
        let backend = FsBackend::new(nested.join("contacts.json"));

        let mut contact =
            Contact::new(1, NewContact::new("Martha", "Hudson", "(123) 456-7890")).unwrap();
        contact
            .apply_update(ContactUpdate::new().address("221 Baker St"))
            .unwrap();
        backend.write_contacts(&[contact.clone()]).unwrap();

        assert!(backend.path().exists());
        for entry in fs::read_dir(&nested).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }

        let loaded = backend.read_contacts().unwrap().unwrap();
        assert_eq!(loaded, vec![contact]);
    }

    #[test]
    fn write_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("contacts.json"));
        let first = Contact::new(1, NewContact::new("A", "A", "(123) 456-7890")).unwrap();
        let second = Contact::new(2, NewContact::new("B", "B", "(123) 456-7890")).unwrap();

        backend.write_contacts(&[first, second.clone()]).unwrap();
        backend.write_contacts(&[second.clone()]).unwrap();

        assert_eq!(backend.read_contacts().unwrap().unwrap(), vec![second]);
    }

    #[test]
    fn corrupt_file_is_a_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "[{\"id\": 1}]").unwrap();

        let backend = FsBackend::new(&path);
        assert!(matches!(
            backend.read_contacts(),
            Err(PhonebookError::Deserialization { .. })
        ));
    }
}
