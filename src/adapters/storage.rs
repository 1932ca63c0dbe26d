use crate::domain::ports::Storage;
use crate::domain::AddressBook;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Keeps the whole book as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<AddressBook> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("📂 No saved address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_slice(&data)?;
        tracing::info!(
            "📂 Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(book)?;

        // the previous file stays intact until the new one is complete
        let temp = self.temp_path();
        fs::write(&temp, &json)?;
        fs::rename(&temp, &self.path)?;

        tracing::info!(
            "💾 Saved {} contacts ({} bytes) to {}",
            book.len(),
            json.len(),
            self.path.display()
        );
        Ok(())
    }
}
