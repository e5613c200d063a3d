use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::Ledger,
    utils::persistence::{load_ledger_from_file, to_json},
};

use super::{Result, StorageBackend};

const LEDGER_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-based JSON backend. One ledger per `<root>/<name>.json`, written
/// atomically via a staged temporary file.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Creates a backend rooted at `root`, or at the platform data directory
    /// when none is given.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => default_root(),
        };
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()> {
        let path = self.ledger_path(name);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let json = to_json(ledger)?;
        let tmp = tmp_path(&path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::info!(ledger = %name, path = %path.display(), "ledger saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Ledger> {
        let path = self.ledger_path(name);
        if !path.exists() {
            return Err(LedgerError::Persistence(format!(
                "ledger `{}` not found at {}",
                name,
                path.display()
            )));
        }
        load_ledger_from_file(&path)
    }

    fn ledger_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(name), LEDGER_EXTENSION))
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("finance_core")
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => String::from(TMP_SUFFIX),
    };
    tmp.set_extension(ext);
    tmp
}

fn canonical_name(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn canonical_name_flattens_unsafe_characters() {
        assert_eq!(canonical_name("My Ledger/2025"), "my_ledger_2025");
    }

    #[test]
    fn save_then_load_roundtrips() {
        let temp = tempdir().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        let ledger = Ledger::seeded("Me", &["Friend A"]);
        storage.save(&ledger, "household").unwrap();

        let loaded = storage.load("household").unwrap();
        assert_eq!(loaded.accounts, ledger.accounts);
        assert_eq!(loaded.persons, ledger.persons);
    }

    #[test]
    fn load_reports_missing_ledger() {
        let temp = tempdir().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        assert!(matches!(
            storage.load("absent"),
            Err(LedgerError::Persistence(_))
        ));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let temp = tempdir().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        storage.save(&Ledger::new(), "clean").unwrap();
        assert!(!tmp_path(&storage.ledger_path("clean")).exists());
    }
}
