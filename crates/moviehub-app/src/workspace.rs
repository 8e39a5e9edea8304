use std::path::{Path, PathBuf};

use moviehub_store::{FileStorage, Storage, load_collection, save_collection};
use moviehub_types::{FaqEntry, NoticeEntry, QnaEntry};

use crate::config::Config;
use crate::{Result, keys, seed};

/// Everything a command needs: the data directory, the key/value store
/// rooted in it, and the loaded configuration.
pub struct Workspace {
    data_dir: PathBuf,
    storage: FileStorage,
    config: Config,
}

/// What `init` found or created, for reporting back to the user.
#[derive(Debug, Clone)]
pub struct InitReport {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_created: bool,
    pub seeded_notices: usize,
    pub seeded_faqs: usize,
    pub seeded_questions: usize,
}

impl Workspace {
    /// Open a workspace at the given data directory, loading config.toml
    /// (defaults if absent). Does not create anything on disk.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&data_dir.join("config.toml"))?;
        let storage = FileStorage::new(&data_dir);
        Ok(Self {
            data_dir,
            storage,
            config,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn storage(&self) -> &dyn Storage {
        &self.storage
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// First-run setup: create the data directory, write a default
    /// config.toml if missing, and seed each empty board collection.
    pub fn init(&self) -> Result<InitReport> {
        std::fs::create_dir_all(&self.data_dir)?;

        let config_path = self.config_path();
        let config_created = !config_path.exists();
        if config_created {
            self.config.save_to(&config_path)?;
        }

        let seeded_notices = self.seed_if_empty(keys::NOTICES, seed::default_notices())?;
        let seeded_faqs = self.seed_if_empty(keys::FAQS, seed::default_faqs())?;
        let seeded_questions = self.seed_if_empty(keys::QUESTIONS, seed::default_questions())?;

        Ok(InitReport {
            data_dir: self.data_dir.clone(),
            config_path,
            config_created,
            seeded_notices,
            seeded_faqs,
            seeded_questions,
        })
    }

    fn seed_if_empty<T>(&self, key: &str, defaults: Vec<T>) -> Result<usize>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        let existing: Vec<T> = load_collection(self.storage(), key)?;
        if !existing.is_empty() {
            return Ok(0);
        }
        save_collection(self.storage(), key, &defaults)?;
        Ok(defaults.len())
    }

    /// Board loaders used by the list commands. Each seeds its collection
    /// on first touch so a missing `init` never means an empty board.
    pub fn notices(&self) -> Result<Vec<NoticeEntry>> {
        self.load_board(keys::NOTICES, seed::default_notices)
    }

    pub fn faqs(&self) -> Result<Vec<FaqEntry>> {
        self.load_board(keys::FAQS, seed::default_faqs)
    }

    pub fn questions(&self) -> Result<Vec<QnaEntry>> {
        self.load_board(keys::QUESTIONS, seed::default_questions)
    }

    fn load_board<T>(&self, key: &str, defaults: fn() -> Vec<T>) -> Result<Vec<T>>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        let existing: Vec<T> = load_collection(self.storage(), key)?;
        if !existing.is_empty() {
            return Ok(existing);
        }
        let seeded = defaults();
        save_collection(self.storage(), key, &seeded)?;
        Ok(seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config_and_seeds() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path().join("data")).unwrap();

        let report = ws.init().unwrap();
        assert!(report.config_created);
        assert!(report.config_path.exists());
        assert_eq!(report.seeded_notices, seed::default_notices().len());
        assert_eq!(report.seeded_faqs, seed::default_faqs().len());
        assert_eq!(report.seeded_questions, seed::default_questions().len());
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path().join("data")).unwrap();

        ws.init().unwrap();
        let second = ws.init().unwrap();
        assert!(!second.config_created);
        assert_eq!(second.seeded_notices, 0);
        assert_eq!(second.seeded_faqs, 0);
        assert_eq!(second.seeded_questions, 0);
    }

    #[test]
    fn test_boards_seed_on_first_touch() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        // no init call; loading still yields the defaults and persists them
        let notices = ws.notices().unwrap();
        assert!(!notices.is_empty());
        assert!(dir.path().join("notices.json").exists());
    }
}
