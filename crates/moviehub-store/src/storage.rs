use anyhow::Result;

/// The localStorage contract: string keys, string payloads, whole-value
/// replacement. Reading an absent key is `None`, never an error; each write
/// replaces the entire payload atomically from the caller's point of view.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}
