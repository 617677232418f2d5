use super::StateStore;
use crate::error::{MarketError, Result};
use crate::filter::SelectionState;
use crate::model::{Cart, Order};
use crate::session::Session;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session.json";
const SELECTION_FILE: &str = "selection.json";
const CART_FILE: &str = "cart.json";
const ORDERS_FILE: &str = "orders.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        read_json(&self.root, name)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        write_json(&self.root, name, value)
    }
}

/// Reads `<dir>/<name>` as JSON. A missing file is `None`.
pub(crate) fn read_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Option<T>> {
    let path = dir.join(name);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(MarketError::Io)?;
    let value = serde_json::from_str(&content).map_err(MarketError::Serialization)?;
    Ok(Some(value))
}

/// Writes `value` as pretty JSON to `<dir>/<name>`, creating `dir` if needed.
pub(crate) fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(MarketError::Io)?;
    }
    let content = serde_json::to_string_pretty(value).map_err(MarketError::Serialization)?;
    fs::write(dir.join(name), content).map_err(MarketError::Io)?;
    Ok(())
}

impl StateStore for FileStore {
    fn load_session(&self) -> Result<Option<Session>> {
        self.read_json(SESSION_FILE)
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        self.write_json(SESSION_FILE, session)
    }

    fn clear_session(&mut self) -> Result<bool> {
        let path = self.root.join(SESSION_FILE);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path).map_err(MarketError::Io)?;
        Ok(true)
    }

    fn load_selection(&self) -> Result<SelectionState> {
        Ok(self.read_json(SELECTION_FILE)?.unwrap_or_default())
    }

    fn save_selection(&mut self, selection: &SelectionState) -> Result<()> {
        self.write_json(SELECTION_FILE, selection)
    }

    fn load_cart(&self) -> Result<Cart> {
        Ok(self.read_json(CART_FILE)?.unwrap_or_default())
    }

    fn save_cart(&mut self, cart: &Cart) -> Result<()> {
        self.write_json(CART_FILE, cart)
    }

    fn load_orders(&self) -> Result<Option<Vec<Order>>> {
        self.read_json(ORDERS_FILE)
    }

    fn save_orders(&mut self, orders: &[Order]) -> Result<()> {
        self.write_json(ORDERS_FILE, orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Role};

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_files_load_as_defaults() {
        let (_dir, store) = store();
        assert!(store.load_session().unwrap().is_none());
        assert!(store.load_selection().unwrap().is_empty());
        assert!(store.load_cart().unwrap().is_empty());
        assert!(store.load_orders().unwrap().is_none());
    }

    #[test]
    fn session_lifecycle() {
        let (_dir, mut store) = store();
        let session = Session::new(Role::Educator, "e@example.com").with_name("Ed");
        store.save_session(&session).unwrap();
        assert_eq!(store.load_session().unwrap(), Some(session));

        assert!(store.clear_session().unwrap());
        assert!(!store.clear_session().unwrap());
        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn selection_persists() {
        let (_dir, mut store) = store();
        let mut selection = SelectionState::new();
        selection.toggle_category(Category::ComputerVision);
        selection.set_query("vision");
        store.save_selection(&selection).unwrap();

        assert_eq!(store.load_selection().unwrap(), selection);
        assert!(store.root().join(SELECTION_FILE).exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let (_dir, mut store) = store();
        store.save_cart(&Cart::default()).unwrap();
        fs::write(store.root().join(CART_FILE), "not json").unwrap();
        assert!(matches!(
            store.load_cart(),
            Err(MarketError::Serialization(_))
        ));
    }
}
