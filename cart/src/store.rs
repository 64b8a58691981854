//! # Persisted store
//!
//! One named textual record (key `"cart"`) on a narrow key-value boundary.
//! Two independent page contexts read and write it with no locking, so the
//! record is never trusted: every [`CartStore::load`] normalizes whatever it
//! finds, and both `load` and [`CartStore::save`] degrade instead of failing.
//! The worst case is an empty or stale cart, never a crash.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{
    error::StoreError,
    model::{Cart, RawLine},
};

pub const CART_KEY: &str = "cart";

/// The key-value boundary the cart depends on. Implemented by the on-disk
/// store and by an in-memory fake for tests.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-per-key store under a local data directory.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(fs::write(self.record_path(key), value)?)
    }
}

/// In-memory fake of the storage boundary.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_record(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.records.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl Storage for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct CartStore<S: Storage> {
    storage: S,
}

impl<S: Storage> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads and normalizes the persisted cart. Absence, unreadable storage,
    /// parse failure and non-array shapes all degrade to an empty cart with a
    /// warning; a malformed element degrades to a default line.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.read(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::default(),
            Err(e) => {
                warn!("Failed to read cart record: {e}");
                return Cart::default();
            }
        };

        let parsed: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Failed to parse cart record, resetting: {e}");
                return Cart::default();
            }
        };

        let serde_json::Value::Array(items) = parsed else {
            warn!("Cart record is not an array, resetting");
            return Cart::default();
        };

        items
            .into_iter()
            .map(|item| serde_json::from_value::<RawLine>(item).unwrap_or_default().normalize())
            .collect()
    }

    /// Writes the cart back. A failing write is logged and swallowed; the
    /// in-memory cart stays authoritative for the rest of the page lifetime.
    pub fn save(&self, cart: &Cart) {
        let encoded = match serde_json::to_string(cart) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode cart record: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.write(CART_KEY, &encoded) {
            warn!("Failed to save cart record: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{CART_KEY, CartStore, LocalStore, MemoryStore, Storage};
    use crate::{error::StoreError, model::Command};

    /// Storage whose writes always fail, for the quota/unavailability path.
    struct ReadOnlyStore(MemoryStore);

    impl Storage for ReadOnlyStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.read(key)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::new(io::ErrorKind::StorageFull, "quota exceeded")))
        }
    }

    #[test]
    fn test_load_missing_record() {
        let store = CartStore::new(MemoryStore::default());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_unparsable_record() {
        let store = CartStore::new(MemoryStore::with_record(CART_KEY, "definitely not json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_non_array_record() {
        let store = CartStore::new(MemoryStore::with_record(CART_KEY, r#"{"key":"casio"}"#));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_normalizes_every_element() {
        let raw = r#"[
            {"key":"casio","name":"Casio Classic","unitPrice":55000,"quantity":2},
            42,
            {"quantity":"-3","unitPrice":null}
        ]"#;
        let store = CartStore::new(MemoryStore::with_record(CART_KEY, raw));

        let cart = store.load();
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].name, "Item");
        assert_eq!(cart.lines()[2].quantity, 1);
        assert_eq!(cart.total(), 110_000);
    }

    #[test]
    fn test_well_formed_record_round_trips_losslessly() {
        let raw = r#"[{"key":"casio","name":"Casio Classic","unitPrice":55000,"quantity":2}]"#;
        let storage = MemoryStore::with_record(CART_KEY, raw);
        let store = CartStore::new(storage);

        let cart = store.load();
        store.save(&cart);

        assert_eq!(store.storage.read(CART_KEY).unwrap().unwrap(), raw);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let storage = ReadOnlyStore(MemoryStore::with_record(
            CART_KEY,
            r#"[{"key":"casio","name":"Casio Classic","unitPrice":55000,"quantity":1}]"#,
        ));
        let store = CartStore::new(storage);

        let mut cart = store.load();
        assert!(cart.apply(Command::Increment(0)));
        store.save(&cart);

        // In-memory state is authoritative even though the write was lost.
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(store.load().lines()[0].quantity, 1);
    }

    #[test]
    fn test_two_page_contexts_share_one_record() {
        let dir = tempfile::tempdir().unwrap();

        // Detail-page context adds, cart-page context reads it back.
        let detail = CartStore::new(LocalStore::open(dir.path()).unwrap());
        let mut cart = detail.load();
        cart.add_or_merge("casio", "Casio Classic", 55_000);
        detail.save(&cart);

        let cart_page = CartStore::new(LocalStore::open(dir.path()).unwrap());
        let seen = cart_page.load();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen.lines()[0].name, "Casio Classic");
    }
}
