use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use serde::{Deserialize, Serialize};

use common::theme::{MemoryStore, PreferenceStore};

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("folio_{key}");

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("folio_{key}");

    // an unset key is the normal first-visit case and not worth a console error
    LocalStorage::get(key.clone()).map_err(|err| match err {
        StorageError::KeyNotFound(_) => anyhow::Error::msg(format!("{key} is not set")),
        err => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            anyhow::Error::msg("Local storage failure, see console log")
        }
    })
}

// the theme preference is a bare scalar ("light" or "dark"), so it goes through the
// raw storage api instead of the json helpers above
//
// private browsing modes can refuse local storage entirely, in which case the
// preference only lives as long as the page
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                console_error!("local storage unavailable, preferences will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(store) => store.load(key),
        }
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(|err| {
                console_error!(format!("Failed to set local storage {key}: {err:?}"));
                anyhow::Error::msg("Local storage failure, see console log")
            }),
            BrowserStore::Memory(store) => store.save(key, value),
        }
    }
}
