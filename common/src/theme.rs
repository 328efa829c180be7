use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const THEME_STORAGE_KEY: &str = "folio_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme preference: {other}"))),
        }
    }
}

// durable key-value storage for small scalar preferences
//
// in the browser this is local storage; elsewhere (tests, or a browser with
// storage disabled) it is MemoryStore
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

// the operating system's colour scheme, if the platform exposes one
pub trait SystemPreference {
    fn prefers_dark(&self) -> Option<bool>;
}

impl SystemPreference for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).save(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).save(key, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(ThemePreference)>;

// process-wide theme state
//
// there is exactly one writer path (set/toggle, driven by a ui event) and any number
// of readers.  every change is written to the store before listeners run and before
// the call returns, so a reload always sees the last choice
pub struct ThemeState<S: PreferenceStore> {
    store: S,
    current: ThemePreference,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: PreferenceStore> ThemeState<S> {
    // stored preference, then the system signal, then light
    pub fn initialize(store: S, system: &dyn SystemPreference) -> Self {
        let stored = store
            .load(THEME_STORAGE_KEY)
            .and_then(|value| match value.parse::<ThemePreference>() {
                Ok(pref) => Some(pref),
                Err(err) => {
                    warn!("ignoring stored theme: {err}");
                    None
                }
            });

        let current = match stored {
            Some(pref) => pref,
            None => match system.prefers_dark() {
                Some(true) => ThemePreference::Dark,
                Some(false) | None => ThemePreference::Light,
            },
        };

        debug!(theme = %current, from_store = stored.is_some(), "theme initialized");

        ThemeState {
            store,
            current,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> ThemePreference {
        self.current
    }

    pub fn set(&mut self, pref: ThemePreference) {
        if let Err(err) = self.store.save(THEME_STORAGE_KEY, pref.as_str()) {
            warn!("failed to persist theme preference: {err}");
        }

        self.current = pref;

        for (_, listener) in self.listeners.iter() {
            listener(pref);
        }
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(ThemePreference) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: PreferenceStore> fmt::Debug for ThemeState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::Error::msg("quota exceeded"))
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(pref.toggled().toggled(), pref);
        }
    }

    #[test]
    fn test_initialize_prefers_stored_value() {
        let store = MemoryStore::new();
        store.save(THEME_STORAGE_KEY, "dark").unwrap();

        let state = ThemeState::initialize(&store, &Some(false));
        assert_eq!(state.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_initialize_falls_back_to_system_then_light() {
        let state = ThemeState::initialize(MemoryStore::new(), &Some(true));
        assert_eq!(state.get(), ThemePreference::Dark);

        let state = ThemeState::initialize(MemoryStore::new(), &None);
        assert_eq!(state.get(), ThemePreference::Light);
    }

    #[test]
    fn test_garbage_in_store_is_ignored() {
        let store = MemoryStore::new();
        store.save(THEME_STORAGE_KEY, "solarized").unwrap();

        let state = ThemeState::initialize(&store, &Some(true));
        assert_eq!(state.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let store = MemoryStore::new();

        {
            let mut state = ThemeState::initialize(&store, &None);
            assert_eq!(state.toggle(), ThemePreference::Dark);
        }

        assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        let reloaded = ThemeState::initialize(&store, &Some(false));
        assert_eq!(reloaded.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_double_toggle_restores_value() {
        let store = MemoryStore::new();
        let mut state = ThemeState::initialize(&store, &None);

        state.toggle();
        state.toggle();

        assert_eq!(state.get(), ThemePreference::Light);
        assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_listeners_see_new_value_after_it_is_stored() {
        let store = Rc::new(MemoryStore::new());
        let seen = Rc::new(Cell::new(None));

        let mut state = ThemeState::initialize(store.clone(), &None);

        let store_in_listener = store.clone();
        let seen_in_listener = seen.clone();
        let id = state.subscribe(move |pref| {
            let stored = store_in_listener.load(THEME_STORAGE_KEY);
            assert_eq!(stored.as_deref(), Some(pref.as_str()));
            seen_in_listener.set(Some(pref));
        });

        state.toggle();
        assert_eq!(seen.get(), Some(ThemePreference::Dark));

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));

        state.toggle();
        assert_eq!(seen.get(), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_save_failure_still_changes_theme() {
        let mut state = ThemeState::initialize(FailingStore, &None);

        assert_eq!(state.toggle(), ThemePreference::Dark);
        assert_eq!(state.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert_eq!(" light\n".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert!("blue".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }
}
