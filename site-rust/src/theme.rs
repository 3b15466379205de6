//! Light/dark theme store with persistence and change notification.

use crate::{errors::BoxedError, SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError, Weak,
    },
};

/// Key the preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            "light"
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self { is_dark: true }),
            "light" => Some(Self { is_dark: false }),
            _ => None,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        if self.is_dark {
            DARK_PALETTE
        } else {
            LIGHT_PALETTE
        }
    }
}

/// Colour tokens views pick from according to the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_gradient: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    background: "#0a0e1a",
    background_secondary: "#111827",
    text: "#f1f5f9",
    muted_text: "#94a3b8",
    border: "rgba(59,130,246,0.15)",
    accent: "#3b82f6",
    accent_gradient: "linear-gradient(135deg, #3b82f6, #1e3a8a)",
};

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#f0f4ff",
    background_secondary: "#ffffff",
    text: "#0f172a",
    muted_text: "#475569",
    border: "rgba(37,99,235,0.12)",
    accent: "#2563eb",
    accent_gradient: "linear-gradient(135deg, #2563eb, #3b82f6)",
};

/// Durable key/value storage for user preferences.
pub trait PreferenceStorage: Send + Sync {
    fn load(&self, key: &str) -> SiteResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> SiteResult<()>;
}

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> SiteResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in a file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> SiteResult<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new())
            }
            Err(error) => return Err(storage_error(error)),
        };
        serde_json::from_str(&raw).map_err(storage_error)
    }
}

impl PreferenceStorage for FileStorage {
    fn load(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> SiteResult<()> {
        // A corrupt file is replaced rather than blocking every future save.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&values).map_err(storage_error)?;
        std::fs::write(&self.path, raw).map_err(storage_error)
    }
}

fn storage_error<E>(error: E) -> SiteError
where
    E: Into<BoxedError>,
{
    SiteError::Storage(error.into())
}

type ThemeListener = Arc<dyn Fn(ThemeState) + Send + Sync>;
type Listeners = Mutex<BTreeMap<u64, ThemeListener>>;

/// Process-wide theme flag, injected into views.
pub struct ThemeStore {
    state: Mutex<ThemeState>,
    storage: Arc<dyn PreferenceStorage>,
    listeners: Arc<Listeners>,
    next_listener_id: AtomicU64,
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ThemeSubscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl ThemeStore {
    /// Restore the persisted preference, or use `system_prefers_dark` when
    /// nothing valid is stored or the storage cannot be read.
    pub fn new(storage: Arc<dyn PreferenceStorage>, system_prefers_dark: bool) -> Self {
        let persisted = match storage.load(THEME_STORAGE_KEY) {
            Ok(value) => value.as_deref().and_then(ThemeState::parse),
            Err(error) => {
                tracing::warn!(%error, "failed to read theme preference, using system default");
                None
            }
        };
        let state = persisted.unwrap_or(ThemeState {
            is_dark: system_prefers_dark,
        });
        tracing::debug!(theme = state.as_str(), restored = persisted.is_some(), "theme initialized");

        Self {
            state: Mutex::new(state),
            storage,
            listeners: Arc::new(Mutex::new(BTreeMap::new())),
            next_listener_id: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn theme(&self) -> ThemeState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme().is_dark
    }

    /// Flip the theme, persist it, and notify every subscriber before
    /// returning. A failed save leaves the new theme in effect for the
    /// session.
    pub fn toggle(&self) -> ThemeState {
        let next = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.is_dark = !state.is_dark;
            *state
        };

        if let Err(error) = self.storage.save(THEME_STORAGE_KEY, next.as_str()) {
            tracing::warn!(%error, "failed to persist theme preference, keeping it in memory");
        }

        // Listeners run outside the lock so they may read the store.
        let listeners: Vec<ThemeListener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(next);
        }

        tracing::debug!(theme = next.as_str(), "theme toggled");
        next
    }

    pub fn subscribe<F>(&self, listener: F) -> ThemeSubscription
    where
        F: Fn(ThemeState) + Send + Sync + 'static,
    {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(listener));
        ThemeSubscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&self.id);
        }
    }
}
