use portfolio_site::{
    theme::{
        FileStorage, MemoryStorage, PreferenceStorage, ThemeState, ThemeStore, DARK_PALETTE,
        LIGHT_PALETTE, THEME_STORAGE_KEY,
    },
    SiteError, SiteResult,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

/// Storage whose every call fails.
struct BrokenStorage;

impl PreferenceStorage for BrokenStorage {
    fn load(&self, _key: &str) -> SiteResult<Option<String>> {
        Err(SiteError::Config("storage unavailable".to_string()))
    }

    fn save(&self, _key: &str, _value: &str) -> SiteResult<()> {
        Err(SiteError::Config("storage unavailable".to_string()))
    }
}

#[test]
fn falls_back_to_system_preference_when_nothing_is_stored() {
    let dark = ThemeStore::new(Arc::new(MemoryStorage::new()), true);
    assert!(dark.is_dark());

    let light = ThemeStore::new(Arc::new(MemoryStorage::new()), false);
    assert!(!light.is_dark());
}

#[test]
fn stored_preference_wins_over_system_preference() {
    let storage = Arc::new(MemoryStorage::new());
    storage.save(THEME_STORAGE_KEY, "light").unwrap();

    let store = ThemeStore::new(storage, true);
    assert_eq!(store.theme(), ThemeState { is_dark: false });
}

#[test]
fn unknown_stored_value_is_ignored() {
    let storage = Arc::new(MemoryStorage::new());
    storage.save(THEME_STORAGE_KEY, "sepia").unwrap();

    let store = ThemeStore::new(storage, true);
    assert!(store.is_dark());
}

#[test]
fn toggling_twice_restores_the_original_theme() {
    let storage = Arc::new(MemoryStorage::new());
    let store = ThemeStore::new(storage.clone(), false);

    assert!(store.toggle().is_dark);
    assert_eq!(storage.load(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));

    assert!(!store.toggle().is_dark);
    assert_eq!(storage.load(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn preference_survives_a_restart_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let store = ThemeStore::new(Arc::new(FileStorage::new(&path)), false);
    store.toggle();
    drop(store);

    let restored = ThemeStore::new(Arc::new(FileStorage::new(&path)), false);
    assert!(restored.is_dark());
}

#[test]
fn corrupt_preference_file_falls_back_and_is_replaced_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = ThemeStore::new(Arc::new(FileStorage::new(&path)), true);
    assert!(store.is_dark());

    store.toggle();
    let storage = FileStorage::new(&path);
    assert_eq!(storage.load(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn failing_storage_never_breaks_the_toggle() {
    let store = ThemeStore::new(Arc::new(BrokenStorage), true);
    assert!(store.is_dark());

    assert!(!store.toggle().is_dark);
    assert!(!store.is_dark());
}

#[test]
fn subscribers_see_every_toggle_until_dropped() {
    let store = ThemeStore::new(Arc::new(MemoryStorage::new()), false);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let calls = Arc::new(AtomicUsize::new(0));

    let subscription = store.subscribe({
        let seen = seen.clone();
        move |theme| seen.lock().unwrap().push(theme.is_dark)
    });
    let _counter = store.subscribe({
        let calls = calls.clone();
        move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    });
    assert_eq!(store.subscriber_count(), 2);

    store.toggle();
    store.toggle();
    drop(subscription);
    store.toggle();

    assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn palette_follows_the_theme() {
    assert_eq!(ThemeState { is_dark: true }.palette(), DARK_PALETTE);
    assert_eq!(ThemeState { is_dark: false }.palette(), LIGHT_PALETTE);
    assert_eq!(ThemeState::parse("dark"), Some(ThemeState { is_dark: true }));
    assert_eq!(ThemeState::parse("light"), Some(ThemeState { is_dark: false }));
}
