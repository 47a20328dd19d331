//! Client-side session state: bearer token, signed-in user, branch, locale.
//!
//! The store keeps two slots. The persistent slot is backed by a JSON
//! snapshot file and survives restarts ("remember me"); the session slot
//! lives only as long as the process. Reads prefer the persistent slot.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Everything the client persists about a signed-in session, stored under a
/// single snapshot so a reload rehydrates auth, branch, and locale together.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Bearer token, if signed in.
    #[serde(default)]
    pub token: Option<String>,

    /// Token expiry. `None` means the server issued no expiry.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Username of the signed-in user, for display.
    #[serde(default)]
    pub username: Option<String>,

    /// Selected branch scope, sent as `X-Branch-Code`.
    #[serde(default)]
    pub branch_code: Option<String>,

    /// Selected UI locale.
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// True when the snapshot holds a token that has not expired at `now`.
pub fn is_authenticated(snapshot: &SessionSnapshot, now: DateTime<Utc>) -> bool {
    match &snapshot.token {
        Some(token) if !token.is_empty() => match snapshot.expires_at {
            Some(expires_at) => now < expires_at,
            None => true,
        },
        _ => false,
    }
}

/// Thread-safe session container shared by the transport client and the
/// front end. All I/O failures are logged and swallowed; losing a snapshot
/// write degrades to a fresh login, never to an inconsistent session.
pub struct SessionStore {
    persistent: RwLock<Option<SessionSnapshot>>,
    session: RwLock<Option<SessionSnapshot>>,
    locale_override: RwLock<Option<Locale>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Creates a store backed by a snapshot file, rehydrating the persistent
    /// slot when the file exists.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let persistent = read_snapshot(&path);
        Self {
            persistent: RwLock::new(persistent),
            session: RwLock::new(None),
            locale_override: RwLock::new(None),
            path: Some(path),
        }
    }

    /// Creates a store with no backing file. Used in tests and one-shot
    /// invocations that must not leave state behind.
    pub fn in_memory() -> Self {
        Self {
            persistent: RwLock::new(None),
            session: RwLock::new(None),
            locale_override: RwLock::new(None),
            path: None,
        }
    }

    /// Records a successful login. `remember` routes the snapshot to the
    /// persistent slot (and the snapshot file); otherwise it stays in
    /// memory for this process only.
    pub fn login(&self, snapshot: SessionSnapshot, remember: bool) {
        if remember {
            *write_lock(&self.persistent) = Some(snapshot);
            *write_lock(&self.session) = None;
            self.save_persistent();
        } else {
            *write_lock(&self.session) = Some(snapshot);
            *write_lock(&self.persistent) = None;
            self.delete_file();
        }
    }

    /// Clears both slots and removes the snapshot file. Called on explicit
    /// logout and whenever the server answers 401.
    pub fn clear(&self) {
        *write_lock(&self.persistent) = None;
        *write_lock(&self.session) = None;
        self.delete_file();
    }

    /// The current bearer token; the persistent slot takes precedence.
    pub fn token(&self) -> Option<String> {
        self.snapshot().and_then(|s| s.token)
    }

    /// A copy of the active snapshot; the persistent slot takes precedence.
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        if let Some(snapshot) = read_lock(&self.persistent).clone() {
            return Some(snapshot);
        }
        read_lock(&self.session).clone()
    }

    /// The selected branch scope, if any.
    pub fn branch_code(&self) -> Option<String> {
        self.snapshot().and_then(|s| s.branch_code)
    }

    /// Updates the branch scope on the active slot, persisting when the
    /// persistent slot is the active one.
    pub fn set_branch(&self, branch_code: Option<String>) {
        self.update_active(|snapshot| snapshot.branch_code = branch_code);
    }

    /// The effective locale: a per-run override beats the persisted choice,
    /// which beats the product default (Turkish).
    pub fn locale(&self) -> Locale {
        if let Some(locale) = *read_lock(&self.locale_override) {
            return locale;
        }
        self.snapshot()
            .and_then(|s| s.locale)
            .unwrap_or_default()
    }

    /// Sets a locale for this process only, without touching the snapshot.
    pub fn set_locale_override(&self, locale: Locale) {
        *write_lock(&self.locale_override) = Some(locale);
    }

    /// Persists a locale choice into the active slot.
    pub fn set_locale(&self, locale: Locale) {
        self.update_active(|snapshot| snapshot.locale = Some(locale));
    }

    /// Applies `apply` to whichever slot is active. The write guard is
    /// released before the snapshot file is rewritten.
    fn update_active<F: FnOnce(&mut SessionSnapshot)>(&self, apply: F) {
        let mut persisted = false;
        {
            let mut guard = write_lock(&self.persistent);
            if let Some(snapshot) = guard.as_mut() {
                apply(snapshot);
                persisted = true;
            } else {
                drop(guard);
                if let Some(snapshot) = write_lock(&self.session).as_mut() {
                    apply(snapshot);
                }
            }
        }
        if persisted {
            self.save_persistent();
        }
    }

    /// True when the active snapshot is authenticated right now.
    pub fn is_authenticated_now(&self) -> bool {
        self.snapshot()
            .map(|s| is_authenticated(&s, Utc::now()))
            .unwrap_or(false)
    }

    fn save_persistent(&self) {
        let Some(path) = &self.path else { return };
        let Some(snapshot) = read_lock(&self.persistent).clone() else {
            return;
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("failed to write session snapshot {}: {}", path.display(), e);
                }
            }
            Err(e) => tracing::warn!("failed to serialize session snapshot: {}", e),
        }
    }

    fn delete_file(&self) {
        let Some(path) = &self.path else { return };
        if path.exists() {
            if let Err(e) = std::fs::remove_file(path) {
                tracing::warn!("failed to remove session snapshot {}: {}", path.display(), e);
            }
        }
    }
}

fn read_snapshot(path: &PathBuf) -> Option<SessionSnapshot> {
    let text = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&text) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("ignoring malformed session snapshot {}: {}", path.display(), e);
            None
        }
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn snapshot_with_token(token: &str) -> SessionSnapshot {
        SessionSnapshot {
            token: Some(token.to_string()),
            ..SessionSnapshot::default()
        }
    }

    #[test]
    fn authenticated_requires_unexpired_token() {
        let now = Utc::now();
        let mut snapshot = snapshot_with_token("tok");
        assert!(is_authenticated(&snapshot, now));

        snapshot.expires_at = Some(now + Duration::minutes(5));
        assert!(is_authenticated(&snapshot, now));

        snapshot.expires_at = Some(now - Duration::minutes(5));
        assert!(!is_authenticated(&snapshot, now));

        snapshot.token = None;
        assert!(!is_authenticated(&snapshot, now));
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let snapshot = snapshot_with_token("");
        assert!(!is_authenticated(&snapshot, Utc::now()));
    }

    #[test]
    fn persistent_slot_takes_precedence() {
        let store = SessionStore::in_memory();
        store.login(snapshot_with_token("session"), false);
        assert_eq!(store.token().as_deref(), Some("session"));

        store.login(snapshot_with_token("persistent"), true);
        assert_eq!(store.token().as_deref(), Some("persistent"));
    }

    #[test]
    fn clear_empties_both_slots() {
        let store = SessionStore::in_memory();
        store.login(snapshot_with_token("tok"), false);
        store.clear();
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated_now());
    }

    #[test]
    fn remembered_login_survives_reload() {
        let path = std::env::temp_dir().join(format!(
            "vektora-session-{}-{:?}.json",
            std::process::id(),
            std::thread::current().id()
        ));
        std::fs::remove_file(&path).ok();

        let store = SessionStore::load(&path);
        let mut snapshot = snapshot_with_token("tok");
        snapshot.branch_code = Some("IST".to_string());
        store.login(snapshot, true);

        let reloaded = SessionStore::load(&path);
        assert_eq!(reloaded.token().as_deref(), Some("tok"));
        assert_eq!(reloaded.branch_code().as_deref(), Some("IST"));

        reloaded.clear();
        assert!(!path.exists());
    }

    #[test]
    fn unremembered_login_leaves_no_file() {
        let path = std::env::temp_dir().join(format!(
            "vektora-session-volatile-{}.json",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();

        let store = SessionStore::load(&path);
        store.login(snapshot_with_token("tok"), false);
        assert!(!path.exists());
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn branch_update_is_persisted_for_remembered_sessions() {
        let path = std::env::temp_dir().join(format!(
            "vektora-session-branch-{}.json",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();

        let store = SessionStore::load(&path);
        store.login(snapshot_with_token("tok"), true);
        store.set_branch(Some("ANK".to_string()));

        let reloaded = SessionStore::load(&path);
        assert_eq!(reloaded.branch_code().as_deref(), Some("ANK"));
        reloaded.clear();
    }

    #[test]
    fn locale_override_beats_persisted_choice() {
        let store = SessionStore::in_memory();
        let mut snapshot = snapshot_with_token("tok");
        snapshot.locale = Some(Locale::German);
        store.login(snapshot, false);
        assert_eq!(store.locale(), Locale::German);

        store.set_locale_override(Locale::English);
        assert_eq!(store.locale(), Locale::English);
    }

    #[test]
    fn locale_defaults_to_turkish() {
        let store = SessionStore::in_memory();
        assert_eq!(store.locale(), Locale::Turkish);
    }
}
