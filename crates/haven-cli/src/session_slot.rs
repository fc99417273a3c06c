//! CLI session persistence: OS keychain by default, JSON file on request.

#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(not(test))]
use keyring::Entry;

use haven_core::session::{FileSessionSlot, SessionError, SessionResult, SessionSlot, SessionStore};

#[cfg(not(test))]
const KEYRING_SERVICE_NAME: &str = "link-haven";

/// Environment variable selecting a file-backed session instead of the keychain
pub const SESSION_FILE_ENV: &str = "HAVEN_SESSION_FILE";

#[derive(Debug, Clone)]
pub struct KeyringSessionSlot {
    username: String,
}

impl KeyringSessionSlot {
    pub fn new(profile_name: &str) -> Self {
        Self {
            username: format!("session:{profile_name}"),
        }
    }

    #[cfg(test)]
    fn test_store() -> &'static Mutex<HashMap<String, String>> {
        static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    #[cfg(not(test))]
    fn entry(&self) -> SessionResult<Entry> {
        Entry::new(KEYRING_SERVICE_NAME, &self.username)
            .map_err(|error| SessionError::Storage(error.to_string()))
    }
}

impl SessionSlot for KeyringSessionSlot {
    #[cfg(not(test))]
    fn read(&self) -> SessionResult<Option<String>> {
        match self.entry()?.get_password() {
            Ok(raw) => Ok(Some(raw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(SessionError::Storage(error.to_string())),
        }
    }

    #[cfg(test)]
    fn read(&self) -> SessionResult<Option<String>> {
        let guard = Self::test_store()
            .lock()
            .map_err(|error| SessionError::Storage(error.to_string()))?;
        Ok(guard.get(&self.username).cloned())
    }

    #[cfg(not(test))]
    fn write(&self, raw: &str) -> SessionResult<()> {
        self.entry()?
            .set_password(raw)
            .map_err(|error| SessionError::Storage(error.to_string()))
    }

    #[cfg(test)]
    fn write(&self, raw: &str) -> SessionResult<()> {
        let mut guard = Self::test_store()
            .lock()
            .map_err(|error| SessionError::Storage(error.to_string()))?;
        guard.insert(self.username.clone(), raw.to_string());
        Ok(())
    }

    #[cfg(not(test))]
    fn clear(&self) -> SessionResult<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(SessionError::Storage(error.to_string())),
        }
    }

    #[cfg(test)]
    fn clear(&self) -> SessionResult<()> {
        let mut guard = Self::test_store()
            .lock()
            .map_err(|error| SessionError::Storage(error.to_string()))?;
        guard.remove(&self.username);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum CliSessionSlot {
    Keyring(KeyringSessionSlot),
    File(FileSessionSlot),
}

impl CliSessionSlot {
    /// `--session-file`, then `HAVEN_SESSION_FILE`, then the keychain entry for the profile.
    pub fn resolve(profile_name: &str, session_file: Option<PathBuf>) -> Self {
        let from_env = std::env::var_os(SESSION_FILE_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty());
        match session_file.or(from_env) {
            Some(path) => Self::File(FileSessionSlot::new(path)),
            None => Self::Keyring(KeyringSessionSlot::new(profile_name)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Keyring(slot) => format!("keychain entry '{}'", slot.username),
            Self::File(slot) => format!("file {}", slot.path().display()),
        }
    }
}

impl SessionSlot for CliSessionSlot {
    fn read(&self) -> SessionResult<Option<String>> {
        match self {
            Self::Keyring(slot) => slot.read(),
            Self::File(slot) => slot.read(),
        }
    }

    fn write(&self, raw: &str) -> SessionResult<()> {
        match self {
            Self::Keyring(slot) => slot.write(raw),
            Self::File(slot) => slot.write(raw),
        }
    }

    fn clear(&self) -> SessionResult<()> {
        match self {
            Self::Keyring(slot) => slot.clear(),
            Self::File(slot) => slot.clear(),
        }
    }
}

pub fn open_session_store(
    profile_name: &str,
    session_file: Option<PathBuf>,
) -> SessionStore<CliSessionSlot> {
    SessionStore::rehydrate(CliSessionSlot::resolve(profile_name, session_file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyring_slot_is_scoped_per_profile() {
        let work = KeyringSessionSlot::new("slot-test-work");
        let home = KeyringSessionSlot::new("slot-test-home");
        work.write("{\"token\":\"w\"}").unwrap();

        assert_eq!(work.read().unwrap().as_deref(), Some("{\"token\":\"w\"}"));
        assert_eq!(home.read().unwrap(), None);

        work.clear().unwrap();
        assert_eq!(work.read().unwrap(), None);
    }

    #[test]
    fn explicit_session_file_wins_over_keychain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let slot = CliSessionSlot::resolve("default", Some(path.clone()));

        assert!(matches!(slot, CliSessionSlot::File(_)));
        assert_eq!(slot.describe(), format!("file {}", path.display()));
    }

    #[test]
    fn store_over_keyring_slot_survives_reopen() {
        let mut store = SessionStore::rehydrate(CliSessionSlot::Keyring(
            KeyringSessionSlot::new("slot-test-reopen"),
        ));
        store.login("kept", None).unwrap();

        let reopened = SessionStore::rehydrate(CliSessionSlot::Keyring(
            KeyringSessionSlot::new("slot-test-reopen"),
        ));
        assert_eq!(reopened.token(), Some("kept"));
    }
}
