//! # Luxe Session
//!
//! The "current user" stub. There are no credentials and no server-side
//! sessions: whoever holds the record is logged in.
//!
//! ```text
//!   hydrate ──▶ SessionProvider ──login/register──▶ store.save(json)
//!                    │
//!                    └──────────logout────────────▶ store.clear()
//! ```
//!
//! Stores: [`FileSessionStore`] for the CLI, [`MemorySessionStore`] for tests.
//! The web crate adds a cookie-backed one.

pub mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

use luxe_core::User;
use tracing::{info, warn};

/// Result type for luxe-session operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Session store lock poisoned")]
    Poisoned,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Session storage error: {0}")]
    Backend(String),
}

/// Id given to every mock user
pub const MOCK_USER_ID: &str = "1";
pub const GUEST_NAME: &str = "Guest User";
pub const GUEST_AVATAR: &str = "GU";

/// Holds the current user and keeps the store in step with it
pub struct SessionProvider<S: SessionStore> {
    store: S,
    user: Option<User>,
}

impl<S: SessionStore> SessionProvider<S> {
    /// Read the stored record. Anything absent or unreadable means logged out.
    pub fn hydrate(store: S) -> Self {
        let user = match store.load() {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Ignoring unreadable session record");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session store unavailable, starting logged out");
                None
            }
        };
        Self { store, user }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mock login. The password is accepted and discarded.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<&User> {
        let email = required("email", email)?;
        self.establish(User {
            id: MOCK_USER_ID.to_string(),
            name: GUEST_NAME.to_string(),
            email: email.to_string(),
            avatar: GUEST_AVATAR.to_string(),
        })
    }

    /// Mock registration. The avatar is the upper-cased first letter of the name.
    pub fn register(&mut self, name: &str, email: &str, _password: &str) -> Result<&User> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let avatar = name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        self.establish(User {
            id: MOCK_USER_ID.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar,
        })
    }

    /// Teardown. Clears the store even when nobody is logged in.
    pub fn logout(&mut self) -> Result<Option<User>> {
        self.store.clear()?;
        let previous = self.user.take();
        if let Some(user) = &previous {
            info!(email = %user.email, "User logged out");
        }
        Ok(previous)
    }

    fn establish(&mut self, user: User) -> Result<&User> {
        self.store.save(&serde_json::to_string(&user)?)?;
        info!(email = %user.email, "User logged in");
        Ok(self.user.insert(user))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrate_empty_store() {
        let session = SessionProvider::hydrate(MemorySessionStore::new());
        assert!(!session.is_logged_in());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_login_creates_mock_user() {
        let mut session = SessionProvider::hydrate(MemorySessionStore::new());
        let user = session.login("ana@example.com", "anything").unwrap().clone();

        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Guest User");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.avatar, "GU");

        let stored = session.store().load().unwrap().unwrap();
        let reread: User = serde_json::from_str(&stored).unwrap();
        assert_eq!(reread, user);
    }

    #[test]
    fn test_register_avatar_initial() {
        let mut session = SessionProvider::hydrate(MemorySessionStore::new());
        let user = session.register("élodie", "e@example.com", "pw").unwrap();
        assert_eq!(user.name, "élodie");
        assert_eq!(user.avatar, "É");
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut session = SessionProvider::hydrate(MemorySessionStore::new());
        assert!(matches!(session.login("  ", "pw"), Err(Error::MissingField("email"))));
        assert!(matches!(
            session.register("", "a@b.c", "pw"),
            Err(Error::MissingField("name"))
        ));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_hydrate_restores_and_logout_clears() {
        let store = MemorySessionStore::new();
        {
            let mut session = SessionProvider::hydrate(&store);
            session.login("guest@example.com", "pw").unwrap();
        }

        let mut session = SessionProvider::hydrate(&store);
        assert_eq!(
            session.current_user().map(|u| u.email.as_str()),
            Some("guest@example.com")
        );

        let previous = session.logout().unwrap();
        assert!(previous.is_some());
        assert!(!session.is_logged_in());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_record_means_logged_out() {
        let session = SessionProvider::hydrate(MemorySessionStore::with_record("{not json"));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_file_backed_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = SessionProvider::hydrate(FileSessionStore::at_path(&path));
        session.register("Maria", "maria@example.com", "pw").unwrap();
        assert!(path.exists());

        let again = SessionProvider::hydrate(FileSessionStore::at_path(&path));
        assert_eq!(again.current_user().map(|u| u.avatar.as_str()), Some("M"));
    }
}
