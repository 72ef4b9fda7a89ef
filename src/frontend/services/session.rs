//! Session state shared through the component tree.

use crate::backend::storage::Storage;
use crate::utils::Result;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::rc::Rc;

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Handle to the session token, provided as Dioxus context.
///
/// Holding a token is all "authenticated" means here. Nothing checks what the
/// token contains.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn Storage>,
}

impl Session {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Returns the stored token. An empty string counts as no token.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> Result<()> {
        self.storage.set_item(TOKEN_KEY, token)?;
        log::info!("Session token stored");
        Ok(())
    }

    pub fn sign_out(&self) -> Result<()> {
        self.storage.remove_item(TOKEN_KEY)?;
        log::info!("Session token removed");
        Ok(())
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Creates an opaque token for `username`.
    pub fn issue_token(username: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(username.as_bytes());
        hasher.update(Utc::now().to_rfc3339().as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStorage;

    fn session() -> (Session, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::new());
        (Session::new(storage.clone()), storage)
    }

    #[test]
    fn sign_in_and_out() {
        let (session, storage) = session();
        assert!(!session.is_authenticated());

        session.sign_in("abc").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("abc"));

        session.sign_out().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let (session, storage) = session();
        storage.set_item(TOKEN_KEY, "").unwrap();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn username_rules() {
        assert!(Session::is_valid_username("steve_01"));
        assert!(!Session::is_valid_username("ab"));
        assert!(!Session::is_valid_username("a".repeat(17).as_str()));
        assert!(!Session::is_valid_username("no spaces"));
    }

    #[test]
    fn issued_tokens_are_hex_digests() {
        let token = Session::issue_token("steve");
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
