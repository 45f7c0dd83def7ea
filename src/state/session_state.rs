// ============================================================================
// SESSION STATE - Token de sesión (única fuente de verdad del login)
// ============================================================================
// Se inyecta en cada pantalla que lo necesita; login/logout son los únicos
// mutadores. Sin TTL local: el servidor decide si el token sigue siendo válido.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::utils::{LocalTokenStore, TOKEN_STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No se pudo guardar la sesión: {0}")]
    Write(String),
}

/// Almacenamiento persistente del token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

/// Store en memoria (tests y entornos sin localStorage)
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Anonymous,
    Authenticated,
}

/// Contexto de sesión compartido (clones = misma sesión)
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn TokenStore>,
}

impl SessionContext {
    pub fn new<S: TokenStore + 'static>(store: S) -> Self {
        Self { store: Rc::new(store) }
    }

    /// Sesión respaldada por localStorage["token"]
    pub fn browser() -> Self {
        Self::new(LocalTokenStore::new(TOKEN_STORAGE_KEY))
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn status(&self) -> AuthStatus {
        if self.token().is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    /// Anonymous -> Authenticated
    pub fn login(&self, token: &str) -> Result<(), StorageError> {
        self.store.save(token)?;
        log::info!("✅ [SESSION] Sesión iniciada");
        Ok(())
    }

    /// Authenticated -> Anonymous
    pub fn logout(&self) {
        self.store.clear();
        log::info!("👋 [SESSION] Sesión cerrada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_transitions() {
        let session = SessionContext::new(MemoryTokenStore::new());
        assert_eq!(session.status(), AuthStatus::Anonymous);

        session.login("t1").unwrap();
        assert_eq!(session.status(), AuthStatus::Authenticated);
        assert_eq!(session.token().as_deref(), Some("t1"));

        session.logout();
        assert_eq!(session.status(), AuthStatus::Anonymous);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_clones_share_the_token() {
        let session = SessionContext::new(MemoryTokenStore::new());
        let other_screen = session.clone();
        session.login("t2").unwrap();
        assert!(other_screen.is_authenticated());
        other_screen.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_persisted_token_is_anonymous() {
        let session = SessionContext::new(MemoryTokenStore::with_token(""));
        assert!(!session.is_authenticated());
    }
}
