use gloo_storage::{LocalStorage, Storage};

use crate::state::session_state::{StorageError, TokenStore};

/// Token persistido en localStorage del navegador.
/// Se guarda el valor plano (sin JSON) para que `localStorage.getItem("token")`
/// devuelva el token tal cual.
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(self.key).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(self.key, token)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) {
        LocalStorage::delete(self.key);
    }
}
