// ============================================================================
// AUTH VIEWMODEL - Login, recuperación y cambio de contraseña
// ============================================================================
// Orquesta AuthApi + SessionContext. Las vistas solo traducen AuthError a texto.
// ============================================================================

use std::rc::Rc;
use thiserror::Error;

use crate::services::{ApiError, AuthApi};
use crate::state::session_state::{SessionContext, StorageError};

pub const LOGIN_ERROR: &str = "Error en login";
pub const RECOVER_ERROR: &str = "Error enviando correo";
pub const CHANGE_PASSWORD_ERROR: &str = "Error al cambiar contraseña";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Correo o contraseña incorrecta")]
    InvalidCredentials,

    #[error("Ingresa tu correo primero")]
    MissingEmail,

    #[error("Token no válido o expirado")]
    InvalidResetToken,

    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Texto para el alert; los errores de API usan el mensaje del servidor o `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Api(e) => e.user_message(fallback),
            AuthError::Storage(_) => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

pub struct AuthViewModel<A: AuthApi> {
    api: Rc<A>,
    session: SessionContext,
}

impl<A: AuthApi> Clone for AuthViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
        }
    }
}

impl<A: AuthApi> AuthViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Anonymous -> Authenticated si la respuesta trae token
    pub async fn login(&self, correo: &str, password: &str) -> Result<(), AuthError> {
        log::info!("🔐 [LOGIN] Iniciando sesión: {}", correo.trim());
        let response = self.api.login(correo.trim(), password).await.map_err(|e| {
            log::error!("❌ [LOGIN] {}", e);
            AuthError::Api(e)
        })?;

        let token = response.token().ok_or_else(|| {
            log::warn!("⚠️ [LOGIN] Respuesta sin token");
            AuthError::InvalidCredentials
        })?;

        self.session.login(token)?;
        Ok(())
    }

    /// Envía el correo de recuperación; devuelve el mensaje del servidor
    pub async fn request_password_reset(&self, correo: &str) -> Result<String, AuthError> {
        let correo = correo.trim();
        if correo.is_empty() {
            return Err(AuthError::MissingEmail);
        }

        log::info!("📧 [RECUPERAR] Solicitando enlace para {}", correo);
        let response = self.api.request_password_reset(correo).await?;
        Ok(response.message.unwrap_or_default())
    }

    /// Cambia la contraseña con el token de recuperación de la URL
    pub async fn change_password(
        &self,
        reset_token: Option<&str>,
        nueva: &str,
        confirmar: &str,
    ) -> Result<String, AuthError> {
        let token = reset_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::InvalidResetToken)?;

        if nueva != confirmar {
            return Err(AuthError::PasswordMismatch);
        }

        log::info!("🔑 [PASSWORD] Cambiando contraseña");
        let response = self.api.change_password(token, nueva).await.map_err(|e| {
            log::error!("❌ [PASSWORD] {}", e);
            AuthError::Api(e)
        })?;
        Ok(response.message.unwrap_or_default())
    }

    /// Authenticated -> Anonymous
    pub fn logout(&self) {
        self.session.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::route_guard::{guard, Route, Screen};
    use crate::state::session_state::{AuthStatus, MemoryTokenStore};
    use crate::viewmodels::testing::{block_on, AuthCall, FakeAuthApi};

    fn viewmodel(api: FakeAuthApi) -> (AuthViewModel<FakeAuthApi>, Rc<FakeAuthApi>) {
        let api = Rc::new(api);
        let session = SessionContext::new(MemoryTokenStore::new());
        (AuthViewModel::new(api.clone(), session), api)
    }

    #[test]
    fn test_login_persists_token_and_unlocks_dashboard() {
        let (vm, api) = viewmodel(FakeAuthApi::granting("t1"));

        assert_eq!(block_on(vm.login("a@b.com", "x")), Ok(()));
        assert_eq!(api.calls(), vec![AuthCall::Login("a@b.com".into(), "x".into())]);
        assert_eq!(vm.session().token().as_deref(), Some("t1"));
        assert_eq!(vm.session().status(), AuthStatus::Authenticated);
        assert_eq!(guard(&Route::Dashboard, vm.session()), Screen::Dashboard);

        vm.logout();
        assert_eq!(guard(&Route::Dashboard, vm.session()), Screen::Login);
    }

    #[test]
    fn test_login_without_token_is_rejected() {
        let (vm, _api) = viewmodel(FakeAuthApi::default());
        let err = block_on(vm.login("a@b.com", "mala")).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.user_message(LOGIN_ERROR), "Correo o contraseña incorrecta");
        assert!(!vm.session().is_authenticated());
    }

    #[test]
    fn test_login_server_error_message() {
        let (vm, _api) = viewmodel(FakeAuthApi::failing(ApiError::Http {
            status: 401,
            message: Some("Usuario bloqueado".into()),
        }));
        let err = block_on(vm.login("a@b.com", "x")).unwrap_err();
        assert_eq!(err.user_message(LOGIN_ERROR), "Usuario bloqueado");

        let (vm, _api) = viewmodel(FakeAuthApi::failing(ApiError::Network("offline".into())));
        let err = block_on(vm.login("a@b.com", "x")).unwrap_err();
        assert_eq!(err.user_message(LOGIN_ERROR), "Error en login");
    }

    #[test]
    fn test_recover_requires_email() {
        let (vm, api) = viewmodel(FakeAuthApi::default());
        assert_eq!(block_on(vm.request_password_reset("  ")), Err(AuthError::MissingEmail));
        assert!(api.calls().is_empty());

        assert_eq!(block_on(vm.request_password_reset("a@b.com")).as_deref(), Ok("ok"));
        assert_eq!(api.calls(), vec![AuthCall::Recover("a@b.com".into())]);
    }

    #[test]
    fn test_change_password_checks() {
        let (vm, api) = viewmodel(FakeAuthApi::default());
        assert_eq!(
            block_on(vm.change_password(None, "n1", "n1")),
            Err(AuthError::InvalidResetToken)
        );
        assert_eq!(
            block_on(vm.change_password(Some("r1"), "n1", "n2")),
            Err(AuthError::PasswordMismatch)
        );
        assert!(api.calls().is_empty());

        assert!(block_on(vm.change_password(Some("r1"), "n1", "n1")).is_ok());
        assert_eq!(api.calls(), vec![AuthCall::ChangePassword("r1".into(), "n1".into())]);
        // No inicia sesión
        assert!(!vm.session().is_authenticated());
    }

    #[test]
    fn test_change_password_failure_fallback() {
        let (vm, _api) = viewmodel(FakeAuthApi::failing(ApiError::Network("x".into())));
        let err = block_on(vm.change_password(Some("r1"), "n1", "n1")).unwrap_err();
        assert_eq!(err.user_message(CHANGE_PASSWORD_ERROR), "Error al cambiar contraseña");
    }
}
