/// Clave de localStorage donde vive el token de sesión
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Rutas de la aplicación
pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const CHANGE_PASSWORD_PATH: &str = "/cambiar-password";

/// Espera antes de volver al login tras cambiar la contraseña
pub const CHANGE_PASSWORD_REDIRECT_MS: u32 = 2_000;
