// ============================================================================
// ROUTE GUARD - Qué pantalla se renderiza para la URL actual
// ============================================================================
// Se evalúa una vez por navegación/render, no de forma continua.
// ============================================================================

use crate::state::session_state::SessionContext;
use crate::utils::{CHANGE_PASSWORD_PATH, DASHBOARD_PATH, LOGIN_PATH};

/// Ruta pedida por la URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    ChangePassword { reset_token: Option<String> },
}

/// Pantalla que finalmente se muestra
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    ChangePassword { reset_token: Option<String> },
}

impl Route {
    /// Interpreta `location.pathname` + `location.search`
    pub fn from_location(path: &str, search: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path == DASHBOARD_PATH {
            Route::Dashboard
        } else if path == CHANGE_PASSWORD_PATH {
            Route::ChangePassword {
                reset_token: query_param(search, "token").filter(|t| !t.is_empty()),
            }
        } else {
            // "/" y cualquier ruta desconocida
            Route::Login
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Dashboard => DASHBOARD_PATH,
            Route::ChangePassword { .. } => CHANGE_PASSWORD_PATH,
        }
    }
}

/// El dashboard solo se muestra con token; "/" siempre muestra el login
pub fn guard(route: &Route, session: &SessionContext) -> Screen {
    match route {
        Route::Dashboard if session.is_authenticated() => Screen::Dashboard,
        Route::Dashboard => {
            log::info!("🔒 [GUARD] Sin token, mostrando login");
            Screen::Login
        }
        Route::Login => Screen::Login,
        Route::ChangePassword { reset_token } => Screen::ChangePassword {
            reset_token: reset_token.clone(),
        },
    }
}

/// Valor decodificado de un parámetro de `?a=1&b=2`
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == name).then_some(value)
        })
        .next()
        .map(|value| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|v| v.into_owned())
                .unwrap_or(value)
        })
}
