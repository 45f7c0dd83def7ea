use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub correo: String,
    pub password: String,
}

/// Respuesta de /api/auth/login; sin token = credenciales rechazadas
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Token no vacío, si lo hay
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RecoverRequest {
    pub correo: String,
}

/// El token viene del enlace de recuperación, no de la sesión
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub token: String,
    #[serde(rename = "nuevaPassword")]
    pub nueva_password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_without_token() {
        let res: LoginResponse = serde_json::from_str(r#"{"message":"Credenciales inválidas"}"#).unwrap();
        assert_eq!(res.token(), None);

        let res: LoginResponse = serde_json::from_str(r#"{"token":"  "}"#).unwrap();
        assert_eq!(res.token(), None);

        let res: LoginResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        assert_eq!(res.token(), Some("t1"));
    }

    #[test]
    fn test_change_password_wire_names() {
        let body = serde_json::to_value(ChangePasswordRequest {
            token: "abc".into(),
            nueva_password: "secreta".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"token": "abc", "nuevaPassword": "secreta"}));
    }
}
