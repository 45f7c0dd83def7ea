// ============================================================================
// VALIDATION - Errores de validación local (antes de llamar al API)
// ============================================================================

use thiserror::Error;

/// Rechazo de un borrador antes de enviarlo al servidor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("❌ No puedes ingresar todos los campos en cero o vacíos.")]
    AllFieldsEmpty,

    #[error("❌ La edad debe estar entre 18 y 100 años.")]
    AgeOutOfRange { raw: String },

    #[error("El campo {0} es obligatorio.")]
    MissingField(&'static str),

    #[error("El campo {field} debe ser una fecha válida (AAAA-MM-DD): {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("El campo {field} debe ser numérico: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Campo vacío o "0" (después de trim)
pub fn is_blank_or_zero(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "0"
}

/// Entero inicial de un texto, al estilo de un input numérico ("17.5" -> 17)
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Campo obligatorio: devuelve el valor recortado o MissingField
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_or_zero() {
        assert!(is_blank_or_zero(""));
        assert!(is_blank_or_zero("   "));
        assert!(is_blank_or_zero(" 0 "));
        assert!(!is_blank_or_zero("00"));
        assert!(!is_blank_or_zero("Ana"));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("17"), Some(17));
        assert_eq!(parse_leading_int(" 42 "), Some(42));
        assert_eq!(parse_leading_int("17.9"), Some(17));
        assert_eq!(parse_leading_int("30años"), Some(30));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("cargo", "  Dev "), Ok("Dev"));
        assert_eq!(required("cargo", "   "), Err(ValidationError::MissingField("cargo")));
    }
}
