// Fechas del API: "2024-01-01" o "2024-01-01T00:00:00.000Z"

use chrono::{Datelike, NaiveDate};

pub const INVALID_DATE: &str = "Invalid Date";

/// Parte de fecha (AAAA-MM-DD) de un valor ISO del API
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Fecha corta estilo en-US sin ceros ("1/1/2024", "12/31/2024")
pub fn format_locale_date(raw: &str) -> String {
    match parse_api_date(raw) {
        Some(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        None => INVALID_DATE.to_string(),
    }
}

/// Valor para un <input type="date"> (primeros 10 caracteres)
pub fn date_input_value(raw: &str) -> String {
    let raw = raw.trim();
    raw.get(..10).unwrap_or(raw).to_string()
}
