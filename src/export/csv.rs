// Hoja -> CSV UTF-8 con BOM (Excel lo abre con acentos correctos)

use super::document::{Cell, Sheet};

const BOM: &str = "\u{FEFF}";

/// Texto que Excel interpretaría como fórmula
fn starts_like_formula(value: &str) -> bool {
    let trimmed = value.trim_start_matches(' ');
    matches!(trimmed.chars().next(), Some('=' | '+' | '-' | '@' | '\t' | '\r'))
}

/// Prefijo ' para que la celda se abra como texto
fn neutralize_formula(value: &str) -> String {
    if starts_like_formula(value) {
        format!("'{}", value)
    } else {
        value.to_string()
    }
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => escape_field(&neutralize_formula(text)),
        other => escape_field(&other.to_string()),
    }
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn render_csv(sheet: &Sheet) -> Vec<u8> {
    let mut out = String::from(BOM);

    let header: Vec<String> = sheet.columns.iter().map(|c| escape_field(c)).collect();
    out.push_str(&header.join(","));
    out.push_str("\r\n");

    for row in &sheet.rows {
        let fields: Vec<String> = row.iter().map(render_cell).collect();
        out.push_str(&fields.join(","));
        out.push_str("\r\n");
    }

    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_csv() {
        let sheet = Sheet {
            name: "Contratos",
            columns: &["Empleado", "Cargo", "Valor"],
            rows: vec![
                vec![Cell::text("Ana"), Cell::text("Dev, Sr"), Cell::Number(1000.0)],
                vec![Cell::text("Luis \"Lucho\""), Cell::Empty, Cell::Number(0.5)],
            ],
        };
        let csv = String::from_utf8(render_csv(&sheet)).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}Empleado,Cargo,Valor\r\nAna,\"Dev, Sr\",1000\r\n\"Luis \"\"Lucho\"\"\",,0.5\r\n"
        );
    }

    #[test]
    fn test_text_cells_never_open_as_formulas() {
        let sheet = Sheet {
            name: "Empleados",
            columns: &["Nombre", "Cargo", "Valor"],
            rows: vec![
                vec![Cell::text("=HYPERLINK(\"http://x\";\"clic\")"), Cell::text("+57 300"), Cell::Number(-5.0)],
                vec![Cell::text("@SUM(A1)"), Cell::text("Analista - Sr"), Cell::Number(1000.0)],
            ],
        };
        let csv = String::from_utf8(render_csv(&sheet)).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').split("\r\n").collect();
        assert_eq!(lines[1], "\"'=HYPERLINK(\"\"http://x\"\";\"\"clic\"\")\",'+57 300,-5");
        assert_eq!(lines[2], "'@SUM(A1),Analista - Sr,1000");
    }
}
