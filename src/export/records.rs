// Filas de exportación de empleados y contratos

use super::document::{Cell, Exportable};
use crate::models::{Contract, Employee};
use crate::utils::dates::format_locale_date;

const NOT_AVAILABLE: &str = "N/A";

impl Exportable for Employee {
    const PDF_TITLE: &'static str = "Empleados SIRH Molino";
    const SHEET_NAME: &'static str = "Empleados";
    // Sin columna de contraseña
    const COLUMNS: &'static [&'static str] =
        &["Documento", "Nombre", "Apellido", "Edad", "Genero", "Cargo", "Estado", "Correo"];
    const FILE_STEM: &'static str = "empleados";

    fn pdf_line(&self) -> String {
        format!(
            "{} - {} {} - {} años - {} - {} - {}",
            self.nro_documento,
            self.nombre,
            self.apellido,
            self.edad.map(|e| e.to_string()).unwrap_or_else(|| "-".to_string()),
            self.genero.map(|g| g.as_str()).unwrap_or("-"),
            self.cargo,
            self.estado,
        )
    }

    fn sheet_row(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.nro_documento),
            Cell::text(&self.nombre),
            Cell::text(&self.apellido),
            Cell::optional_number(self.edad.map(f64::from)),
            self.genero.map(|g| Cell::text(g.as_str())).unwrap_or(Cell::Empty),
            Cell::text(&self.cargo),
            Cell::text(self.estado.as_str()),
            Cell::text(&self.correo),
        ]
    }
}

impl Exportable for Contract {
    const PDF_TITLE: &'static str = "Contratos SIRH Molino";
    const SHEET_NAME: &'static str = "Contratos";
    const COLUMNS: &'static [&'static str] = &["Empleado", "Cargo", "Fecha_Inicio", "Fecha_Fin", "Valor"];
    const FILE_STEM: &'static str = "contratos";

    fn pdf_line(&self) -> String {
        format!(
            "{} - {} - {} / {} - ${}",
            self.employee_name().unwrap_or(NOT_AVAILABLE),
            self.cargo().unwrap_or(NOT_AVAILABLE),
            format_locale_date(&self.fecha_inicio),
            format_locale_date(&self.fecha_fin),
            self.valor,
        )
    }

    fn sheet_row(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.employee_name().unwrap_or(NOT_AVAILABLE)),
            Cell::text(self.cargo().unwrap_or(NOT_AVAILABLE)),
            Cell::text(format_locale_date(&self.fecha_inicio)),
            Cell::text(format_locale_date(&self.fecha_fin)),
            Cell::Number(self.valor),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::document::{to_pdf_document, to_sheet};
    use crate::models::{EmployeeStatus, Gender};

    fn contracts() -> Vec<Contract> {
        serde_json::from_str(
            r#"[{"_id":"c1","empleado_id":{"nombre":"Ana"},"cargo":"Dev",
                 "fecha_inicio":"2024-01-01","fecha_fin":"2024-12-31","valor":1000}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_contract_sheet_row() {
        let sheet = to_sheet(&contracts());
        assert_eq!(sheet.name, "Contratos");
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.cell(0, "Empleado"), Some(&Cell::text("Ana")));
        assert_eq!(sheet.cell(0, "Cargo"), Some(&Cell::text("Dev")));
        assert_eq!(sheet.cell(0, "Fecha_Inicio"), Some(&Cell::text("1/1/2024")));
        assert_eq!(sheet.cell(0, "Fecha_Fin"), Some(&Cell::text("12/31/2024")));
        assert_eq!(sheet.cell(0, "Valor"), Some(&Cell::Number(1000.0)));
    }

    #[test]
    fn test_contract_pdf_line_with_missing_employee() {
        let contract: Contract = serde_json::from_str(
            r#"{"_id":"c2","empleado_id":null,"fecha_inicio":"","fecha_fin":"2024-03-01","valor":99.5}"#,
        )
        .unwrap();
        assert_eq!(contract.pdf_line(), "N/A - N/A - Invalid Date / 3/1/2024 - $99.5");

        let doc = to_pdf_document(&contracts());
        let texts: Vec<&str> = doc.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Contratos SIRH Molino", "Ana - Dev - 1/1/2024 / 12/31/2024 - $1000"]);
    }

    #[test]
    fn test_employee_rows() {
        let mut employee = Employee {
            id: "e1".into(),
            nro_documento: "1020".into(),
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            edad: Some(30),
            genero: Some(Gender::Femenino),
            cargo: "Analista".into(),
            estado: EmployeeStatus::Activo,
            correo: "ana@rrhh.com".into(),
            password: "secreto".into(),
        };
        assert_eq!(employee.pdf_line(), "1020 - Ana Pérez - 30 años - Femenino - Analista - activo");

        let row = employee.sheet_row();
        assert_eq!(row.len(), Employee::COLUMNS.len());
        assert_eq!(row[3], Cell::Number(30.0));
        assert!(!row.contains(&Cell::text("secreto")));

        employee.edad = None;
        employee.genero = None;
        assert_eq!(employee.pdf_line(), "1020 - Ana Pérez - - años - - - Analista - activo");
        assert_eq!(employee.sheet_row()[4], Cell::Empty);
    }
}
