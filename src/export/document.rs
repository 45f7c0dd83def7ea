// ============================================================================
// EXPORT DOCUMENT - Filas de exportación (independientes del formato)
// ============================================================================
// Transformación pura: colección -> líneas PDF o filas de hoja. Ni el PDF ni el
// CSV saben nada de empleados o contratos.
// ============================================================================

use std::fmt;

/// Coordenadas del título y de la primera fila (mm, origen arriba-izquierda)
pub const MARGIN_X_MM: f64 = 10.0;
pub const TITLE_Y_MM: f64 = 10.0;
pub const FIRST_ROW_Y_MM: f64 = 20.0;
pub const ROW_STEP_MM: f64 = 10.0;

/// A4 vertical
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
const BOTTOM_LIMIT_MM: f64 = PAGE_HEIGHT_MM - 10.0;

/// Celda tipada de una hoja
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn optional_number(value: Option<f64>) -> Self {
        value.map(Cell::Number).unwrap_or(Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Number(number) => write!(f, "{}", number),
            Cell::Empty => Ok(()),
        }
    }
}

/// Hoja con nombre, columnas ordenadas y filas
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

#[cfg(test)]
impl Sheet {
    /// Celda de la fila `row` bajo la columna `column`
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.columns.iter().position(|c| *c == column)?;
        self.rows.get(row)?.get(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfLine {
    pub x_mm: f64,
    pub y_mm: f64,
    pub text: String,
}

/// Líneas de texto agrupadas por página
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfDocument {
    pub pages: Vec<Vec<PdfLine>>,
}

impl PdfDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &PdfLine> {
        self.pages.iter().flatten()
    }
}

/// Registro que sabe exportarse
pub trait Exportable {
    /// Título de la primera página del PDF
    const PDF_TITLE: &'static str;
    const SHEET_NAME: &'static str;
    const COLUMNS: &'static [&'static str];
    /// Nombre base de los archivos descargados ("empleados")
    const FILE_STEM: &'static str;

    fn pdf_line(&self) -> String;

    /// Una celda por columna, en el orden de `COLUMNS`
    fn sheet_row(&self) -> Vec<Cell>;
}

/// Título en (10, 10) y una línea por registro desde y = 20, cada 10 mm.
/// Al pasar el borde inferior se continúa en una página nueva desde arriba.
pub fn to_pdf_document<E: Exportable>(records: &[E]) -> PdfDocument {
    let mut pages = vec![vec![PdfLine {
        x_mm: MARGIN_X_MM,
        y_mm: TITLE_Y_MM,
        text: E::PDF_TITLE.to_string(),
    }]];
    let mut y = FIRST_ROW_Y_MM;

    for record in records {
        if y > BOTTOM_LIMIT_MM {
            pages.push(Vec::new());
            y = TITLE_Y_MM;
        }
        if let Some(page) = pages.last_mut() {
            page.push(PdfLine {
                x_mm: MARGIN_X_MM,
                y_mm: y,
                text: record.pdf_line(),
            });
        }
        y += ROW_STEP_MM;
    }

    PdfDocument { pages }
}

pub fn to_sheet<E: Exportable>(records: &[E]) -> Sheet {
    Sheet {
        name: E::SHEET_NAME,
        columns: E::COLUMNS,
        rows: records.iter().map(Exportable::sheet_row).collect(),
    }
}
