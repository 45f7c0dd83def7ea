// ============================================================================
// EXPORT MODULE - PDF y hoja de cálculo a partir de la colección en memoria
// ============================================================================

pub mod document;
pub mod records;
pub mod pdf;
pub mod csv;

pub use document::{to_pdf_document, to_sheet, Cell, Exportable, PdfDocument, PdfLine, Sheet};

use wasm_bindgen::JsValue;

use crate::utils::browser::download_bytes;

/// Descarga `<stem>.pdf`
pub fn download_pdf<E: Exportable>(records: &[E]) -> Result<(), JsValue> {
    let bytes = pdf::render_pdf(&to_pdf_document(records));
    download_bytes(&format!("{}.pdf", E::FILE_STEM), "application/pdf", &bytes)
}

/// Descarga `<stem>.csv` (hoja de cálculo)
pub fn download_sheet<E: Exportable>(records: &[E]) -> Result<(), JsValue> {
    let bytes = csv::render_csv(&to_sheet(records));
    download_bytes(&format!("{}.csv", E::FILE_STEM), "text/csv;charset=utf-8", &bytes)
}
