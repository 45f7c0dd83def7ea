// ============================================================================
// PDF WRITER - PDF 1.4 mínimo: texto Helvetica sobre páginas A4
// ============================================================================
// Una fuente estándar (sin embebido), codificación WinAnsi, un content stream
// por página. Suficiente para listados de texto plano.
// ============================================================================

use super::document::{PdfDocument, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

pub const FONT_SIZE_PT: f64 = 16.0;

fn mm_to_pt(mm: f64) -> f64 {
    mm * 72.0 / 25.4
}

/// Byte WinAnsi de un carácter; lo que no existe en la tabla sale como '?'
fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        },
    }
}

/// Literal de string PDF `( ... )` con escapes
fn pdf_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            '\n' | '\r' | '\t' => out.push(b' '),
            _ => out.push(win_ansi_byte(c)),
        }
    }
    out.push(b')');
    out
}

fn content_stream(lines: &[super::document::PdfLine]) -> Vec<u8> {
    let page_height = mm_to_pt(PAGE_HEIGHT_MM);
    let mut stream = Vec::new();
    for line in lines {
        let x = mm_to_pt(line.x_mm);
        let y = page_height - mm_to_pt(line.y_mm);
        stream.extend_from_slice(format!("BT /F1 {} Tf {:.2} {:.2} Td ", FONT_SIZE_PT, x, y).as_bytes());
        stream.extend_from_slice(&pdf_string(&line.text));
        stream.extend_from_slice(b" Tj ET\n");
    }
    stream
}

struct PdfWriter {
    buffer: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buffer = Vec::new();
        // Comentario binario: marca el archivo como no-ASCII para los lectores
        buffer.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self { buffer, offsets: Vec::new() }
    }

    /// Escribe el objeto `id` (los ids se asignan en orden 1..n)
    fn object(&mut self, body: &[u8]) {
        self.offsets.push(self.buffer.len());
        let id = self.offsets.len();
        self.buffer.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        self.buffer.extend_from_slice(body);
        self.buffer.extend_from_slice(b"\nendobj\n");
    }

    fn stream_object(&mut self, data: &[u8]) {
        let mut body = format!("<< /Length {} >>\nstream\n", data.len()).into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(b"\nendstream");
        self.object(&body);
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref_start = self.buffer.len();
        let count = self.offsets.len() + 1;
        self.buffer.extend_from_slice(format!("xref\n0 {}\n", count).as_bytes());
        self.buffer.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.buffer.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        self.buffer.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
                count, root, xref_start
            )
            .as_bytes(),
        );
        self.buffer
    }
}

/// Serializa el documento. Objetos: 1 catálogo, 2 árbol de páginas, 3 fuente,
/// luego (página, contenido) por cada página.
pub fn render_pdf(document: &PdfDocument) -> Vec<u8> {
    let page_count = document.page_count().max(1);
    let page_ids: Vec<usize> = (0..page_count).map(|i| 4 + i * 2).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");

    let mut writer = PdfWriter::new();
    writer.object(b"<< /Type /Catalog /Pages 2 0 R >>");
    writer.object(format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, page_count).as_bytes());
    writer.object(b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>");

    let media_box = format!("[0 0 {:.2} {:.2}]", mm_to_pt(PAGE_WIDTH_MM), mm_to_pt(PAGE_HEIGHT_MM));
    for (index, page_id) in page_ids.iter().enumerate() {
        let lines = document.pages.get(index).map(Vec::as_slice).unwrap_or(&[]);
        writer.object(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox {} /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                media_box,
                page_id + 1
            )
            .as_bytes(),
        );
        writer.stream_object(&content_stream(lines));
    }

    writer.finish(1)
}
