use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook construction or serialization failed.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Output directory could not be prepared.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
