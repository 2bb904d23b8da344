use std::path::{Path, PathBuf};

use problem_tracker_core::ProblemRecord;
use problem_tracker_storage::MediaStore;
use rust_xlsxwriter::{Format, Image, RowNum, Workbook, Worksheet};

use crate::ExportError;
use crate::layout::{
    COL_CATEGORY, COL_COMMENT, COL_DATE, COL_DESCRIPTION, COL_ID, COL_IMAGE, COL_PRIORITY,
    COL_PROGRESS, COLUMN_WIDTHS, FIRST_DATA_ROW, HEADER_ROW, HEADERS, IMAGE_HEIGHT, IMAGE_WIDTH,
    NO_COMMENT, ROW_HEIGHT, SHEET_NAME,
};

/// Outcome of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub images_embedded: usize,
}

/// Builds the problem report workbook and writes it to a fixed path.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    media: MediaStore,
    output_path: PathBuf,
}

impl ReportExporter {
    #[must_use]
    pub fn new(media: MediaStore, output_path: impl Into<PathBuf>) -> Self {
        Self { media, output_path: output_path.into() }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write `problems` in the given order, replacing any previous report.
    ///
    /// # Errors
    /// Returns error if the workbook cannot be built or saved. A missing image
    /// file is not an error.
    pub fn export(&self, problems: &[ProblemRecord]) -> Result<ExportSummary, ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header_format = Format::new().set_bold();
        for (col, header) in (0..).zip(HEADERS) {
            worksheet.write_string_with_format(HEADER_ROW, col, header, &header_format)?;
        }
        for (col, width) in (0..).zip(COLUMN_WIDTHS) {
            worksheet.set_column_width(col, width)?;
        }

        let mut images_embedded = 0usize;
        for (row, problem) in (FIRST_DATA_ROW..).zip(problems) {
            worksheet.set_row_height(row, ROW_HEIGHT)?;
            write_text_cells(worksheet, row, problem)?;
            if self.insert_picture(worksheet, row, problem)? {
                images_embedded += 1;
            }
        }

        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        workbook.save(&self.output_path)?;

        let summary = ExportSummary {
            path: self.output_path.clone(),
            rows: problems.len(),
            images_embedded,
        };
        tracing::info!(
            path = %summary.path.display(),
            rows = summary.rows,
            images = summary.images_embedded,
            "Problem report exported"
        );
        Ok(summary)
    }

    /// Float the record's photo over its Image cell. Returns whether one was placed.
    fn insert_picture(
        &self,
        worksheet: &mut Worksheet,
        row: RowNum,
        problem: &ProblemRecord,
    ) -> Result<bool, ExportError> {
        let Some(name) = problem.image.as_deref().filter(|n| !n.is_empty()) else {
            return Ok(false);
        };
        if !self.media.exists(name) {
            tracing::debug!(id = problem.id, image = name, "Image file missing, skipped");
            return Ok(false);
        }

        let image = match Image::new(self.media.path_for(name)) {
            Ok(image) => image.set_scale_to_size(IMAGE_WIDTH, IMAGE_HEIGHT, false),
            Err(e) => {
                tracing::warn!(id = problem.id, image = name, error = %e, "Unreadable image, skipped");
                return Ok(false);
            },
        };
        worksheet.insert_image(row, COL_IMAGE, &image)?;
        Ok(true)
    }
}

fn write_text_cells(
    worksheet: &mut Worksheet,
    row: RowNum,
    problem: &ProblemRecord,
) -> Result<(), ExportError> {
    worksheet.write_number(row, COL_ID, problem.id as f64)?;
    worksheet.write_string(row, COL_CATEGORY, &problem.category)?;
    worksheet.write_string(row, COL_DESCRIPTION, &problem.description)?;
    worksheet.write_string(row, COL_DATE, &problem.date)?;
    worksheet.write_string(row, COL_COMMENT, problem.display_comment().unwrap_or(NO_COMMENT))?;
    worksheet.write_string(row, COL_PROGRESS, &problem.progress)?;
    worksheet.write_string(row, COL_PRIORITY, &problem.priority)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, DataType as _, Reader as _, Xlsx, open_workbook};
    use std::io::Read as _;
    use tempfile::TempDir;

    /// Pixels to drawing units.
    const EMU_PER_PIXEL: f64 = 9525.0;

    /// Smallest valid PNG: 1x1 transparent pixel.
    const PNG_1X1: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    fn exporter() -> (ReportExporter, MediaStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let media = MediaStore::open(dir.path().join("uploads")).unwrap();
        let exporter = ReportExporter::new(media.clone(), dir.path().join("problem_report.xlsx"));
        (exporter, media, dir)
    }

    fn problem(id: i64, image: Option<&str>, comment: Option<&str>) -> ProblemRecord {
        ProblemRecord {
            id,
            category: "Leak".to_owned(),
            description: "Pipe leak".to_owned(),
            image: image.map(str::to_owned),
            date: "2024-01-07 10:00:00".to_owned(),
            comment: comment.map(str::to_owned),
            progress: "Not Started".to_owned(),
            priority: "High".to_owned(),
        }
    }

    fn read_sheet(path: &Path) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        workbook.worksheet_range(SHEET_NAME).unwrap()
    }

    fn text(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
        range.get_value((row, col)).map(ToString::to_string).unwrap_or_default()
    }

    fn number(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<f64> {
        range.get_value((row, col)).and_then(|d| d.as_f64())
    }

    fn drawing_xml(path: &Path) -> String {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut xml = String::new();
        archive.by_name("xl/drawings/drawing1.xml").unwrap().read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_empty_store_writes_header_only() {
        let (exporter, _media, _dir) = exporter();
        let summary = exporter.export(&[]).unwrap();
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.images_embedded, 0);
        assert!(summary.path.is_file());

        let range = read_sheet(&summary.path);
        assert_eq!(range.height(), 1);
        let header: Vec<String> = range.rows().next().unwrap().iter().map(ToString::to_string).collect();
        assert_eq!(header, HEADERS);
    }

    #[test]
    fn test_missing_image_file_is_skipped() {
        let (exporter, _media, _dir) = exporter();
        let summary = exporter.export(&[problem(1, Some("gone.png"), Some("call plumber"))]).unwrap();
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.images_embedded, 0);

        let range = read_sheet(&summary.path);
        assert_eq!(number(&range, 1, 0), Some(1.0));
        assert_eq!(text(&range, 1, 1), "Leak");
        assert_eq!(text(&range, 1, 2), "Pipe leak");
        assert_eq!(text(&range, 1, 3), "");
        assert_eq!(text(&range, 1, 4), "2024-01-07 10:00:00");
        assert_eq!(text(&range, 1, 5), "call plumber");
        assert_eq!(text(&range, 1, 6), "Not Started");
        assert_eq!(text(&range, 1, 7), "High");
    }

    #[test]
    fn test_empty_and_absent_comment_render_placeholder() {
        let (exporter, _media, _dir) = exporter();
        let summary = exporter.export(&[problem(2, None, Some("")), problem(1, None, None)]).unwrap();
        let range = read_sheet(&summary.path);
        assert_eq!(text(&range, 1, 5), NO_COMMENT);
        assert_eq!(text(&range, 2, 5), NO_COMMENT);
    }

    #[test]
    fn test_rows_follow_given_order() {
        let (exporter, _media, _dir) = exporter();
        let summary =
            exporter.export(&[problem(3, None, None), problem(1, None, None), problem(2, None, None)]).unwrap();
        let range = read_sheet(&summary.path);
        let ids: Vec<Option<f64>> = (1..=3).map(|row| number(&range, row, 0)).collect();
        assert_eq!(ids, vec![Some(3.0), Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_existing_image_is_embedded() {
        let (exporter, media, _dir) = exporter();
        media.save("leak.png", PNG_1X1).unwrap();
        let summary = exporter
            .export(&[problem(1, Some("leak.png"), None), problem(2, Some("missing.png"), None)])
            .unwrap();
        assert_eq!(summary.images_embedded, 1);
        assert_eq!(summary.rows, 2);
    }

    #[test]
    fn test_image_anchored_at_column_d_of_its_row_and_scaled() {
        let (exporter, media, _dir) = exporter();
        media.save("leak.png", PNG_1X1).unwrap();
        let summary =
            exporter.export(&[problem(2, None, None), problem(1, Some("leak.png"), None)]).unwrap();
        assert_eq!(summary.images_embedded, 1);

        let xml = drawing_xml(&summary.path);
        assert_eq!(xml.matches("<xdr:twoCellAnchor").count(), 1);
        let from = format!(
            "<xdr:from><xdr:col>{COL_IMAGE}</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>2</xdr:row>"
        );
        assert!(xml.contains(&from), "anchor not at D3: {xml}");
        let ext = format!(
            "<a:ext cx=\"{:.0}\" cy=\"{:.0}\"/>",
            IMAGE_WIDTH * EMU_PER_PIXEL,
            IMAGE_HEIGHT * EMU_PER_PIXEL
        );
        assert!(xml.contains(&ext), "image not scaled to 100x75: {xml}");
    }

    #[test]
    fn test_undecodable_image_is_skipped() {
        let (exporter, media, _dir) = exporter();
        media.save("notes.txt", b"not an image").unwrap();
        let summary = exporter.export(&[problem(1, Some("notes.txt"), None)]).unwrap();
        assert_eq!(summary.images_embedded, 0);
    }

    #[test]
    fn test_export_overwrites_previous_report() {
        let (exporter, _media, _dir) = exporter();
        exporter.export(&[problem(1, None, None), problem(2, None, None)]).unwrap();
        let summary = exporter.export(&[]).unwrap();
        assert_eq!(read_sheet(&summary.path).height(), 1);
    }
}
