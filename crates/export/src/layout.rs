//! Fixed worksheet layout of the problem report.

use rust_xlsxwriter::{ColNum, RowNum};

pub const SHEET_NAME: &str = "Problem Report";

pub const HEADERS: [&str; 8] =
    ["ID", "Category", "Description", "Image", "Date", "Comment", "Progress", "Priority"];

/// Column widths in characters, aligned with [`HEADERS`].
pub const COLUMN_WIDTHS: [f64; 8] = [5.0, 15.0, 30.0, 20.0, 20.0, 30.0, 15.0, 10.0];

/// Height of every data row in points, tall enough for a thumbnail.
pub const ROW_HEIGHT: f64 = 50.0;

/// Thumbnail footprint in pixels.
pub const IMAGE_WIDTH: f64 = 100.0;
pub const IMAGE_HEIGHT: f64 = 75.0;

pub const NO_COMMENT: &str = "No Comment";

pub const COL_ID: ColNum = 0;
pub const COL_CATEGORY: ColNum = 1;
pub const COL_DESCRIPTION: ColNum = 2;
pub const COL_IMAGE: ColNum = 3;
pub const COL_DATE: ColNum = 4;
pub const COL_COMMENT: ColNum = 5;
pub const COL_PROGRESS: ColNum = 6;
pub const COL_PRIORITY: ColNum = 7;

pub const HEADER_ROW: RowNum = 0;
pub const FIRST_DATA_ROW: RowNum = 1;
