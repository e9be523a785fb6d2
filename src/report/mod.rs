//! Tabular report renderer
//!
//! Turns a [`PlanDocument`] into a paginated A4 PDF: repeated title block,
//! generation stamp, overview bullets, then the diet and workout tables
//! with row heights that follow wrapped cell text.
//!
//! Two-pass design: [`layout`] is a pure dry-run that measures every cell
//! and places every primitive on [`layout::Page`] values with absolute
//! coordinates, and [`pdf`] is a dumb draw pass that emits the placed
//! items through printpdf without doing any layout arithmetic of its own.
//! Rendering is total for any well-formed document; unsupported
//! characters are dropped, and a row taller than a whole page is clipped.

pub mod layout;
pub mod pdf;
pub mod text;

pub use layout::{layout_document, row_height, Item, Layout, Page};
pub use text::{measure, sanitize, wrap_lines, FontStyle};

use crate::errors::Result;
use crate::plan::PlanDocument;

/// Title repeated at the top of every page
pub const REPORT_TITLE: &str = "AI Health Architect";

/// A4 portrait, millimeters
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

/// Left/right/top page margin
pub const MARGIN: f32 = 10.0;

/// Printable width between the margins
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Line height inside table cells
pub const LINE_HEIGHT: f32 = 5.0;

/// Line height of overview bullet paragraphs
pub const BULLET_LINE_HEIGHT: f32 = 6.0;

/// Minimum height of a table body row
pub const MIN_ROW_HEIGHT: f32 = 8.0;

/// Height of a table header row
pub const HEADER_ROW_HEIGHT: f32 = 8.0;

/// Cursor limit; content past this line moves to the next page
pub const PAGE_BOTTOM_LIMIT: f32 = 270.0;

/// Forced page break before the workout section when the cursor is lower
pub const SECTION_BREAK_LIMIT: f32 = 250.0;

/// Baseline of the repeated page title
pub const TITLE_BASELINE: f32 = 17.0;

/// First content offset below the repeated page title
pub const TOP_OFFSET: f32 = 25.0;

/// Fixed column widths of the diet table (Day, Breakfast, Lunch, Dinner)
pub const DIET_WIDTHS: [f32; 4] = [25.0, 55.0, 55.0, 55.0];

/// Fixed column widths of the workout table (Day, Focus, Duration, Intensity)
pub const WORKOUT_WIDTHS: [f32; 4] = [25.0, 80.0, 40.0, 45.0];

/// Font sizes in points
pub const TITLE_FONT_SIZE: f32 = 20.0;
pub const SECTION_FONT_SIZE: f32 = 14.0;
pub const HEADING_FONT_SIZE: f32 = 12.0;
pub const STAMP_FONT_SIZE: f32 = 10.0;
pub const OVERVIEW_FONT_SIZE: f32 = 10.0;
pub const HEADER_FONT_SIZE: f32 = 10.0;
pub const BODY_FONT_SIZE: f32 = 9.0;

/// Border stroke width in millimeters
pub const BORDER_THICKNESS: f32 = 0.2;

/// RGB color, 0..=255 per channel
pub type Rgb8 = (u8, u8, u8);

pub const INDIGO: Rgb8 = (99, 102, 241);
pub const GRAY: Rgb8 = (100, 100, 100);
pub const BLACK: Rgb8 = (0, 0, 0);
pub const WHITE: Rgb8 = (255, 255, 255);

/// Render a plan document to PDF bytes.
///
/// Total for any well-formed [`PlanDocument`]; the only error source is
/// the PDF backend itself.
pub fn render(plan: &PlanDocument) -> Result<Vec<u8>> {
    let layout = layout::layout_document(plan);
    pdf::render_pdf(&layout, &plan.generated_date)
}
