//! Dry-run layout pass
//!
//! Places every primitive of the report on [`Page`] values before anything
//! is drawn. Row heights are computed from wrapped-line counts first, so
//! the draw pass can emit a uniform border box per row; a row is never
//! split across pages.

use super::text::{self, FontStyle};
use super::*;
use crate::plan::PlanDocument;

/// Horizontal padding inside a table cell
pub const CELL_PADDING: f32 = 1.0;

/// A placed primitive. Coordinates are millimeters from the top-left page
/// corner; `y` of a span is the text baseline, `y` of a rect is its top.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Span {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        color: Rgb8,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<Rgb8>,
        stroke: bool,
    },
}

/// One laid-out page: placed items plus the final cursor position
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    pub cursor: f32,
}

/// The complete laid-out document
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub pages: Vec<Page>,
}

/// Height reserved for a table row: the maximum wrapped-line count across
/// its cells times the line height, floored at [`MIN_ROW_HEIGHT`].
pub fn row_height(widths: &[f32], cells: &[&str]) -> f32 {
    let mut max_lines = 1usize;
    for (width, cell) in widths.iter().zip(cells.iter()) {
        max_lines = max_lines.max(text::measure(cell, width - 2.0 * CELL_PADDING));
    }
    (max_lines as f32 * LINE_HEIGHT).max(MIN_ROW_HEIGHT)
}

struct Layouter {
    done: Vec<Page>,
    current: Page,
    y: f32,
}

fn fresh_page() -> Page {
    let title_width = text::text_width(REPORT_TITLE, TITLE_FONT_SIZE, FontStyle::Bold);
    Page {
        items: vec![Item::Span {
            text: REPORT_TITLE.to_string(),
            x: (PAGE_WIDTH - title_width) / 2.0,
            y: TITLE_BASELINE,
            size: TITLE_FONT_SIZE,
            style: FontStyle::Bold,
            color: INDIGO,
        }],
        cursor: TOP_OFFSET,
    }
}

impl Layouter {
    fn new() -> Self {
        Layouter {
            done: Vec::new(),
            current: fresh_page(),
            y: TOP_OFFSET,
        }
    }

    fn advance(&mut self, height: f32) {
        self.y += height;
        self.current.cursor = self.y;
    }

    fn break_page(&mut self) {
        let finished = std::mem::replace(&mut self.current, fresh_page());
        self.done.push(finished);
        self.y = TOP_OFFSET;
    }

    /// Start a new page if `height` does not fit above the bottom limit
    fn ensure_room(&mut self, height: f32) {
        if self.y + height > PAGE_BOTTOM_LIMIT {
            self.break_page();
        }
    }

    fn span(&mut self, text: String, x: f32, y: f32, size: f32, style: FontStyle, color: Rgb8) {
        self.current.items.push(Item::Span {
            text,
            x,
            y,
            size,
            style,
            color,
        });
    }

    /// One horizontally centered line in a cell of the given height
    fn centered_line(&mut self, text: &str, cell_height: f32, size: f32, style: FontStyle, color: Rgb8) {
        let width = text::text_width(text, size, style);
        let x = ((PAGE_WIDTH - width) / 2.0).max(MARGIN);
        let baseline = self.y + cell_height - 3.0;
        self.span(text.to_string(), x, baseline, size, style, color);
        self.advance(cell_height);
    }

    /// Left-aligned heading line
    fn heading(&mut self, text: &str, cell_height: f32, size: f32, color: Rgb8) {
        let baseline = self.y + cell_height - 2.0;
        self.span(text.to_string(), MARGIN, baseline, size, FontStyle::Bold, color);
        self.advance(cell_height);
    }

    /// Wrapped bullet paragraphs, breakable between lines
    fn bullets(&mut self, entries: &[String]) {
        for entry in entries {
            let lines = text::wrap_lines(
                &format!("- {}", entry),
                CONTENT_WIDTH,
                OVERVIEW_FONT_SIZE,
                FontStyle::Regular,
            );
            for line in lines {
                self.ensure_room(BULLET_LINE_HEIGHT);
                let baseline = self.y + BULLET_LINE_HEIGHT - 1.5;
                self.span(
                    line,
                    MARGIN,
                    baseline,
                    OVERVIEW_FONT_SIZE,
                    FontStyle::Regular,
                    BLACK,
                );
                self.advance(BULLET_LINE_HEIGHT);
            }
        }
    }

    /// One table: section heading, styled header row, uniform-border body
    /// rows. The header is not repeated after a mid-table page break.
    fn table(&mut self, title: &str, headers: &[&str], widths: &[f32], rows: &[Vec<String>]) {
        // keep the heading and header row attached to at least one body row
        self.ensure_room(10.0 + HEADER_ROW_HEIGHT + MIN_ROW_HEIGHT);
        self.heading(title, 10.0, SECTION_FONT_SIZE, INDIGO);

        // header row: filled cells, centered bold labels
        let mut x = MARGIN;
        let header_y = self.y;
        for (width, label) in widths.iter().zip(headers.iter()) {
            self.current.items.push(Item::Rect {
                x,
                y: header_y,
                w: *width,
                h: HEADER_ROW_HEIGHT,
                fill: Some(INDIGO),
                stroke: true,
            });
            let label_width = text::text_width(label, HEADER_FONT_SIZE, FontStyle::Bold);
            let label_x = x + ((width - label_width) / 2.0).max(CELL_PADDING);
            self.span(
                label.to_string(),
                label_x,
                header_y + HEADER_ROW_HEIGHT - 2.5,
                HEADER_FONT_SIZE,
                FontStyle::Bold,
                WHITE,
            );
            x += width;
        }
        self.advance(HEADER_ROW_HEIGHT);

        for row in rows {
            self.body_row(widths, row);
        }
    }

    fn body_row(&mut self, widths: &[f32], cells: &[String]) {
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        let mut height = row_height(widths, &refs);

        // never split a row; move it whole to a fresh page
        if self.y + height > PAGE_BOTTOM_LIMIT {
            self.break_page();
        }

        let mut wrapped: Vec<Vec<String>> = widths
            .iter()
            .zip(cells.iter())
            .map(|(width, cell)| {
                text::wrap_lines(
                    cell,
                    width - 2.0 * CELL_PADDING,
                    BODY_FONT_SIZE,
                    FontStyle::Regular,
                )
            })
            .collect();

        // a row taller than a whole printable page is clipped, not looped on
        let available = PAGE_BOTTOM_LIMIT - self.y;
        if height > available {
            let max_lines = ((available / LINE_HEIGHT).floor() as usize).max(1);
            for lines in &mut wrapped {
                lines.truncate(max_lines);
            }
            height = (max_lines as f32 * LINE_HEIGHT).max(MIN_ROW_HEIGHT).min(available);
        }

        let row_y = self.y;
        let mut x = MARGIN;
        for (width, lines) in widths.iter().zip(wrapped.iter()) {
            self.current.items.push(Item::Rect {
                x,
                y: row_y,
                w: *width,
                h: height,
                fill: None,
                stroke: true,
            });
            for (line_index, line) in lines.iter().enumerate() {
                let baseline = row_y + (line_index as f32 + 1.0) * LINE_HEIGHT - 1.5;
                self.span(
                    line.clone(),
                    x + CELL_PADDING,
                    baseline,
                    BODY_FONT_SIZE,
                    FontStyle::Regular,
                    BLACK,
                );
            }
            x += width;
        }
        self.advance(height);
    }

    fn finish(mut self) -> Layout {
        self.done.push(self.current);
        Layout { pages: self.done }
    }
}

/// Lay out a complete plan document. Pure and deterministic; performs no
/// drawing and cannot fail.
pub fn layout_document(plan: &PlanDocument) -> Layout {
    let mut layouter = Layouter::new();

    // generation stamp, first page only
    layouter.centered_line(
        &format!("Generated: {}", text::sanitize(&plan.generated_date)),
        10.0,
        STAMP_FONT_SIZE,
        FontStyle::Oblique,
        GRAY,
    );
    layouter.advance(5.0);

    layouter.heading("Overview", 8.0, HEADING_FONT_SIZE, BLACK);
    layouter.bullets(&plan.overview);
    layouter.advance(5.0);

    let diet_rows: Vec<Vec<String>> = plan
        .diet_rows
        .iter()
        .map(|r| {
            vec![
                r.day.clone(),
                r.breakfast.clone(),
                r.lunch.clone(),
                r.dinner.clone(),
            ]
        })
        .collect();
    layouter.table(
        "Diet Schedule",
        &["Day", "Breakfast", "Lunch", "Dinner"],
        &DIET_WIDTHS,
        &diet_rows,
    );

    layouter.advance(10.0);
    if layouter.y > SECTION_BREAK_LIMIT {
        layouter.break_page();
    }

    let workout_rows: Vec<Vec<String>> = plan
        .workout_rows
        .iter()
        .map(|r| {
            vec![
                r.day.clone(),
                r.workout.clone(),
                r.duration.clone(),
                r.intensity.clone(),
            ]
        })
        .collect();
    layouter.table(
        "Workout Schedule",
        &["Day", "Focus Area", "Duration", "Intensity"],
        &WORKOUT_WIDTHS,
        &workout_rows,
    );

    layouter.finish()
}
