//! PDF draw pass
//!
//! Emits a finished [`Layout`] through printpdf. No layout arithmetic
//! happens here beyond flipping the y axis; every coordinate was fixed by
//! the dry run.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, OffsetDateTime, PdfDocument,
    PdfLayerReference, Point, Polygon, Rgb,
};
use time::{Date, Month};

use super::layout::{Item, Layout};
use super::text::FontStyle;
use super::{Rgb8, BLACK, BORDER_THICKNESS, PAGE_HEIGHT, PAGE_WIDTH, REPORT_TITLE};
use crate::errors::{PlanError, Result};

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Oblique => &self.oblique,
        }
    }
}

fn color(rgb: Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        rgb.0 as f32 / 255.0,
        rgb.1 as f32 / 255.0,
        rgb.2 as f32 / 255.0,
        None,
    ))
}

/// Closed rectangle ring in bottom-up page coordinates
fn ring(x: f32, y_top: f32, w: f32, h: f32) -> Vec<(Point, bool)> {
    let top = PAGE_HEIGHT - y_top;
    let bottom = top - h;
    vec![
        (Point::new(Mm(x), Mm(top)), false),
        (Point::new(Mm(x + w), Mm(top)), false),
        (Point::new(Mm(x + w), Mm(bottom)), false),
        (Point::new(Mm(x), Mm(bottom)), false),
    ]
}

fn draw_page(layer: &PdfLayerReference, fonts: &Fonts, items: &[Item]) {
    for item in items {
        match item {
            Item::Rect {
                x,
                y,
                w,
                h,
                fill,
                stroke,
            } => {
                if let Some(fill_color) = fill {
                    layer.set_fill_color(color(*fill_color));
                    layer.add_polygon(Polygon {
                        rings: vec![ring(*x, *y, *w, *h)],
                        mode: PaintMode::Fill,
                        winding_order: WindingOrder::NonZero,
                    });
                }
                if *stroke {
                    layer.set_outline_color(color(BLACK));
                    layer.set_outline_thickness(BORDER_THICKNESS);
                    layer.add_line(Line {
                        points: ring(*x, *y, *w, *h),
                        is_closed: true,
                    });
                }
            }
            Item::Span {
                text,
                x,
                y,
                size,
                style,
                color: text_color,
            } => {
                layer.set_fill_color(color(*text_color));
                layer.use_text(text, *size, Mm(*x), Mm(PAGE_HEIGHT - y), fonts.get(*style));
            }
        }
    }
}

/// Midnight UTC for a `%Y-%m-%d` stamp, if it parses
fn metadata_date(generated_date: &str) -> Option<OffsetDateTime> {
    let mut parts = generated_date.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    let date = Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()?;
    Some(date.midnight().assume_utc())
}

/// Serialize a layout to PDF bytes.
///
/// Creation and modification metadata are pinned to the plan's
/// generation date so re-rendering the same plan does not shift the
/// document timestamps.
pub fn render_pdf(layout: &Layout, generated_date: &str) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "content",
    );
    let doc = match metadata_date(generated_date) {
        Some(date) => doc
            .with_creation_date(date)
            .with_mod_date(date)
            .with_metadata_date(date),
        None => doc,
    };

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PlanError::PdfError(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PlanError::PdfError(e.to_string()))?,
        oblique: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| PlanError::PdfError(e.to_string()))?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_ref, layer_ref) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            doc.get_page(page_ref).get_layer(layer_ref)
        };
        draw_page(&layer, &fonts, &page.items);
    }

    doc.save_to_bytes()
        .map_err(|e| PlanError::PdfError(e.to_string()))
}
