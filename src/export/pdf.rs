//! Form rendering.
//!
//! The projection engine only needs two capabilities from a renderer:
//! assign a value to a named field, and turn the result into bytes.
//! `SheetRenderer` is the built-in implementation; it draws a stand-in
//! sheet (master data block plus the 31-day table) with pdf-writer. A
//! deployment that owns the official template can swap in its own
//! `FormRenderer` without touching the engine.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::collections::BTreeMap;

use crate::core::fields::{
    CHECK_ON, CHECKBOX_PAYOUT_NO, CHECKBOX_PAYOUT_YES, HeaderField,
};
use crate::core::project::FilledForm;
use crate::core::slots::day_slots;
use crate::errors::AppResult;

/// The rendering capability the engine hands its slot→value map to.
pub trait FormRenderer {
    /// Set a named form field to a string value.
    fn set_field(&mut self, name: &str, value: &str);

    /// Render the document to bytes.
    fn render(self: Box<Self>) -> AppResult<Vec<u8>>;
}

/// Copy every projected slot into a renderer.
pub fn fill_renderer(renderer: &mut dyn FormRenderer, form: &FilledForm) {
    for (field, value) in form.iter() {
        renderer.set_field(field, value);
    }
}

/// Built-in renderer drawing a readable replacement sheet.
pub struct SheetRenderer {
    values: BTreeMap<String, String>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    title_font_size: f32,
}

impl Default for SheetRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetRenderer {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),

            // A4 portrait
            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 15.0,

            font_size: 8.5,
            title_font_size: 14.0,
        }
    }

    fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    fn checkbox(&self, field: &str) -> &'static str {
        if self.value(field) == CHECK_ON { "[X]" } else { "[ ]" }
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_table_row(&self, content: &mut Content, y: f32, cells: &[&str], widths: &[f32]) {
        let mut x = self.margin;
        for (i, text) in cells.iter().enumerate() {
            let w = widths[i];
            Self::draw_text(content, x + 4.0, y + 4.0, self.font_size, text);
            Self::draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }
}

impl FormRenderer for SheetRenderer {
    fn set_field(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    fn render(self: Box<Self>) -> AppResult<Vec<u8>> {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_id = Ref::new(4);
        let content_id = Ref::new(5);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let mut page = pdf.page(page_id);
        page.parent(pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), font_id);
        drop(page);

        let mut content = Content::new();

        // Title
        let mut y = self.page_h - self.margin;
        Self::draw_text(
            &mut content,
            self.margin,
            y,
            self.title_font_size,
            "Zeitaufzeichnung",
        );
        y -= 24.0;

        // Master data block, two columns of label: value
        let half = (self.page_w - 2.0 * self.margin) / 2.0;
        for pair in HeaderField::ALL.chunks(2) {
            let mut x = self.margin;
            for field in pair {
                let line = format!("{}: {}", field.label(), self.value(field.form_field()));
                Self::draw_text(&mut content, x, y, self.font_size, &line);
                x += half;
            }
            y -= 13.0;
        }

        // Payout checkboxes
        let payout_line = format!(
            "Mehrarbeitsstunden auszahlen:  Ja {}   Nein {}",
            self.checkbox(CHECKBOX_PAYOUT_YES),
            self.checkbox(CHECKBOX_PAYOUT_NO),
        );
        Self::draw_text(&mut content, self.margin, y, self.font_size, &payout_line);
        y -= 20.0;

        // Day table
        let widths = [
            30.0,
            (self.page_w - 2.0 * self.margin - 30.0) * 0.5,
            (self.page_w - 2.0 * self.margin - 30.0) * 0.25,
            (self.page_w - 2.0 * self.margin - 30.0) * 0.25,
        ];

        y -= self.row_h;
        content.save_state();
        content.set_fill_rgb(0.85, 0.87, 0.90);
        content.rect(self.margin, y, widths.iter().sum(), self.row_h);
        content.fill_nonzero();
        content.restore_state();
        self.draw_table_row(
            &mut content,
            y,
            &["Tag", "Kirchort / Dienst", "Beginn", "Ende"],
            &widths,
        );

        for day in 1..=31u32 {
            let Some(slots) = day_slots(day) else {
                continue;
            };

            y -= self.row_h;
            let day_label = day.to_string();
            self.draw_table_row(
                &mut content,
                y,
                &[
                    day_label.as_str(),
                    self.value(slots.location),
                    self.value(slots.start),
                    self.value(slots.end),
                ],
                &widths,
            );
        }

        pdf.stream(content_id, &content.finish());

        let mut pages = pdf.pages(pages_id);
        pages.count(1);
        pages.kids([page_id]);
        drop(pages);

        pdf.catalog(catalog_id).pages(pages_id);

        Ok(pdf.finish())
    }
}

/// Render a projected form with the built-in sheet renderer.
pub fn render_sheet(form: &FilledForm) -> AppResult<Vec<u8>> {
    let mut renderer = Box::new(SheetRenderer::new());
    fill_renderer(renderer.as_mut(), form);
    renderer.render()
}
