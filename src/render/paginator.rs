//! Greedy word wrap and pagination
//!
//! Each source page starts on a new destination page. Within a page, lines
//! are only broken at the newlines already present in the extracted text and
//! wherever the next word would not fit in the usable width. Widths are
//! measured through the [`Canvas`], so proportional fonts wrap where the
//! rendered text actually runs out of room.
//!
//! Page breaks caused by running past the bottom margin are deferred until
//! something is drawn or advanced on the next page. The forced break between
//! two source pages reuses a deferred break rather than adding a second
//! one, so a source page that needs K destination pages gets exactly K, and
//! the document never ends with an empty overflow page.

use crate::model::{PageGeometry, PageText};

use super::canvas::Canvas;

/// Counts reported after a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSummary {
    pub source_pages: usize,
    pub destination_pages: usize,
    pub lines_drawn: usize,
}

/// Mutable state of one layout pass
#[derive(Debug)]
struct LayoutState {
    /// Baseline of the next line, in mm from the page bottom
    cursor_y: f32,
    /// Words accepted for the line being built
    line: String,
    /// 0-based destination page currently open on the canvas
    page_index: usize,
    /// The cursor ran past the bottom margin and was reset to the top, but
    /// the canvas has not moved to the next page yet
    break_pending: bool,
    lines_drawn: usize,
}

/// Lays out page text onto a [`Canvas`] using a fixed [`PageGeometry`]
pub struct Paginator {
    geometry: PageGeometry,
}

impl Paginator {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Lay out every source page in order
    pub fn run<C: Canvas + ?Sized>(&self, canvas: &mut C, pages: &[PageText]) -> LayoutSummary {
        let geometry = &self.geometry;
        canvas.set_font(geometry.font, geometry.font_size);

        let mut state = LayoutState {
            cursor_y: geometry.top(),
            line: String::new(),
            page_index: 0,
            break_pending: false,
            lines_drawn: 0,
        };

        for (index, page) in pages.iter().enumerate() {
            if index > 0 {
                // Previous source page is done
                self.break_page(canvas, &mut state);
            }

            for line in page.lines() {
                self.layout_line(canvas, &mut state, line);
            }
        }

        if state.break_pending {
            log::debug!("Dropping page break after the last line");
        }

        LayoutSummary {
            source_pages: pages.len(),
            destination_pages: state.page_index + 1,
            lines_drawn: state.lines_drawn,
        }
    }

    fn layout_line<C: Canvas + ?Sized>(&self, canvas: &mut C, state: &mut LayoutState, line: &str) {
        if line.trim().is_empty() {
            self.advance(canvas, state);
            return;
        }

        let geometry = &self.geometry;
        let max_width = geometry.usable_width();

        for word in line.split_whitespace() {
            let candidate = if state.line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", state.line, word)
            };

            let width = canvas.measure_text_width(&candidate, geometry.font, geometry.font_size);
            if width <= max_width {
                state.line = candidate;
            } else {
                // A word too wide on its own lands here with an empty buffer
                // and is placed alone on the next line
                self.flush_line(canvas, state);
                state.line = word.to_string();
            }
        }

        self.flush_line(canvas, state);
    }

    /// Draw the buffered line at the cursor and move down
    fn flush_line<C: Canvas + ?Sized>(&self, canvas: &mut C, state: &mut LayoutState) {
        if state.line.is_empty() {
            return;
        }
        if state.break_pending {
            self.break_page(canvas, state);
        }

        canvas.draw_text(self.geometry.left(), state.cursor_y, &state.line);
        state.line.clear();
        state.lines_drawn += 1;

        self.advance(canvas, state);
    }

    /// Move the cursor down one line, then check for overflow
    fn advance<C: Canvas + ?Sized>(&self, canvas: &mut C, state: &mut LayoutState) {
        if state.break_pending {
            self.break_page(canvas, state);
        }

        state.cursor_y -= self.geometry.line_height();
        if state.cursor_y < self.geometry.bottom() {
            state.cursor_y = self.geometry.top();
            state.break_pending = true;
        }
    }

    /// Start the next destination page, taking over any pending break
    fn break_page<C: Canvas + ?Sized>(&self, canvas: &mut C, state: &mut LayoutState) {
        canvas.new_page();
        canvas.set_font(self.geometry.font, self.geometry.font_size);

        state.page_index += 1;
        state.cursor_y = self.geometry.top();
        state.break_pending = false;

        log::debug!("Started destination page {}", state.page_index + 1);
    }
}
