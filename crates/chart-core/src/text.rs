// File: crates/chart-core/src/text.rs
// Summary: Text shaper using Skia textlayout; lays labels out inside a box with horizontal alignment.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as SkTextStyle};

use crate::geometry::RectF;
use crate::surface::{TextAlign, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &TextStyle) -> SkTextStyle {
        let mut ts = SkTextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(style.color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    /// Shape `text` into a paragraph wrapped at `width` and aligned per `style`.
    pub fn layout(&self, text: &str, style: &TextStyle, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match style.align {
            TextAlign::Left => skia::textlayout::TextAlign::Left,
            TextAlign::Center => skia::textlayout::TextAlign::Center,
            TextAlign::Right => skia::textlayout::TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width.max(1.0));
        paragraph
    }

    /// Paint `text` with the box's top-left as the paragraph origin.
    pub fn draw_in(&self, canvas: &skia::Canvas, text: &str, rect: RectF, style: &TextStyle) {
        let paragraph = self.layout(text, style, rect.width);
        paragraph.paint(canvas, (rect.x, rect.y));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
