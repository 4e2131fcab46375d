/// Low-level writer for HTML generation.
///
/// This module provides the `HtmlWriter` struct which handles the actual
/// conversion of slides to HTML sections.
use super::config::HtmlOptions;
use crate::common::Result;
use crate::deck::Slide;

/// Low-level writer for efficient HTML generation.
///
/// This struct provides optimized methods for writing HTML elements with
/// minimal allocations.
pub(crate) struct HtmlWriter {
    /// The output buffer
    buffer: String,
    /// Current options
    options: HtmlOptions,
}

impl HtmlWriter {
    /// Create a new writer with the given options.
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            buffer: String::with_capacity(4096), // Pre-allocate reasonable size
            options,
        }
    }

    /// Write a slide as a `<section>` element to the buffer.
    pub fn write_slide(&mut self, slide: &Slide) -> Result<()> {
        self.open_section(slide);

        let body = slide.text();
        if !body.is_empty() {
            self.push_indent();
            self.buffer.push_str("<div class=\"content\">");
            self.push_escaped(body);
            self.buffer.push_str("</div>\n");
        }

        if self.options.include_notes
            && let Some(notes) = slide.notes()
        {
            self.push_indent();
            self.buffer.push_str("<aside class=\"notes\">");
            self.push_escaped(notes);
            self.buffer.push_str("</aside>\n");
        }

        self.buffer.push_str("</section>\n");
        Ok(())
    }

    /// Consume the writer and return the rendered output.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write the opening `<section>` tag with classes and attributes.
    fn open_section(&mut self, slide: &Slide) {
        self.buffer.push_str("<section class=\"slide");
        for token in slide.classes().tokens() {
            self.buffer.push(' ');
            self.push_escaped(token);
        }
        if slide.is_continuation() {
            self.buffer.push_str(" continued");
        }
        self.buffer.push('"');

        if let Some(name) = slide.name() {
            self.buffer.push_str(" id=\"");
            self.push_escaped(name);
            self.buffer.push('"');
        }

        if self.options.include_numbers {
            let mut itoa_buffer = itoa::Buffer::new();
            self.buffer.push_str(" data-slide-number=\"");
            self.buffer.push_str(itoa_buffer.format(slide.number()));
            self.buffer.push('"');
        }

        self.buffer.push_str(">\n");
    }

    /// Append text with HTML entities escaped.
    fn push_escaped(&mut self, text: &str) {
        // Reserve for the common case of nothing to escape
        self.buffer.reserve(text.len());
        for c in text.chars() {
            match c {
                '&' => self.buffer.push_str("&amp;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                '"' => self.buffer.push_str("&quot;"),
                '\'' => self.buffer.push_str("&#39;"),
                _ => self.buffer.push(c),
            }
        }
    }

    /// Append the configured indentation.
    fn push_indent(&mut self) {
        for _ in 0..self.options.indent {
            self.buffer.push(' ');
        }
    }
}
