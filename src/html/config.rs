/// Configuration types for HTML rendering.
///
/// This module defines the configuration options used to customize the
/// HTML output.
/// Configuration options for HTML rendering.
///
/// # Examples
///
/// ```rust
/// use remarque::html::HtmlOptions;
///
/// // Create with defaults
/// let options = HtmlOptions::default();
///
/// // Or customize
/// let options = HtmlOptions::new()
///     .with_notes(true)
///     .with_numbers(false)
///     .with_indent(4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HtmlOptions {
    /// Whether to render presenter notes as an `<aside>` element
    pub include_notes: bool,
    /// Whether to emit the `data-slide-number` attribute
    pub include_numbers: bool,
    /// Indentation for elements inside a section (spaces)
    pub indent: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            include_notes: false,
            include_numbers: true,
            indent: 2,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether presenter notes are rendered.
    ///
    /// Notes are emitted as an `<aside class="notes">` element inside the
    /// slide section, for presenter views that want them.
    #[inline]
    pub fn with_notes(mut self, include: bool) -> Self {
        self.include_notes = include;
        self
    }

    /// Set whether the `data-slide-number` attribute is emitted.
    #[inline]
    pub fn with_numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self
    }

    /// Set the indentation for elements inside a section (number of spaces).
    #[inline]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
