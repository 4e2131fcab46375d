/// Core trait for HTML rendering.
///
/// This module defines the `ToHtml` trait that enables types to be
/// rendered to HTML fragments.

use super::config::HtmlOptions;
use crate::common::Result;

/// Core trait for types that can be rendered to HTML.
///
/// This trait is implemented for [`Deck`](crate::Deck) and
/// [`Slide`](crate::deck::Slide).
///
/// # Examples
///
/// ```rust
/// use remarque::{Deck, html::ToHtml};
///
/// # fn main() -> Result<(), remarque::Error> {
/// let deck = Deck::parse("A\n---\nB")?;
///
/// // Render the entire deck
/// let html = deck.to_html()?;
///
/// // Or individual slides
/// for slide in &deck {
///     let slide_html = slide.to_html()?;
///     println!("{}", slide_html);
/// }
/// # Ok(())
/// # }
/// ```
pub trait ToHtml {
    /// Render this item to HTML with default options.
    fn to_html(&self) -> Result<String> {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Render this item to HTML with custom options.
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the rendering
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String>;
}
