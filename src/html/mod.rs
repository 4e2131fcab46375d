/// HTML rendering for slide decks.
///
/// This module converts parsed slides into displayable HTML fragments. It
/// is a pure read of slide content: rendering performs no mutation and has
/// no side effects beyond producing output.
///
/// Slide bodies pass through as escaped text — Markdown-to-HTML content
/// conversion, theming, and the surrounding page shell are the rendering
/// environment's concern, not this crate's.
///
/// # Quick Start
///
/// ```rust
/// use remarque::{Deck, html::ToHtml};
///
/// # fn main() -> Result<(), remarque::Error> {
/// let deck = Deck::parse("class: center\n# Welcome")?;
/// let html = deck.to_html()?;
/// assert!(html.contains("class=\"slide center\""));
///
/// // Or with custom options
/// use remarque::html::HtmlOptions;
/// let options = HtmlOptions::new()
///     .with_notes(true)
///     .with_numbers(false);
/// let html = deck.to_html_with_options(&options)?;
/// # Ok(())
/// # }
/// ```
///
/// # Architecture
///
/// The module is organized around:
/// - [`ToHtml`] trait: Core trait for types that can be rendered to HTML
/// - [`HtmlOptions`]: Configuration for rendering behavior
/// - [`config`]: Configuration types
/// - [`writer`]: Low-level writer for efficient output generation
/// - [`deck`]: Deck and slide implementations
// Module declarations
mod config;
mod traits;
mod writer;

mod deck;

// Re-export public API
pub use config::HtmlOptions;
pub use traits::ToHtml;
