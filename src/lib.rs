//! Remarque - A Rust library for parsing and navigating Markdown slide decks
//!
//! This library parses remark-style slide-deck documents — slides separated
//! by standalone `---` lines, with optional `class:`/`name:`/`count:`
//! property lines — into an immutable deck, provides bounded navigation
//! over it, and renders slides to displayable HTML fragments.
//!
//! # Features
//!
//! - **Deck parser**: Split a source document into slides with layout
//!   directives, named anchors, and presenter notes
//! - **Bounded navigation**: Saturating `next`/`previous`, checked `goto`,
//!   named-slide targets — the cursor never leaves the deck
//! - **HTML rendering**: Escaped `<section>` fragments carrying layout
//!   classes, for a browser rendering surface to style and display
//! - **Incremental slides**: Optional expansion of `--` fragment separators
//!   into cumulative build steps
//!
//! # Example - Parsing a deck
//!
//! ```rust
//! use remarque::Deck;
//!
//! # fn main() -> Result<(), remarque::Error> {
//! let source = "class: center, middle\n# Welcome\n---\nname: agenda\n# Agenda";
//! let deck = Deck::parse(source)?;
//!
//! assert_eq!(deck.len(), 2);
//! for slide in &deck {
//!     println!("Slide {}: {}", slide.number(), slide.text());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Navigating
//!
//! ```rust
//! use remarque::{Deck, Navigator};
//!
//! # fn main() -> Result<(), remarque::Error> {
//! let deck = Deck::parse("A\n---\nB\n---\nC")?;
//! let mut nav = Navigator::new(deck);
//!
//! nav.next();
//! assert_eq!(nav.current().text(), "B");
//!
//! // Boundary navigation saturates instead of failing
//! nav.last();
//! assert_eq!(nav.next().text(), "C");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Rendering to HTML
//!
//! ```rust
//! use remarque::{Deck, html::ToHtml};
//!
//! # fn main() -> Result<(), remarque::Error> {
//! let deck = Deck::parse("class: inverse\n# Dark slide")?;
//! let html = deck.to_html()?;
//! assert!(html.contains("class=\"slide inverse\""));
//! # Ok(())
//! # }
//! ```

/// Common types, traits, and utilities shared across the crate
pub mod common;

/// Slide-deck parsing and data model
///
/// This module provides the deck parser and the immutable `Deck`/`Slide`
/// model it produces.
pub mod deck;

/// HTML rendering of slides and decks
pub mod html;

/// Bounded navigation over a parsed deck
pub mod navigator;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use deck::{ClassList, Deck, DeckConfig, LayoutFlags, Slide};
pub use html::{HtmlOptions, ToHtml};
pub use navigator::{NavigationCommand, NavigationState, Navigator};
