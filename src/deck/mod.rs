//! Markdown slide-deck parsing and data model.
//!
//! This module parses remark-style slide-deck documents into an immutable
//! [`Deck`] of [`Slide`]s. Slides are separated by lines consisting solely
//! of `---`; a slide may begin with property lines (`class:`, `name:`,
//! `count:`) and may carry presenter notes after a standalone `???` line.
//!
//! # Features
//!
//! - **Delimiter splitting**: standalone `---` lines separate slides, with
//!   CRLF sources handled transparently
//! - **Layout directives**: `class:` tokens resolve to [`LayoutFlags`] with
//!   unknown tokens preserved as custom classes
//! - **Named slides**: `name:` anchors for direct navigation targets
//! - **Presenter notes**: content after a standalone `???` line
//! - **Incremental slides**: optional expansion of `--` fragment separators
//!   into cumulative continuation slides
//!
//! # Example
//!
//! ```rust
//! use remarque::deck::Deck;
//!
//! let source = "class: center, middle\n# Welcome\n---\nname: agenda\n# Agenda";
//! let deck = Deck::parse(source)?;
//!
//! assert_eq!(deck.len(), 2);
//! assert!(deck.get(0).unwrap().classes().is_middle());
//! assert_eq!(deck.slide_named("agenda").unwrap().index(), 1);
//! # Ok::<(), remarque::Error>(())
//! ```

pub mod config;
pub mod dck;
pub mod directive;
pub mod parser;
pub mod slide;

pub use config::DeckConfig;
pub use dck::Deck;
pub use directive::{ClassList, LayoutFlags};
pub use parser::DeckParser;
pub use slide::Slide;

#[cfg(test)]
mod tests;
