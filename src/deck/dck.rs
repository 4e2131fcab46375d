//! Deck implementation for Markdown slide decks.

use std::fs;
use std::io::Read;
use std::path::Path;

use super::config::DeckConfig;
use super::parser::DeckParser;
use super::slide::Slide;
use crate::common::{Error, Result};

/// A Markdown slide deck.
///
/// This is the main entry point for working with slide-deck documents. A
/// deck is the ordered sequence of slides parsed from a source document and
/// is immutable once loaded; by construction it contains at least one slide.
///
/// # Examples
///
/// ```rust
/// use remarque::Deck;
///
/// let deck = Deck::parse("# Intro\n---\n# Details")?;
/// assert_eq!(deck.len(), 2);
///
/// for slide in &deck {
///     println!("Slide {}: {}", slide.number(), slide.text());
/// }
/// # Ok::<(), remarque::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    config: DeckConfig,
}

impl Deck {
    /// Parse a deck from a source string with the default configuration.
    ///
    /// Slides are separated by lines consisting solely of `---`. Fails with
    /// [`Error::ParseError`] if the source is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remarque::Deck;
    ///
    /// let deck = Deck::parse("class: center, middle\n# Title\n---\n# Agenda")?;
    /// assert_eq!(deck.len(), 2);
    /// assert!(deck.get(0).unwrap().classes().is_centered());
    /// # Ok::<(), remarque::Error>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with_config(source, DeckConfig::default())
    }

    /// Parse a deck from a source string with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remarque::{Deck, DeckConfig};
    ///
    /// let config = DeckConfig::new().with_incremental(true);
    /// let deck = Deck::parse_with_config("first\n--\nsecond", config)?;
    /// assert_eq!(deck.len(), 2);
    /// assert!(deck.get(1).unwrap().is_continuation());
    /// # Ok::<(), remarque::Error>(())
    /// ```
    pub fn parse_with_config(source: &str, config: DeckConfig) -> Result<Self> {
        let slides = DeckParser::new(config.clone()).parse(source)?;
        Ok(Self { slides, config })
    }

    /// Open a deck from a file path with the default configuration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_config(path, DeckConfig::default())
    }

    /// Open a deck from a file path with a custom configuration.
    pub fn from_path_with_config<P: AsRef<Path>>(path: P, config: DeckConfig) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse_with_config(&source, config)
    }

    /// Read a deck from any reader with the default configuration.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse(&source)
    }

    /// Parse a deck from a byte buffer with the default configuration.
    ///
    /// The bytes must be valid UTF-8; fails with [`Error::ParseError`]
    /// otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let source = std::str::from_utf8(bytes)
            .map_err(|e| Error::ParseError(format!("invalid UTF-8 in source: {e}")))?;
        Self::parse(source)
    }

    /// Get the number of slides in the deck.
    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Check whether the deck has no slides.
    ///
    /// Always false for a successfully parsed deck.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Get the slide at the given zero-based index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get all slides in the deck.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Look up a slide by its `name:` property.
    ///
    /// Returns the first slide carrying the name.
    pub fn slide_named(&self, name: &str) -> Option<&Slide> {
        self.position_named(name).map(|i| &self.slides[i])
    }

    /// Look up the index of a slide by its `name:` property.
    pub fn position_named(&self, name: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.name() == Some(name))
    }

    /// Get all body text from the deck, slides joined by blank lines.
    pub fn text(&self) -> String {
        let bodies: Vec<&str> = self
            .slides
            .iter()
            .map(Slide::text)
            .filter(|t| !t.is_empty())
            .collect();
        bodies.join("\n\n")
    }

    /// Get a reference to the configuration the deck was parsed with.
    #[inline]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
