//! Bounded navigation over a slide deck.
//!
//! This module provides the [`Navigator`], which owns a parsed [`Deck`] and
//! the mutable cursor identifying the currently displayed slide. Navigation
//! is synchronous and deterministic: `next` and `previous` saturate at the
//! deck edges (boundary navigation is an expected user action, not an
//! error), while `goto` fails on out-of-range targets and leaves the cursor
//! unchanged.
//!
//! # Example
//!
//! ```rust
//! use remarque::{Deck, Navigator};
//!
//! let deck = Deck::parse("A\n---\nB\n---\nC")?;
//! let mut nav = Navigator::new(deck);
//!
//! assert_eq!(nav.current().text(), "A");
//! nav.next();
//! nav.next();
//! assert_eq!(nav.current().text(), "C");
//!
//! // Saturates at the last slide
//! assert_eq!(nav.next().text(), "C");
//! # Ok::<(), remarque::Error>(())
//! ```

use crate::common::{Error, Result};
use crate::deck::{Deck, Slide};

/// The mutable cursor identifying the currently displayed slide.
///
/// Invariant: the index always satisfies `index < deck.len()`; it is
/// clamped by the navigation operations and never goes out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    index: usize,
}

impl NavigationState {
    /// Get the zero-based index of the current slide.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A discrete user-triggered navigation event.
///
/// Commands map key-press-style input onto navigation operations, keeping
/// the event surface decoupled from whatever input layer produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Advance to the next slide, saturating at the end
    Next,
    /// Step back to the previous slide, saturating at the start
    Previous,
    /// Jump to the first slide
    First,
    /// Jump to the last slide
    Last,
    /// Jump to the slide at a zero-based index
    GoTo(usize),
    /// Jump to the slide carrying a `name:` anchor
    GoToNamed(String),
}

/// Navigator over a slide deck.
///
/// Owns the deck and the [`NavigationState`]; created with the cursor on
/// the first slide. The state lives for the duration of a viewing session
/// and is discarded with the navigator.
pub struct Navigator {
    deck: Deck,
    state: NavigationState,
}

impl Navigator {
    /// Create a navigator positioned on the first slide of the deck.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            state: NavigationState::default(),
        }
    }

    /// Get the currently displayed slide.
    ///
    /// Pure read: no side effects.
    #[inline]
    pub fn current(&self) -> &Slide {
        // Parsing guarantees at least one slide and navigation keeps the
        // index in bounds.
        &self.deck.slides()[self.state.index]
    }

    /// Advance to the next slide.
    ///
    /// Saturates at the last slide and returns the (possibly unchanged)
    /// current slide. Never fails.
    pub fn next(&mut self) -> &Slide {
        if self.state.index + 1 < self.deck.len() {
            self.state.index += 1;
        }
        self.current()
    }

    /// Step back to the previous slide.
    ///
    /// Saturates at the first slide and returns the (possibly unchanged)
    /// current slide. Never fails.
    pub fn previous(&mut self) -> &Slide {
        self.state.index = self.state.index.saturating_sub(1);
        self.current()
    }

    /// Jump to the first slide.
    pub fn first(&mut self) -> &Slide {
        self.state.index = 0;
        self.current()
    }

    /// Jump to the last slide.
    pub fn last(&mut self) -> &Slide {
        self.state.index = self.deck.len() - 1;
        self.current()
    }

    /// Jump to the slide at the given zero-based index.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `index >= len`, leaving the
    /// cursor unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remarque::{Deck, Navigator};
    ///
    /// let deck = Deck::parse("A\n---\nB")?;
    /// let mut nav = Navigator::new(deck);
    ///
    /// assert_eq!(nav.goto(1)?.text(), "B");
    /// assert!(nav.goto(2).is_err());
    /// assert_eq!(nav.current().text(), "B");
    /// # Ok::<(), remarque::Error>(())
    /// ```
    pub fn goto(&mut self, index: usize) -> Result<&Slide> {
        if index >= self.deck.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.deck.len(),
            });
        }
        self.state.index = index;
        Ok(self.current())
    }

    /// Jump to the slide carrying the given `name:` anchor.
    ///
    /// Fails with [`Error::SlideNotFound`] if no slide carries the name,
    /// leaving the cursor unchanged.
    pub fn goto_named(&mut self, name: &str) -> Result<&Slide> {
        let index = self
            .deck
            .position_named(name)
            .ok_or_else(|| Error::SlideNotFound(name.to_string()))?;
        self.state.index = index;
        Ok(self.current())
    }

    /// Apply a navigation command.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remarque::{Deck, NavigationCommand, Navigator};
    ///
    /// let deck = Deck::parse("A\n---\nB")?;
    /// let mut nav = Navigator::new(deck);
    ///
    /// nav.apply(NavigationCommand::Next)?;
    /// assert_eq!(nav.current().text(), "B");
    /// # Ok::<(), remarque::Error>(())
    /// ```
    pub fn apply(&mut self, command: NavigationCommand) -> Result<&Slide> {
        match command {
            NavigationCommand::Next => Ok(self.next()),
            NavigationCommand::Previous => Ok(self.previous()),
            NavigationCommand::First => Ok(self.first()),
            NavigationCommand::Last => Ok(self.last()),
            NavigationCommand::GoTo(index) => self.goto(index),
            NavigationCommand::GoToNamed(name) => self.goto_named(&name),
        }
    }

    /// Get the zero-based index of the current slide.
    #[inline]
    pub fn position(&self) -> usize {
        self.state.index
    }

    /// Get the navigation state snapshot.
    #[inline]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Get the number of slides in the deck.
    #[inline]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Check whether the cursor is on the first slide.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.state.index == 0
    }

    /// Check whether the cursor is on the last slide.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.state.index + 1 == self.deck.len()
    }

    /// Get a reference to the underlying deck.
    #[inline]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consume the navigator and return the underlying deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
