//! Layout directives attached to slides.
//!
//! A slide prologue may carry a `class:` property whose value is a list of
//! layout tokens (`center`, `middle`, `inverse`, ...). Well-known tokens are
//! resolved to [`LayoutFlags`] through a compile-time lookup table; anything
//! else is preserved verbatim as a custom class for the renderer.

use bitflags::bitflags;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

bitflags! {
    /// Well-known layout directives understood by the renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct LayoutFlags: u8 {
        /// Center content horizontally
        const CENTER = 0x01;
        /// Center content vertically
        const MIDDLE = 0x02;
        /// Inverted color scheme
        const INVERSE = 0x04;
        /// Align content to the left edge
        const LEFT = 0x08;
        /// Align content to the right edge
        const RIGHT = 0x10;
        /// Align content to the top edge
        const TOP = 0x20;
        /// Align content to the bottom edge
        const BOTTOM = 0x40;
    }
}

/// Compile-time lookup table for layout tokens.
///
/// Maps `class:` tokens to their layout flags. Uses a perfect hash function
/// for O(1) lookup with zero runtime cost.
static LAYOUT_TOKENS: phf::Map<&'static str, LayoutFlags> = phf_map! {
    "center" => LayoutFlags::CENTER,
    "middle" => LayoutFlags::MIDDLE,
    "inverse" => LayoutFlags::INVERSE,
    "left" => LayoutFlags::LEFT,
    "right" => LayoutFlags::RIGHT,
    "top" => LayoutFlags::TOP,
    "bottom" => LayoutFlags::BOTTOM,
};

/// Canonical emission order for layout tokens in rendered output.
const LAYOUT_ORDER: [(LayoutFlags, &str); 7] = [
    (LayoutFlags::CENTER, "center"),
    (LayoutFlags::MIDDLE, "middle"),
    (LayoutFlags::INVERSE, "inverse"),
    (LayoutFlags::LEFT, "left"),
    (LayoutFlags::RIGHT, "right"),
    (LayoutFlags::TOP, "top"),
    (LayoutFlags::BOTTOM, "bottom"),
];

/// The set of classes attached to a slide.
///
/// Splits into the well-known layout flags plus any custom class tokens the
/// author supplied. Custom tokens keep their source order.
///
/// # Examples
///
/// ```rust
/// use remarque::deck::{ClassList, LayoutFlags};
///
/// let classes = ClassList::parse("center, middle, my-theme");
/// assert!(classes.layout().contains(LayoutFlags::CENTER | LayoutFlags::MIDDLE));
/// assert_eq!(classes.custom(), &["my-theme"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassList {
    /// Resolved well-known layout flags
    layout: LayoutFlags,
    /// Unrecognized class tokens, in source order
    custom: SmallVec<[String; 4]>,
}

impl ClassList {
    /// Parse a `class:` property value into a class list.
    ///
    /// Tokens are separated by commas and/or whitespace; empty tokens are
    /// skipped. Well-known tokens become layout flags, everything else is
    /// kept as a custom class.
    pub fn parse(value: &str) -> Self {
        let mut layout = LayoutFlags::empty();
        let mut custom = SmallVec::new();

        for token in value.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            match LAYOUT_TOKENS.get(token) {
                Some(flag) => layout |= *flag,
                None => custom.push(token.to_string()),
            }
        }

        Self { layout, custom }
    }

    /// Get the resolved layout flags.
    #[inline]
    pub fn layout(&self) -> LayoutFlags {
        self.layout
    }

    /// Get the custom (unrecognized) class tokens in source order.
    #[inline]
    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// Check whether no classes are present at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty() && self.custom.is_empty()
    }

    /// Check whether the slide requests horizontal centering.
    #[inline]
    pub fn is_centered(&self) -> bool {
        self.layout.contains(LayoutFlags::CENTER)
    }

    /// Check whether the slide requests vertical centering.
    #[inline]
    pub fn is_middle(&self) -> bool {
        self.layout.contains(LayoutFlags::MIDDLE)
    }

    /// Check whether the slide requests the inverted color scheme.
    #[inline]
    pub fn is_inverse(&self) -> bool {
        self.layout.contains(LayoutFlags::INVERSE)
    }

    /// Iterate over all class tokens: layout tokens in canonical order,
    /// then custom tokens in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        LAYOUT_ORDER
            .iter()
            .filter(|(flag, _)| self.layout.contains(*flag))
            .map(|(_, name)| *name)
            .chain(self.custom.iter().map(String::as_str))
    }
}
