//! Parser for Markdown slide-deck sources.

use memchr::{memchr, memchr_iter};

use super::config::DeckConfig;
use super::directive::ClassList;
use super::slide::Slide;
use crate::common::{Error, Result};

/// Line that separates slides.
const SLIDE_DELIMITER: &str = "---";
/// Line that separates incremental fragments within a slide.
const FRAGMENT_DELIMITER: &str = "--";
/// Line that separates slide content from presenter notes.
const NOTES_DELIMITER: &str = "???";

/// Parser for Markdown slide-deck sources.
pub struct DeckParser {
    config: DeckConfig,
}

/// Properties consumed from a slide prologue.
struct Prologue {
    classes: ClassList,
    name: Option<String>,
    counted: bool,
}

impl DeckParser {
    /// Create a new parser with the given configuration.
    pub fn new(config: DeckConfig) -> Self {
        Self { config }
    }

    /// Parse a source document into an ordered sequence of slides.
    ///
    /// Slides are separated by lines consisting solely of `---`. An empty
    /// source is an error: a deck must contain at least one slide.
    pub fn parse(&self, source: &str) -> Result<Vec<Slide>> {
        if source.is_empty() {
            return Err(Error::ParseError(
                "empty source: a deck must contain at least one slide".to_string(),
            ));
        }

        let mut slides = Vec::new();
        let mut number = 0usize;

        for segment in split_on_marker(source, SLIDE_DELIMITER) {
            let (prologue, rest) = parse_prologue(segment);
            let (content, notes) = split_notes(rest);
            let notes = notes.map(|n| trim_blank_edges(n).to_string()).filter(|n| !n.is_empty());

            if self.config.expand_incremental {
                self.push_expanded(&mut slides, &mut number, prologue, content, notes);
            } else {
                let body = self.finish_body(content);
                push_slide(&mut slides, &mut number, Slide {
                    body,
                    classes: prologue.classes,
                    name: prologue.name,
                    notes,
                    index: 0,
                    number: 0,
                    continuation: false,
                    counted: prologue.counted,
                });
            }
        }

        Ok(slides)
    }

    /// Expand `--` fragment separators into cumulative continuation slides.
    fn push_expanded(
        &self,
        slides: &mut Vec<Slide>,
        number: &mut usize,
        prologue: Prologue,
        content: &str,
        notes: Option<String>,
    ) {
        let fragments: Vec<String> = split_on_marker(content, FRAGMENT_DELIMITER)
            .into_iter()
            .map(|f| self.finish_body(f))
            .collect();

        let mut cumulative = String::new();
        for (step, fragment) in fragments.iter().enumerate() {
            if step > 0 && !cumulative.is_empty() && !fragment.is_empty() {
                cumulative.push('\n');
            }
            cumulative.push_str(fragment);

            push_slide(slides, number, Slide {
                body: cumulative.clone(),
                classes: prologue.classes.clone(),
                // Only the first step carries the anchor so named navigation
                // lands on the start of the build.
                name: if step == 0 { prologue.name.clone() } else { None },
                notes: notes.clone(),
                index: 0,
                number: 0,
                continuation: step > 0,
                counted: prologue.counted,
            });
        }
    }

    /// Apply body post-processing per the configuration.
    fn finish_body(&self, content: &str) -> String {
        if self.config.trim_blank_edges {
            trim_blank_edges(content).to_string()
        } else {
            content.to_string()
        }
    }
}

/// Assign index and display number, then append the slide.
fn push_slide(slides: &mut Vec<Slide>, number: &mut usize, mut slide: Slide) {
    if slide.counted && !slide.continuation {
        *number += 1;
    }
    slide.index = slides.len();
    slide.number = (*number).max(1);
    slides.push(slide);
}

/// Split a source into the parts separated by standalone `marker` lines.
///
/// Uses memchr for fast line-boundary scanning. A delimiter line may carry
/// a trailing `\r` but nothing else. Always returns at least one part.
fn split_on_marker<'a>(source: &'a str, marker: &str) -> Vec<&'a str> {
    let bytes = source.as_bytes();
    let mut parts = Vec::new();
    let mut part_start = 0usize;
    let mut line_start = 0usize;

    for nl in memchr_iter(b'\n', bytes) {
        if is_marker_line(&source[line_start..nl], marker) {
            parts.push(&source[part_start..line_start]);
            part_start = nl + 1;
        }
        line_start = nl + 1;
    }

    // Final line has no trailing newline
    if line_start < source.len() && is_marker_line(&source[line_start..], marker) {
        parts.push(&source[part_start..line_start]);
        parts.push("");
    } else {
        parts.push(&source[part_start..]);
    }

    parts
}

/// Check whether a line consists solely of `marker` (modulo a trailing CR).
#[inline]
fn is_marker_line(line: &str, marker: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == marker
}

/// Split off the leading property lines of a slide segment.
///
/// Only the known keys `class`, `name`, and `count` are consumed; the first
/// line that is not one of them ends the prologue, so prose like
/// "Title: subtitle" stays in the body. Repeated `class:` lines merge; for
/// `name:` and `count:` the last occurrence wins.
fn parse_prologue(segment: &str) -> (Prologue, &str) {
    let mut class_value = String::new();
    let mut name = None;
    let mut counted = true;
    let mut rest = segment;

    loop {
        let (line, remainder) = split_line(rest);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let Some((key, value)) = line.split_once(':') else {
            break;
        };

        match key.trim() {
            "class" => {
                class_value.push(' ');
                class_value.push_str(value);
            }
            "name" => {
                let value = value.trim();
                if value.is_empty() {
                    break;
                }
                name = Some(value.to_string());
            }
            "count" => match value.trim() {
                "true" => counted = true,
                "false" => counted = false,
                // Not a property value, leave the line in the body
                _ => break,
            },
            _ => break,
        }

        rest = remainder;
    }

    let prologue = Prologue {
        classes: ClassList::parse(&class_value),
        name,
        counted,
    };
    (prologue, rest)
}

/// Split slide content from presenter notes at the first standalone `???`
/// line.
fn split_notes(segment: &str) -> (&str, Option<&str>) {
    let bytes = segment.as_bytes();
    let mut line_start = 0usize;

    for nl in memchr_iter(b'\n', bytes) {
        if is_marker_line(&segment[line_start..nl], NOTES_DELIMITER) {
            return (&segment[..line_start], Some(&segment[nl + 1..]));
        }
        line_start = nl + 1;
    }

    if line_start < segment.len() && is_marker_line(&segment[line_start..], NOTES_DELIMITER) {
        return (&segment[..line_start], Some(""));
    }

    (segment, None)
}

/// Split off the first line of a string.
#[inline]
fn split_line(s: &str) -> (&str, &str) {
    match memchr(b'\n', s.as_bytes()) {
        Some(n) => (&s[..n], &s[n + 1..]),
        None => (s, ""),
    }
}

/// Trim whitespace-only lines from both edges of a slide body without
/// touching the indentation of the first content line.
fn trim_blank_edges(mut s: &str) -> &str {
    loop {
        match memchr(b'\n', s.as_bytes()) {
            Some(n) if s[..n].trim().is_empty() => s = &s[n + 1..],
            _ => break,
        }
    }

    if s.trim().is_empty() {
        return "";
    }

    loop {
        match s.rfind('\n') {
            Some(n) if s[n + 1..].trim().is_empty() => {
                s = &s[..n];
                if let Some(stripped) = s.strip_suffix('\r') {
                    s = stripped;
                }
            }
            _ => break,
        }
    }

    s
}
