//! render::style
//!
//! Lazy ANSI SGR state.
//!
//! A [`Style`] tracks two things: the styling requested by the format so
//! far, and the styling the output stream is actually in (what was last
//! printed). Escape sequences are only written when text follows, and only
//! for the difference between the two.
//!
//! # Emission Rules
//!
//! - Nothing pending: nothing is written.
//! - Only additions (new attributes, a new or changed color): the added
//!   attribute codes followed by the color code, e.g. `\x1b[1;31m`.
//! - Anything removed (an attribute cleared, or the color reset): a full
//!   reset followed by everything still active, e.g. `\x1b[0;3;32m`, or a
//!   bare `\x1b[0m` when nothing remains.

use super::codes::{Attribute, Color, SGR_RESET};

/// Set of active text attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes(u8);

impl Attributes {
    fn bit(attribute: Attribute) -> u8 {
        1 << (attribute.code() - 1)
    }

    pub fn insert(&mut self, attribute: Attribute) {
        self.0 |= Self::bit(attribute);
    }

    pub fn remove(&mut self, attribute: Attribute) {
        self.0 &= !Self::bit(attribute);
    }

    pub fn contains(self, attribute: Attribute) -> bool {
        self.0 & Self::bit(attribute) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Attributes in `self` that are not in `other`.
    pub fn difference(self, other: Attributes) -> Attributes {
        Attributes(self.0 & !other.0)
    }

    /// SGR parameters of the contained attributes, ascending.
    pub fn codes(self) -> impl Iterator<Item = u8> {
        Attribute::ALL
            .into_iter()
            .filter(move |a| self.contains(*a))
            .map(Attribute::code)
    }
}

/// Requested and printed styling for one output position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    color: Option<Color>,
    attributes: Attributes,
    printed_color: Option<Color>,
    printed_attributes: Attributes,
}

impl Style {
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn clear_color(&mut self) {
        self.color = None;
    }

    pub fn set_attribute(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute);
    }

    pub fn clear_attribute(&mut self, attribute: Attribute) {
        self.attributes.remove(attribute);
    }

    pub fn clear_attributes(&mut self) {
        self.attributes = Attributes::default();
    }

    /// Style for a newly opened group: same stream position, no styling.
    pub fn for_child(&self) -> Style {
        let mut style = *self;
        style.clear_color();
        style.clear_attributes();
        style
    }

    /// Style handed back to the parent when a group is flushed.
    ///
    /// The child's styling is reset unless the group leaked it.
    pub fn after_close(&self, leak_color: bool, leak_attributes: bool) -> Style {
        let mut style = *self;
        if !leak_color {
            style.clear_color();
        }
        if !leak_attributes {
            style.clear_attributes();
        }
        style
    }

    /// Check if the stream differs from the requested styling.
    pub fn is_pending(&self) -> bool {
        self.color != self.printed_color || self.attributes != self.printed_attributes
    }

    /// Write the escape sequence that brings the stream up to date.
    pub fn write_pending(&mut self, out: &mut String) {
        if !self.is_pending() {
            return;
        }

        let removed = !self.printed_attributes.difference(self.attributes).is_empty()
            || (self.color.is_none() && self.printed_color.is_some());

        let mut codes: Vec<u8> = Vec::with_capacity(5);
        if removed {
            codes.push(SGR_RESET);
            codes.extend(self.attributes.codes());
            codes.extend(self.color.map(Color::code));
        } else {
            codes.extend(self.attributes.difference(self.printed_attributes).codes());
            if self.color != self.printed_color {
                codes.extend(self.color.map(Color::code));
            }
        }

        out.push_str("\x1b[");
        for (i, code) in codes.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(&code.to_string());
        }
        out.push('m');

        self.printed_color = self.color;
        self.printed_attributes = self.attributes;
    }
}
