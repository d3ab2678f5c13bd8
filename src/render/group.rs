//! render::group
//!
//! A single scope of the format: the implicit root or one `[...]` pair.
//!
//! # Invariants
//!
//! - A group that evaluated data placeholders (`has_data`) but got no value
//!   from any of them (`!has_value`) is suppressed: its buffer is dropped
//!   when it closes.
//! - A group with enablers takes its pass/fail from them alone, see
//!   [`Group::settle_enablers`].
//! - `width` counts rendered characters, never escape sequences.

use super::style::Style;

/// Buffered output and bookkeeping for one scope.
#[derive(Debug, Clone)]
pub struct Group {
    pub buf: String,
    pub style: Style,

    pub has_data: bool,
    pub has_value: bool,
    pub has_enabler: bool,
    pub was_enabled: bool,
    pub leak_color: bool,
    pub leak_attributes: bool,
    pub width: usize,

    /// Whether the most recently closed child group was flushed.
    ///
    /// Starts out true so `%e` in a first group is not enabled.
    pub last_child_shown: bool,
}

impl Group {
    pub fn new(style: Style) -> Self {
        Self {
            buf: String::new(),
            style,
            has_data: false,
            has_value: false,
            has_enabler: false,
            was_enabled: false,
            leak_color: false,
            leak_attributes: false,
            width: 0,
            last_child_shown: true,
        }
    }

    /// Append a literal character.
    ///
    /// Pending styling is written first, except before whitespace, so that
    /// runs of spaces never carry escape sequences.
    pub fn add_char(&mut self, ch: char) {
        if !ch.is_whitespace() {
            self.style.write_pending(&mut self.buf);
        }
        self.width += 1;
        self.buf.push(ch);
    }

    /// Append placeholder output.
    pub fn add_str(&mut self, s: &str) {
        self.style.write_pending(&mut self.buf);
        self.width += s.chars().count();
        self.buf.push_str(s);
    }

    /// Record a data placeholder and whether it produced a value.
    pub fn mark_data(&mut self, has_value: bool) {
        self.has_data = true;
        if has_value {
            self.has_value = true;
        }
    }

    /// Record an enabler and whether its condition held.
    pub fn mark_enabler(&mut self, enabled: bool) {
        self.has_enabler = true;
        if enabled {
            self.was_enabled = true;
        }
    }

    /// Fold enabler results into the data flags before closing.
    pub fn settle_enablers(&mut self) {
        if self.has_enabler {
            self.has_data = true;
            self.has_value = self.was_enabled;
        }
    }

    /// Check if the group's output survives closing.
    pub fn is_visible(&self) -> bool {
        !self.has_data || self.has_value
    }
}
