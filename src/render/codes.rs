//! render::codes
//!
//! Static tables mapping format characters to operations.
//!
//! Every table is a pure `match`; there is no mutable global state.

/// Escape: the next character is literal.
pub const ESCAPE: char = '\\';
/// Introduces a text attribute operation.
pub const ATTRIBUTE: char = '@';
/// Introduces a color operation.
pub const COLOR: char = '#';
/// Introduces a data placeholder or enabler.
pub const DATA: char = '%';
/// Opens a group.
pub const GROUP_OPEN: char = '[';
/// Closes a group.
pub const GROUP_CLOSE: char = ']';
/// Selector for "reset" after `#` or `@`.
pub const RESET: char = '_';
/// Selector for "leak" after `#` or `@`.
pub const LEAK: char = '>';

/// SGR parameter that resets all styling.
pub const SGR_RESET: u8 = 0;

/// A foreground color, stored as its SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u8);

impl Color {
    /// The SGR parameter for this color.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Look up a color selector.
    ///
    /// Lowercase letters are the 8 base colors (30-37), uppercase the
    /// highlight variants (90-97).
    pub fn from_char(ch: char) -> Option<Self> {
        let code = match ch {
            'k' => 30,
            'r' => 31,
            'g' => 32,
            'y' => 33,
            'b' => 34,
            'm' => 35,
            'c' => 36,
            'w' => 37,
            'K' => 90,
            'R' => 91,
            'G' => 92,
            'Y' => 93,
            'B' => 94,
            'M' => 95,
            'C' => 96,
            'W' => 97,
            _ => return None,
        };
        Some(Color(code))
    }
}

/// A text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Bold,
    Faint,
    Italic,
}

impl Attribute {
    /// All attributes in SGR parameter order.
    pub const ALL: [Attribute; 3] = [Attribute::Bold, Attribute::Faint, Attribute::Italic];

    /// The SGR parameter that sets this attribute.
    pub fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Faint => 2,
            Attribute::Italic => 3,
        }
    }
}

/// Operation selected by the character after `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOp {
    Set(Color),
    Reset,
    Leak,
}

impl ColorOp {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            RESET => Some(ColorOp::Reset),
            LEAK => Some(ColorOp::Leak),
            _ => Color::from_char(ch).map(ColorOp::Set),
        }
    }
}

/// Operation selected by the character after `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOp {
    Set(Attribute),
    Clear(Attribute),
    Reset,
    Leak,
}

impl AttributeOp {
    pub fn from_char(ch: char) -> Option<Self> {
        let op = match ch {
            'b' => AttributeOp::Set(Attribute::Bold),
            'f' => AttributeOp::Set(Attribute::Faint),
            'i' => AttributeOp::Set(Attribute::Italic),
            'B' => AttributeOp::Clear(Attribute::Bold),
            'F' => AttributeOp::Clear(Attribute::Faint),
            'I' => AttributeOp::Clear(Attribute::Italic),
            RESET => AttributeOp::Reset,
            LEAK => AttributeOp::Leak,
            _ => return None,
        };
        Some(op)
    }
}

/// A placeholder substituted with status data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `%h` branch or short hash
    Head,
    /// `%H` branch or short hash prefixed by `:`
    HeadColon,
    /// `%u`
    Untracked,
    /// `%m`
    Modified,
    /// `%s`
    Staged,
    /// `%c`
    Conflicts,
    /// `%a`
    Ahead,
    /// `%b`
    Behind,
    /// `%S`
    Stashed,
    /// `%U`
    Upstream,
}

/// A placeholder that emits nothing but gates its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enabler {
    /// `%C`
    Clean,
    /// `%D`
    Dirty,
    /// `%O`
    Outdated,
    /// `%L`
    Latest,
    /// `%l` no upstream configured
    Local,
    /// `%e` previous sibling group was suppressed
    Else,
}

/// Operation selected by the character after `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOp {
    Placeholder(Placeholder),
    Enabler(Enabler),
}

impl DataOp {
    pub fn from_char(ch: char) -> Option<Self> {
        let op = match ch {
            'h' => DataOp::Placeholder(Placeholder::Head),
            'H' => DataOp::Placeholder(Placeholder::HeadColon),
            'u' => DataOp::Placeholder(Placeholder::Untracked),
            'm' => DataOp::Placeholder(Placeholder::Modified),
            's' => DataOp::Placeholder(Placeholder::Staged),
            'c' => DataOp::Placeholder(Placeholder::Conflicts),
            'a' => DataOp::Placeholder(Placeholder::Ahead),
            'b' => DataOp::Placeholder(Placeholder::Behind),
            'S' => DataOp::Placeholder(Placeholder::Stashed),
            'U' => DataOp::Placeholder(Placeholder::Upstream),
            'C' => DataOp::Enabler(Enabler::Clean),
            'D' => DataOp::Enabler(Enabler::Dirty),
            'O' => DataOp::Enabler(Enabler::Outdated),
            'L' => DataOp::Enabler(Enabler::Latest),
            'l' => DataOp::Enabler(Enabler::Local),
            'e' => DataOp::Enabler(Enabler::Else),
            _ => return None,
        };
        Some(op)
    }
}
