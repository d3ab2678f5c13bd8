//! render::token
//!
//! Tokenizer for format strings.
//!
//! Scanning is a pull-based iterator over the characters of the format,
//! with one character of lookahead after an introducer. It never fails:
//! every input produces a token stream.

use std::str::Chars;

use super::codes::{ATTRIBUTE, COLOR, DATA, ESCAPE, GROUP_CLOSE, GROUP_OPEN};

/// A lexical token of the format language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Ordinary character.
    Literal(char),
    /// Character that followed `\`.
    Escaped(char),
    /// Selector that followed `#`.
    Color(char),
    /// Selector that followed `@`.
    Attribute(char),
    /// Selector that followed `%`.
    Data(char),
    /// `[`
    GroupOpen,
    /// `]`
    GroupClose,
    /// `#`, `@` or `%` as the last character of the input.
    Dangling(char),
}

/// Iterator over the tokens of a format string.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    chars: Chars<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(format: &'a str) -> Self {
        Self {
            chars: format.chars(),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;

        let token = match ch {
            // A trailing lone escape has nothing to escape and is dropped.
            ESCAPE => Token::Escaped(self.chars.next()?),
            COLOR | ATTRIBUTE | DATA => match self.chars.next() {
                None => Token::Dangling(ch),
                Some(selector) => match ch {
                    COLOR => Token::Color(selector),
                    ATTRIBUTE => Token::Attribute(selector),
                    _ => Token::Data(selector),
                },
            },
            GROUP_OPEN => Token::GroupOpen,
            GROUP_CLOSE => Token::GroupClose,
            _ => Token::Literal(ch),
        };

        Some(token)
    }
}
