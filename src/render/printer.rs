//! render::printer
//!
//! The interpreter: applies tokens to a stack of groups.
//!
//! # Group Stack
//!
//! The root scope lives outside the stack; every `[` pushes a [`Group`]
//! and every `]` pops one and either flushes it into its parent or drops
//! it. A `]` with nothing to pop is a literal. Groups still open at the end
//! of input are discarded along with their content.

use super::codes::{
    AttributeOp, ColorOp, DataOp, Enabler, Placeholder, ATTRIBUTE, COLOR, DATA, GROUP_CLOSE,
};
use super::group::Group;
use super::token::{Token, Tokenizer};
use crate::core::status::GitStatus;

/// Renders one format string against one status.
#[derive(Debug)]
pub struct Printer<'a> {
    status: &'a GitStatus,
    root: Group,
    stack: Vec<Group>,
}

impl<'a> Printer<'a> {
    pub fn new(status: &'a GitStatus) -> Self {
        Self {
            status,
            root: Group::new(Default::default()),
            stack: Vec::new(),
        }
    }

    /// Consume the format and produce the output.
    ///
    /// With `shell_padding`, the output is wrapped as
    /// `%{<output>%<width>G%}` so zsh reserves exactly `width` columns.
    pub fn print(mut self, format: &str, shell_padding: bool) -> String {
        for token in Tokenizer::new(format) {
            self.apply(token);
        }

        if !self.stack.is_empty() {
            log::debug!("dropping {} unclosed group(s)", self.stack.len());
            self.stack.clear();
        }

        self.root.style.clear_color();
        self.root.style.clear_attributes();
        self.root.style.write_pending(&mut self.root.buf);

        if shell_padding {
            format!("%{{{}%{}G%}}", self.root.buf, self.root.width)
        } else {
            self.root.buf
        }
    }

    fn current(&mut self) -> &mut Group {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    /// Outcome of the group closed just before the current one opened.
    fn previous_sibling_shown(&self) -> bool {
        match self.stack.len() {
            0 => true,
            1 => self.root.last_child_shown,
            n => self.stack[n - 2].last_child_shown,
        }
    }

    fn apply(&mut self, token: Token) {
        match token {
            Token::Literal(ch) | Token::Escaped(ch) | Token::Dangling(ch) => {
                self.current().add_char(ch)
            }
            Token::Color(ch) => self.color(ch),
            Token::Attribute(ch) => self.attribute(ch),
            Token::Data(ch) => self.data(ch),
            Token::GroupOpen => {
                let style = self.current().style.for_child();
                self.stack.push(Group::new(style));
            }
            Token::GroupClose => {
                if self.stack.is_empty() {
                    self.root.add_char(GROUP_CLOSE);
                } else {
                    self.close_group();
                }
            }
        }
    }

    fn color(&mut self, ch: char) {
        let group = self.current();
        match ColorOp::from_char(ch) {
            Some(ColorOp::Set(color)) => group.style.set_color(color),
            Some(ColorOp::Reset) => group.style.clear_color(),
            Some(ColorOp::Leak) => group.leak_color = true,
            None => {
                group.add_char(COLOR);
                group.add_char(ch);
            }
        }
    }

    fn attribute(&mut self, ch: char) {
        let group = self.current();
        match AttributeOp::from_char(ch) {
            Some(AttributeOp::Set(attribute)) => group.style.set_attribute(attribute),
            Some(AttributeOp::Clear(attribute)) => group.style.clear_attribute(attribute),
            Some(AttributeOp::Reset) => group.style.clear_attributes(),
            Some(AttributeOp::Leak) => group.leak_attributes = true,
            None => {
                group.add_char(ATTRIBUTE);
                group.add_char(ch);
            }
        }
    }

    fn data(&mut self, ch: char) {
        match DataOp::from_char(ch) {
            Some(DataOp::Placeholder(placeholder)) => self.placeholder(placeholder),
            Some(DataOp::Enabler(enabler)) => self.enabler(enabler),
            None => {
                let group = self.current();
                group.add_char(DATA);
                group.add_char(ch);
            }
        }
    }

    fn placeholder(&mut self, placeholder: Placeholder) {
        let status = self.status;
        let group = self.current();

        let count = match placeholder {
            Placeholder::Head => {
                let head = status.head();
                group.add_str(head);
                group.mark_data(!head.is_empty());
                return;
            }
            Placeholder::HeadColon => {
                if status.branch_name.is_empty() && !status.commit_hash.is_empty() {
                    group.add_str(&format!(":{}", status.short_hash()));
                } else {
                    group.add_str(&status.branch_name);
                }
                group.mark_data(!status.head().is_empty());
                return;
            }
            Placeholder::Upstream => {
                if status.has_upstream() {
                    group.add_str(&status.upstream);
                }
                group.mark_data(status.has_upstream());
                return;
            }
            Placeholder::Untracked => status.untracked,
            Placeholder::Modified => status.modified,
            Placeholder::Staged => status.staged,
            Placeholder::Conflicts => status.conflicts,
            Placeholder::Ahead => status.ahead,
            Placeholder::Behind => status.behind,
            Placeholder::Stashed => status.stashed,
        };

        group.add_str(&count.to_string());
        group.mark_data(count > 0);
    }

    fn enabler(&mut self, enabler: Enabler) {
        let status = self.status;
        let enabled = match enabler {
            Enabler::Clean => status.clean,
            Enabler::Dirty => !status.clean,
            Enabler::Outdated => status.outdated,
            Enabler::Latest => !status.outdated,
            Enabler::Local => !status.has_upstream(),
            Enabler::Else => !self.previous_sibling_shown(),
        };
        self.current().mark_enabler(enabled);
    }

    fn close_group(&mut self) {
        let Some(mut child) = self.stack.pop() else {
            return;
        };
        child.settle_enablers();

        let shown = child.is_visible();
        let parent = self.current();
        if shown {
            parent.buf.push_str(&child.buf);
            parent.style = child
                .style
                .after_close(child.leak_color, child.leak_attributes);
            parent.width += child.width;
        }
        parent.has_data |= child.has_data;
        parent.has_value |= child.has_value;
        parent.last_child_shown = shown;
    }
}
