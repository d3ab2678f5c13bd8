//! render
//!
//! The prompt template language and its renderer.
//!
//! # Format Language
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `\x`   | literal `x` |
//! | `#x`   | color: `krgybmcw` base, `KRGYBMCW` highlight, `_` reset, `>` leak |
//! | `@x`   | attribute: `b`/`B` bold, `f`/`F` faint, `i`/`I` italic, `_` reset, `>` leak |
//! | `%x`   | data: `h H u m s c a b S U`; enablers: `C D O L l e` |
//! | `[...]`| group, suppressed when its data produced no value |
//!
//! Unrecognized selectors are printed literally together with their
//! introducer, so `%z` renders as `%z`.
//!
//! # Modules
//!
//! - [`token`] - Format string tokenizer
//! - [`codes`] - Selector tables
//! - [`style`] - Lazy ANSI escape state
//! - [`group`] - Per-scope buffering
//! - [`printer`] - The interpreter tying them together
//!
//! # Example
//!
//! ```
//! use gitprompt::core::status::GitStatus;
//! use gitprompt::render::render;
//!
//! let status = GitStatus {
//!     branch_name: "main".into(),
//!     ahead: 2,
//!     ..Default::default()
//! };
//!
//! assert_eq!(render("[%h][ ↑%a][ ↓%b]", &status, false), "main ↑2");
//! assert_eq!(render("#r%h", &status, true), "%{\x1b[31mmain\x1b[0m%4G%}");
//! ```

pub mod codes;
pub mod group;
pub mod printer;
pub mod style;
pub mod token;

pub use printer::Printer;

use crate::core::status::GitStatus;

/// Format used when none is configured.
pub const DEFAULT_FORMAT: &str = "#B([@b#R%h][#y ›%s][#m ↓%b][#m ↑%a][#r x%c][#g +%m][#y %u]#B) ";

/// Render `format` against `status`.
///
/// Never fails: malformed input degrades to literal output. With
/// `shell_padding`, the result is wrapped in zsh's `%{...%<width>G%}` so the
/// shell counts exactly the visible width.
pub fn render(format: &str, status: &GitStatus, shell_padding: bool) -> String {
    Printer::new(status).print(format, shell_padding)
}
