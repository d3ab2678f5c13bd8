//! cli::help
//!
//! The format reference shown after `--help`.

use crate::core::status::GitStatus;
use crate::render::{render, DEFAULT_FORMAT};

const REFERENCE: &str = "\
Data:
    %h  Current branch or first 7 hex-digits of SHA1
    %H  Current branch or first 7 hex-digits of SHA1 prefixed by :
    %s  Number of files staged
    %b  Number of commits behind remote
    %a  Number of commits ahead of remote
    %c  Number of conflicts
    %m  Number of files modified
    %u  Number of untracked files
    %S  Number of stashed changes
    %U  Name of tracked upstream branch

Enablers force-enable a group:
    %C  Enable group when clean
    %D  Enable group when not clean (or dirty)
    %O  Enable group when outdated
    %L  Enable group when latest (or up to date)
    %l  Enable group when there's no upstream (local repository)
    %e  Enable group when the previous group was not shown

Colors:
    #k  Black
    #r  Red
    #g  Green
    #y  Yellow
    #b  Blue
    #m  Magenta
    #c  Cyan
    #w  White
    #K  Highlight Black
    #R  Highlight Red
    #G  Highlight Green
    #Y  Highlight Yellow
    #B  Highlight Blue
    #M  Highlight Magenta
    #C  Highlight Cyan
    #W  Highlight White
    #_  Reset color
    #>  Leak color

Text attributes:
    @b  Set bold
    @B  Clear bold
    @f  Set faint/dim color
    @F  Clear faint/dim color
    @i  Set italic
    @I  Clear italic
    @_  Reset attributes
    @>  Leak attributes

Groups:
    [...]  Hidden when every data placeholder inside is zero or empty
    \\x     Print x literally";

/// Build the help epilogue: default format, a rendered example, and the
/// selector reference.
pub fn format_reference() -> String {
    let example = render(DEFAULT_FORMAT, &GitStatus::example(), false);
    format!(
        "Default format: {:?}\nExample result: {}\n\n{}",
        DEFAULT_FORMAT, example, REFERENCE
    )
}
