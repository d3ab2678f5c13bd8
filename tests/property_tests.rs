//! Property-based tests for the format renderer.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated format strings and statuses.

use proptest::prelude::*;

use gitprompt::core::status::GitStatus;
use gitprompt::render::render;

/// Characters with a meaning in the format language.
const SPECIAL: &[char] = &['\\', '#', '@', '%', '[', ']'];

/// Strategy for format characters, weighted toward the interesting ones.
fn format_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(SPECIAL.to_vec()),
        3 => prop::sample::select(vec![
            'h', 'H', 'u', 'm', 's', 'c', 'a', 'b', 'S', 'U', 'C', 'D', 'O', 'L', 'l', 'e',
            'r', 'g', 'y', 'B', 'R', 'f', 'i', 'F', 'I', '_', '>', 'z',
        ]),
        2 => prop::char::range('a', 'z'),
        1 => Just(' '),
        1 => prop::sample::select(vec!['✋', '⬆', 'é', '›']),
    ]
}

/// Strategy for arbitrary format strings.
fn format_string() -> impl Strategy<Value = String> {
    prop::collection::vec(format_char(), 0..60).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for text with no special characters.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:;()<>!?éü✋-]{0,40}"
}

/// Strategy for statuses with small counters.
fn git_status() -> impl Strategy<Value = GitStatus> {
    (
        "[a-z]{0,12}",
        prop::sample::select(vec![
            String::new(),
            "0455b83f923a40f0b485665c44aa068bc25029f5".to_string(),
        ]),
        prop::collection::vec(0usize..4, 7),
        prop::sample::select(vec![String::new(), "origin/main".to_string()]),
    )
        .prop_map(|(branch_name, commit_hash, counts, upstream)| {
            GitStatus {
                branch_name,
                commit_hash,
                untracked: counts[0],
                modified: counts[1],
                staged: counts[2],
                conflicts: counts[3],
                ahead: counts[4],
                behind: counts[5],
                stashed: counts[6],
                upstream,
                ..Default::default()
            }
            .with_derived_flags()
        })
}

/// Split `%{<body>%<width>G%}` into body and width.
fn split_envelope(actual: &str) -> Option<(&str, usize)> {
    let inner = actual.strip_prefix("%{")?.strip_suffix("G%}")?;
    let split = inner.rfind('%')?;
    let width = inner[split + 1..].parse().ok()?;
    Some((&inner[..split], width))
}

/// Remove `ESC [ ... m` sequences.
fn strip_sgr(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

proptest! {
    /// Padded output is always a well-formed zsh envelope around the bare output.
    #[test]
    fn padding_wraps_bare_output(format in format_string(), status in git_status()) {
        let bare = render(&format, &status, false);
        let padded = render(&format, &status, true);

        let (body, _) = split_envelope(&padded).expect("malformed envelope");
        prop_assert_eq!(body, bare.as_str());
    }

    /// The reported width is the number of visible characters.
    #[test]
    fn width_counts_visible_chars(format in format_string(), status in git_status()) {
        let padded = render(&format, &status, true);
        let (body, width) = split_envelope(&padded).expect("malformed envelope");

        prop_assert_eq!(width, strip_sgr(body).chars().count());
    }

    /// Text without special characters renders unchanged.
    #[test]
    fn plain_text_is_unchanged(text in plain_text(), status in git_status()) {
        prop_assert_eq!(render(&text, &status, false), text);
    }

    /// Any escaped character is printed literally.
    #[test]
    fn escaped_char_is_literal(ch in any::<char>().prop_filter("no ESC", |c| *c != '\x1b')) {
        let status = GitStatus::example();
        let format = format!("\\{}", ch);
        prop_assert_eq!(render(&format, &status, false), ch.to_string());
    }

    /// A group whose only placeholder has no value disappears entirely.
    #[test]
    fn empty_data_group_is_suppressed(text in plain_text()) {
        let status = GitStatus::default();
        let format = format!("[{}%u]", text);
        prop_assert_eq!(render(&format, &status, false), "");
    }

    /// A group whose placeholder has a value renders its text and the value.
    #[test]
    fn data_group_with_value_is_shown(text in plain_text(), untracked in 1usize..100) {
        let status = GitStatus { untracked, ..Default::default() }.with_derived_flags();
        let format = format!("[{}%u]", text);
        prop_assert_eq!(render(&format, &status, false), format!("{}{}", text, untracked));
    }

    /// `%e` renders exactly when the previous group did not.
    #[test]
    fn else_is_complement_of_previous_group(status in git_status()) {
        let first = render("[%u]", &status, false);
        let second = render("[%u][%eX]", &status, false);

        if first.is_empty() {
            prop_assert_eq!(second, "X");
        } else {
            prop_assert_eq!(second, first);
        }
    }

    /// The short hash never exceeds seven characters.
    #[test]
    fn short_hash_is_bounded(hash in "[0-9a-f]{0,40}") {
        let status = GitStatus { commit_hash: hash.clone(), ..Default::default() };
        prop_assert!(status.short_hash().len() <= 7);
        prop_assert!(hash.starts_with(status.short_hash()));
    }
}
