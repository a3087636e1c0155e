//! Longest palindromic substring via the memoized evaluator.
//!
//! Window `(i, j)` asks whether `s[i..=j]` is a palindrome. The middle
//! child answers that for the enclosed substring, so a window is a
//! palindrome exactly when its bookend bytes match and the middle child
//! holds one; otherwise the longest palindrome found so far bubbles up
//! through the left and right children. Sizes 0 and 1 seed the
//! recurrence directly from the bookend comparison.

use crate::config::{ConfigError, WindowConfig};
use crate::evaluator::sliding_window;
use crate::memo::Memo;

/// Per-window palindrome state, as inclusive byte spans into the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PalindromeSpan {
    /// Longest palindrome found anywhere inside this window.
    pub longest: Option<(usize, usize)>,
    /// The window itself, when it is a palindrome.
    pub current: Option<(usize, usize)>,
}

fn span_len(span: (usize, usize)) -> usize {
    span.1 - span.0 + 1
}

/// The longer of two optional spans; ties keep the first.
fn longer(a: Option<(usize, usize)>, b: Option<(usize, usize)>) -> Option<(usize, usize)> {
    match (a, b) {
        (Some(x), Some(y)) if span_len(y) > span_len(x) => Some(y),
        (Some(x), _) => Some(x),
        (None, y) => y,
    }
}

/// Evaluate every window of `s`, returning the full palindrome memo.
///
/// The entry at `(0, s.len() - 1)` carries the overall answer in its
/// `longest` slot. Inputs shorter than two bytes fail validation like any
/// other sub-minimal range.
pub fn palindrome_spans(s: &[u8]) -> Result<Memo<PalindromeSpan>, ConfigError> {
    let config = WindowConfig::new(s.len() as i64 - 1);

    sliding_window(
        |payload, _memo, children| {
            let (i, j) = (payload.pair.0 as usize, payload.pair.1 as usize);
            let mut span = PalindromeSpan::default();
            let bookends_equal = s[i] == s[j];

            // Sizes 0 and 1 enclose nothing; the bookend comparison alone
            // decides them.
            if payload.iteration < 2 {
                if bookends_equal {
                    span.current = Some((i, j));
                    span.longest = span.current;
                }
                return span;
            }

            if bookends_equal && children.middle.is_some_and(|m| m.current.is_some()) {
                span.current = Some((i, j));
                span.longest = span.current;
            } else {
                let left = children.left.and_then(|c| c.longest);
                let right = children.right.and_then(|c| c.longest);
                span.longest = longer(left, right);
            }

            span
        },
        &config,
    )
}

/// Longest palindromic substring of `s`, as a slice of the input.
pub fn longest_palindrome(s: &[u8]) -> Result<Option<&[u8]>, ConfigError> {
    let memo = palindrome_spans(s)?;
    let root = (0, s.len() as i64 - 1);
    Ok(memo[root].longest.map(|(i, j)| &s[i..=j]))
}
