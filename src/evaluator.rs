//! Memoized evaluation driver over the pair sequence.
//!
//! [`sliding_window`] walks the generated payloads in order, resolves each
//! payload's child coordinates against the memo built so far, hands
//! everything to a caller-supplied handler, and stores the handler's
//! return value under the window's endpoint pair. Because tiers are
//! visited smallest-first, every child a payload names was evaluated in an
//! earlier step.

use crate::config::{ConfigError, WindowConfig};
use crate::generator::{generate_pairs, WindowPayload};
use crate::memo::Memo;

/// Memoized results of a window's children, resolved for the handler.
///
/// A slot is `None` exactly when the corresponding child coordinate is
/// absent from the payload; no default is substituted. Present slots
/// borrow from the memo under construction.
#[derive(Debug, Clone, Copy)]
pub struct ChildValues<'a, T> {
    pub left: Option<&'a T>,
    pub middle: Option<&'a T>,
    pub right: Option<&'a T>,
}

/// Run an interval DP over every window of `config`, memoizing results.
///
/// The handler receives the current payload, read access to the memo
/// built so far (any earlier window can be looked up, not just the three
/// children), and the resolved child values. Its return value becomes the
/// memo entry for the payload's pair; the populated memo is returned once
/// the sequence is exhausted.
///
/// # Panics
/// Child slots are only attached to windows whose children's tier was
/// itself enumerated, so resolving them always succeeds. A handler that
/// bypasses `ChildValues` and indexes the memo at a window below the
/// configured minimum size panics via the memo's indexing; the crate does
/// not guard against that.
pub fn sliding_window<T, F>(mut handler: F, config: &WindowConfig) -> Result<Memo<T>, ConfigError>
where
    F: FnMut(&WindowPayload, &Memo<T>, ChildValues<'_, T>) -> T,
{
    let mut memo = Memo::new();

    for payload in generate_pairs(config)? {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "evaluate_window",
            left = payload.pair.0,
            right = payload.pair.1,
            size = payload.current_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let children = ChildValues {
            left: payload.children.left.map(|pair| &memo[pair]),
            middle: payload.children.middle.map(|pair| &memo[pair]),
            right: payload.children.right.map(|pair| &memo[pair]),
        };

        let value = handler(&payload, &memo, children);
        memo.insert(payload.pair, value);
    }

    Ok(memo)
}
