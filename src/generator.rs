//! Deterministic window-pair enumeration.
//!
//! Given a validated configuration, [`PairGenerator`] lazily produces one
//! [`WindowPayload`] per window, tier by tier: every window of the minimum
//! size first, walked from `index.from` toward `index.to`, then every
//! window one size larger, and so on up to the maximum size. For five
//! positions with sizes 0..=4 the pairs come out as:
//!
//! ```text
//! 0-0 1-1 2-2 3-3 4-4
//! 0-1 1-2 2-3 3-4
//! 0-2 1-3 2-4
//! 0-3 1-4
//! 0-4
//! ```
//!
//! This ordering is load-bearing: every child coordinate a payload names
//! was itself visited in an earlier tier, and therefore already memoized
//! by the evaluator.

use crate::config::{ConfigError, ResolvedConfig, WindowConfig};
use std::iter::FusedIterator;

/// Coordinates of the structurally smaller windows nested inside a window.
///
/// `left` drops the right endpoint, `right` drops the left endpoint,
/// `middle` drops both. Presence is decided by the window's size relative
/// to the configured minimum rather than its absolute size: a size large
/// enough to accommodate children does not mean the run actually produced
/// them, so children below `size.min` are withheld entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Children {
    pub left: Option<(i64, i64)>,
    pub middle: Option<(i64, i64)>,
    pub right: Option<(i64, i64)>,
}

/// One enumerated window, with everything a DP handler needs to act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPayload {
    /// Endpoints in traversal order: `pair.0` is the earlier endpoint
    /// visited, not necessarily the numerically smaller one.
    pub pair: (i64, i64),
    /// Zero-based ordinal of the size tier this window belongs to.
    pub iteration: usize,
    /// Window size for this tier: `min_size + iteration`.
    pub current_size: i64,
    /// Signed offset from the left endpoint to the right one:
    /// `current_size * direction`.
    pub step: i64,
    /// ±1, constant across the run.
    pub direction: i64,
    pub children: Children,
    /// The normalized configuration this run was generated from.
    pub config: ResolvedConfig,
}

/// Lazy, finite pair sequence for one configuration.
///
/// Obtained from [`generate_pairs`]; each call produces a fresh,
/// independent sequence. The iterator is exact-size and fused.
#[derive(Debug, Clone)]
pub struct PairGenerator {
    config: ResolvedConfig,
    /// Tier ordinal; the tier's window size is `min_size + iteration`.
    iteration: usize,
    /// Left endpoint of the next window in the current tier.
    cursor: i64,
}

/// Validate `config` and return the lazy pair sequence for it.
///
/// Validation is eager: every rule of [`WindowConfig::resolve`] is checked
/// here, before the first payload exists. Iteration itself cannot fail.
pub fn generate_pairs(config: &WindowConfig) -> Result<PairGenerator, ConfigError> {
    let resolved = config.resolve()?;
    Ok(PairGenerator {
        config: resolved,
        iteration: 0,
        cursor: resolved.from,
    })
}

impl PairGenerator {
    /// The normalized configuration driving this sequence.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Exact number of payloads not yet produced.
    fn remaining(&self) -> usize {
        let c = &self.config;
        let size = c.min_size + self.iteration as i64;
        if size > c.max_size {
            return 0;
        }
        // Rest of the current tier, measured in direction steps.
        let last = c.to - c.direction * (size - 1);
        let mut total = (last - self.cursor) * c.direction;
        // Untouched tiers: size s contributes range - s windows.
        for s in (size + 1)..=c.max_size {
            total += c.range - s;
        }
        total as usize
    }
}

impl Iterator for PairGenerator {
    type Item = WindowPayload;

    fn next(&mut self) -> Option<WindowPayload> {
        let c = self.config;
        loop {
            let current_size = c.min_size + self.iteration as i64;
            if current_size > c.max_size {
                return None;
            }

            // Terminal left endpoint for this tier (exclusive). The tier
            // yields exactly range - current_size windows; for the default
            // size.max == range the top tier has last == from and yields
            // nothing.
            let last = c.to - c.direction * (current_size - 1);
            if self.cursor == last {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    tier = self.iteration,
                    size = current_size,
                    "tier exhausted"
                );
                self.iteration += 1;
                self.cursor = c.from;
                continue;
            }

            let step = current_size * c.direction;
            let left = self.cursor;
            let right = left + step;
            self.cursor += c.direction;

            // Compare against size.min rather than the absolute size: a
            // window large enough to accommodate children does not mean
            // this run actually produced the tiers containing them.
            let mut children = Children::default();
            let size_vs_min = current_size - c.min_size;
            if size_vs_min > 0 {
                children.left = Some((left, right - c.direction));
                children.right = Some((left + c.direction, right));
                if size_vs_min > 1 {
                    children.middle = Some((left + c.direction, right - c.direction));
                }
            }

            return Some(WindowPayload {
                pair: (left, right),
                iteration: self.iteration,
                current_size,
                step,
                direction: c.direction,
                children,
                config: c,
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for PairGenerator {}
impl FusedIterator for PairGenerator {}
