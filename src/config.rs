//! Window configuration: the raw caller-facing form, validation, and the
//! normalized form echoed in every generated payload.
//!
//! A configuration names an index range to traverse (`index.from` is
//! optional and defaults to 0, `index.to` is required) and a range of
//! window sizes to enumerate (`size.min` defaults to 0, `size.max`
//! defaults to the full range). Validation happens once, eagerly, in
//! [`WindowConfig::resolve`]; after that the normalized [`ResolvedConfig`]
//! is immutable for the whole generation run.

use thiserror::Error;

/// Invalid-configuration errors raised before any pair is generated.
///
/// Each variant corresponds to one violated validation rule; all of them
/// are unrecoverable for the current call. Fix the configuration and call
/// again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("index.to cannot be less than 0 (got {0})")]
    NegativeTo(i64),

    #[error("index.from cannot be less than 0 (got {0})")]
    NegativeFrom(i64),

    /// A traversal needs at least two distinct positions.
    #[error("range between index.from ({from}) and index.to ({to}) spans fewer than 2 positions")]
    EmptyRange { from: i64, to: i64 },

    #[error("size.min cannot be less than 0 (got {0})")]
    NegativeMinSize(i64),

    #[error("size.max ({max}) cannot be less than size.min ({min})")]
    InvertedSizeBounds { min: i64, max: i64 },

    #[error("size.max ({max}) cannot be greater than range ({range})")]
    OversizedMax { max: i64, range: i64 },
}

/// Endpoints of the index traversal. `from` defaults to 0 when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub from: Option<i64>,
    pub to: i64,
}

/// Bounds on the window sizes to enumerate.
///
/// `min` defaults to 0; `max` defaults to the derived range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Caller-facing configuration for one generation run.
///
/// Construct with [`WindowConfig::new`] and the `with_*` methods, or build
/// the struct literally; either way [`generate_pairs`](crate::generate_pairs)
/// validates it before producing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub index: IndexRange,
    pub size: SizeRange,
}

impl WindowConfig {
    /// Configuration traversing from 0 to `to`, sizes 0..=range.
    pub fn new(to: i64) -> Self {
        Self {
            index: IndexRange { from: None, to },
            size: SizeRange::default(),
        }
    }

    pub fn with_from(mut self, from: i64) -> Self {
        self.index.from = Some(from);
        self
    }

    pub fn with_min_size(mut self, min: i64) -> Self {
        self.size.min = Some(min);
        self
    }

    pub fn with_max_size(mut self, max: i64) -> Self {
        self.size.max = Some(max);
        self
    }

    /// Validate and normalize, deriving `range` and `direction`.
    ///
    /// Rules are checked in a fixed order: `index.to` bound, `index.from`
    /// bound, minimum range, `size.min` bound, then the two `size.max`
    /// bounds. The first violated rule wins.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.index.to < 0 {
            return Err(ConfigError::NegativeTo(self.index.to));
        }
        if let Some(from) = self.index.from {
            if from < 0 {
                return Err(ConfigError::NegativeFrom(from));
            }
        }

        let from = self.index.from.unwrap_or(0);
        let to = self.index.to;
        let range = (to - from).abs() + 1;

        if range < 2 {
            return Err(ConfigError::EmptyRange { from, to });
        }

        let min_size = self.size.min.unwrap_or(0);
        let max_size = self.size.max.unwrap_or(range);
        let direction = if from < to { 1 } else { -1 };

        if min_size < 0 {
            return Err(ConfigError::NegativeMinSize(min_size));
        }
        if max_size < min_size {
            return Err(ConfigError::InvertedSizeBounds {
                min: min_size,
                max: max_size,
            });
        }
        if max_size > range {
            return Err(ConfigError::OversizedMax {
                max: max_size,
                range,
            });
        }

        Ok(ResolvedConfig {
            from,
            to,
            min_size,
            max_size,
            range,
            direction,
        })
    }
}

/// Normalized configuration for one generation run.
///
/// All optional fields are filled in and the derived quantities are
/// precomputed. Echoed in every [`WindowPayload`](crate::WindowPayload)
/// for caller convenience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub from: i64,
    pub to: i64,
    pub min_size: i64,
    pub max_size: i64,
    /// Count of distinct positions: `|to - from| + 1`.
    pub range: i64,
    /// +1 when `from < to`, -1 otherwise. Constant across the run.
    pub direction: i64,
}

impl ResolvedConfig {
    /// Number of size tiers enumerated: `max_size - min_size + 1`.
    #[inline]
    pub fn tiers(&self) -> i64 {
        self.max_size - self.min_size + 1
    }

    /// Total number of payloads the run will produce.
    ///
    /// Each tier of size `s` contributes exactly `range - s` windows, so
    /// the `s == range` tier (reachable only through the default
    /// `size.max`) contributes none.
    pub fn total_pairs(&self) -> usize {
        (self.min_size..=self.max_size)
            .map(|s| (self.range - s) as usize)
            .sum()
    }
}
