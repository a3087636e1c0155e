//! Sliding-window pair enumeration with a memoized interval-DP evaluator.
//!
//! This crate enumerates, in a deterministic order, every index pair
//! `(i, j)` spanning progressively larger windows over a linear range of
//! positions, and optionally drives an interval dynamic program over those
//! pairs with automatic memoization.
//!
//! ## Core idea
//! 1. Describe the traversal with a [`WindowConfig`]: which positions to
//!    cover, and which window sizes to enumerate.
//! 2. Pull pairs lazily from [`generate_pairs`], tier by tier: all
//!    windows of the minimum size first, then each larger size in turn.
//! 3. Or let [`sliding_window`] drive a handler over the whole sequence,
//!    storing each result in a [`Memo`] keyed by the endpoint pair and
//!    resolving the three nested child windows for you.
//!
//! Because tiers are visited smallest-first, every sub-window a handler
//! needs was computed before the window that contains it. That is the
//! shape of the interval-DP family: longest palindromic substring,
//! matrix-chain products, range merging.
//!
//! ## Quick start
//! ```
//! use sliding_dp::{sliding_window, WindowConfig};
//!
//! let config = WindowConfig::new(4).with_min_size(1).with_max_size(4);
//! let memo = sliding_window(
//!     |payload, _memo, _children| format!("{}-{}", payload.pair.0, payload.pair.1),
//!     &config,
//! )?;
//! assert_eq!(memo.len(), 10);
//! assert_eq!(memo.get((0, 4)), Some(&"0-4".to_string()));
//! # Ok::<(), sliding_dp::ConfigError>(())
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains reference handlers for:
//! - Longest palindromic substring
//! - Matrix-chain multiplication
//!
//! These serve both as ready-to-use tools and as templates for writing
//! your own interval DPs on top of the evaluator.

pub mod config;
pub mod evaluator;
pub mod generator;
pub mod memo;
pub mod problems;

pub use crate::config::{ConfigError, IndexRange, ResolvedConfig, SizeRange, WindowConfig};
pub use crate::evaluator::{sliding_window, ChildValues};
pub use crate::generator::{generate_pairs, Children, PairGenerator, WindowPayload};
pub use crate::memo::Memo;
