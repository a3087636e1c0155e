//! Worked interval-DP instances driven through the sliding-window
//! evaluator.
//!
//! These modules are both usable and serve as templates for writing your
//! own handlers:
//! - [`palindrome`]   : longest palindromic substring.
//! - [`matrix_chain`] : matrix-chain multiplication.

pub mod matrix_chain;
pub mod palindrome;
