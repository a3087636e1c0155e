//! Matrix-chain multiplication driven through the sliding-window
//! evaluator.
//!
//! Classic DP:
//! - Given dimensions p[0..=n], matrices A_i of size p[i] x p[i+1],
//! - Find the parenthesization minimizing scalar multiplications.
//!
//! Window `(i, j)` covers the sub-chain A_i..A_j. Tiers of increasing
//! window size visit every chain length smallest-first, so when the
//! handler scans split points `k`, both `(i, k)` and `(k+1, j)` are
//! already memoized. The handler reads them straight from the memo rather
//! than through the three fixed children.

use crate::config::{ConfigError, WindowConfig};
use crate::evaluator::sliding_window;
use crate::memo::Memo;

/// Optimal result for one sub-chain: its cost and the split achieving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEntry {
    /// Minimal scalar multiplications for this sub-chain.
    pub cost: u64,
    /// Split point `k` of the optimal outermost product, absent for a
    /// single matrix.
    pub split: Option<usize>,
}

/// Fill the interval table for a chain with dimensions `p`.
///
/// `p.len() - 1` matrices; requires at least two of them (a single matrix
/// costs nothing and spans no window). The entry at `(0, n - 1)` holds
/// the optimum for the whole chain.
pub fn matrix_chain_order(p: &[usize]) -> Result<Memo<ChainEntry>, ConfigError> {
    assert!(p.len() >= 3, "need at least two matrices");
    let n = p.len() - 1;
    let config = WindowConfig::new(n as i64 - 1);

    sliding_window(
        |payload, memo, _children| {
            let (i, j) = payload.pair;
            if payload.current_size == 0 {
                return ChainEntry {
                    cost: 0,
                    split: None,
                };
            }

            let mut best = ChainEntry {
                cost: u64::MAX,
                split: None,
            };
            for k in i..j {
                let cost = memo[(i, k)].cost
                    + memo[(k + 1, j)].cost
                    + (p[i as usize] as u64)
                        * (p[k as usize + 1] as u64)
                        * (p[j as usize + 1] as u64);
                if cost < best.cost {
                    best = ChainEntry {
                        cost,
                        split: Some(k as usize),
                    };
                }
            }
            best
        },
        &config,
    )
}

/// Minimal multiplication cost for the whole chain.
pub fn matrix_chain_cost(p: &[usize]) -> Result<u64, ConfigError> {
    assert!(p.len() >= 2, "need at least one matrix");
    if p.len() == 2 {
        return Ok(0);
    }
    let n = p.len() - 1;
    let memo = matrix_chain_order(p)?;
    Ok(memo[(0, n as i64 - 1)].cost)
}

/// Collect the optimal split decisions `(i, j, k)` top-down, outermost
/// product first.
pub fn chain_splits(memo: &Memo<ChainEntry>, n: usize) -> Vec<(usize, usize, usize)> {
    fn collect(
        splits: &mut Vec<(usize, usize, usize)>,
        memo: &Memo<ChainEntry>,
        i: usize,
        j: usize,
    ) {
        if i >= j {
            return;
        }
        let k = memo[(i as i64, j as i64)]
            .split
            .expect("multi-matrix window must record a split");
        splits.push((i, j, k));
        collect(splits, memo, i, k);
        collect(splits, memo, k + 1, j);
    }

    let mut splits = Vec::new();
    collect(&mut splits, memo, 0, n - 1);
    splits
}
