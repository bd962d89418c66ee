//! Longest common subsequence engine.
//!
//! The engine fills the classic length table where `cell[i][j]` is the length of the longest
//! common subsequence of `x[..i]` and `y[..j]`, then walks it back from the bottom right corner.
//! The walk is deterministic: a matching pair is always taken, otherwise the walk moves towards
//! the larger neighbour and, when both are equal, moves up (dropping an element of `x`).

use crate::{
    sequence::Sequence,
    tracing_macros::{debug, trace},
    utils::Classifier,
};
use alloc::vec::Vec;
use core::cmp;

mod checkpoint;
mod deadline;
mod table;

#[cfg(test)]
mod tests;

pub use deadline::{Cancelled, Deadline};

// 16 MiB worth of `u32` cells
const DEFAULT_TABLE_LIMIT: usize = 4 * 1024 * 1024;

/// How the length table is kept in memory while searching for a subsequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// `FullTable` if the table fits within the configured limit, `Checkpointed` otherwise
    #[default]
    Auto,
    /// Keep every row of the table
    FullTable,
    /// Keep one row out of every `sqrt(len(x))` and recompute the rest while walking back.
    ///
    /// Uses `O(len(y) * sqrt(len(x)))` memory and roughly twice the time of `FullTable`.
    Checkpointed,
}

/// A collection of options for modifying the way a longest common subsequence is computed
///
/// Every combination of options yields the same subsequence, they only trade time for memory.
#[derive(Debug)]
pub struct LcsOptions {
    strategy: Strategy,
    table_limit: usize,
    reduce: bool,
}

impl LcsOptions {
    /// Construct a new `LcsOptions` with default settings
    ///
    /// ## Defaults
    /// * strategy = `Strategy::Auto`
    /// * table_limit = 4194304 cells
    /// * reduce = true
    pub fn new() -> Self {
        Self {
            strategy: Strategy::Auto,
            table_limit: DEFAULT_TABLE_LIMIT,
            reduce: true,
        }
    }

    /// Set how the length table is kept in memory
    pub fn set_strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Set the largest number of cells `Strategy::Auto` keeps as a full table
    pub fn set_table_limit(&mut self, cells: usize) -> &mut Self {
        self.table_limit = cells;
        self
    }

    /// Set whether common affixes and elements of `x` which never occur in `y` are stripped
    /// before the table is built
    pub fn set_reduce(&mut self, reduce: bool) -> &mut Self {
        self.reduce = reduce;
        self
    }

    /// Compute the longest common subsequence of `x` and `y`.
    ///
    /// The result has the kind of `x` and lists its elements in the order they appear in `x`. If
    /// `deadline` expires before the computation finishes the empty sequence is returned.
    pub fn lcs<'a>(&self, deadline: &Deadline, x: &Sequence<'a>, y: &Sequence<'_>) -> Sequence<'a> {
        self.try_lcs(deadline, x, y)
            .unwrap_or_else(|Cancelled| Sequence::empty(x.kind()))
    }

    /// Like [`lcs`](LcsOptions::lcs) but reports cancellation as an error
    pub fn try_lcs<'a>(
        &self,
        deadline: &Deadline,
        x: &Sequence<'a>,
        y: &Sequence<'_>,
    ) -> Result<Sequence<'a>, Cancelled> {
        let (prefix, suffix) = if self.reduce { x.common(y) } else { (0, 0) };
        let x_elements = x.elements();
        let x_mid = &x_elements[prefix..x.len() - suffix];
        let y_mid = &y.elements()[prefix..y.len() - suffix];

        let mut classifier = Classifier::default();
        let y_ids = classifier.classify_all(y_mid);
        let in_y = classifier.distinct();
        let x_ids = classifier.classify_all(x_mid);

        // Rows for elements which never occur in `y` equal the row above them and the walk passes
        // straight up through them, so they can't change the result.
        let (rows, x_ids): (Vec<usize>, Vec<u64>) = x_ids
            .into_iter()
            .enumerate()
            .filter(|&(_, id)| !self.reduce || id < in_y)
            .unzip();

        let picked = if rows.is_empty() || y_ids.is_empty() {
            trace!(prefix, suffix, "middles share nothing, skipping table");
            Vec::new()
        } else {
            self.solve(deadline, &x_ids, &y_ids)?
        };

        let mut elements = Vec::with_capacity(prefix + picked.len() + suffix);
        elements.extend_from_slice(&x_elements[..prefix]);
        elements.extend(picked.into_iter().map(|idx| x_mid[rows[idx]]));
        elements.extend_from_slice(&x_elements[x.len() - suffix..]);

        Ok(Sequence::new(x.kind(), elements))
    }

    /// Length of the longest common subsequence of `x` and `y`, computed with two rows of the
    /// table at a time
    pub fn lcs_len(
        &self,
        deadline: &Deadline,
        x: &Sequence<'_>,
        y: &Sequence<'_>,
    ) -> Result<usize, Cancelled> {
        let (prefix, suffix) = if self.reduce { x.common(y) } else { (0, 0) };
        let x_mid = &x.elements()[prefix..x.len() - suffix];
        let y_mid = &y.elements()[prefix..y.len() - suffix];

        let mut classifier = Classifier::default();
        let mut a = classifier.classify_all(x_mid);
        let mut b = classifier.classify_all(y_mid);
        // The length is symmetric, so keep the rows as short as possible
        if b.len() > a.len() {
            core::mem::swap(&mut a, &mut b);
        }

        let mut prev = alloc::vec![0; b.len() + 1];
        let mut cur = alloc::vec![0; b.len() + 1];
        for &item in &a {
            deadline.check()?;
            fill_row(item, &b, &prev, &mut cur);
            core::mem::swap(&mut prev, &mut cur);
        }

        Ok(prefix + prev[b.len()] as usize + suffix)
    }

    fn solve(&self, deadline: &Deadline, a: &[u64], b: &[u64]) -> Result<Vec<usize>, Cancelled> {
        let strategy = match self.strategy {
            Strategy::Auto => {
                let cells = (a.len() + 1).saturating_mul(b.len() + 1);
                if cells <= self.table_limit {
                    Strategy::FullTable
                } else {
                    Strategy::Checkpointed
                }
            }
            strategy => strategy,
        };

        debug!(rows = a.len(), cols = b.len(), ?strategy, "filling lcs table");

        let picked = match strategy {
            Strategy::Checkpointed => checkpoint::solve(deadline, a, b),
            _ => table::solve(deadline, a, b),
        };

        if picked.is_err() {
            debug!("lcs table cancelled by deadline");
        }

        picked
    }
}

impl Default for LcsOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the longest common subsequence of `x` and `y` with the default [`LcsOptions`].
///
/// ```
/// use subseq::{Deadline, Sequence, lcs};
///
/// let x = Sequence::from_chars("gac");
/// let y = Sequence::from_chars("agcat");
/// assert_eq!(lcs(&Deadline::never(), &x, &y).to_text(), "ga");
/// assert_eq!(lcs(&Deadline::never(), &y, &x).to_text(), "ac");
/// ```
pub fn lcs<'a>(deadline: &Deadline, x: &Sequence<'a>, y: &Sequence<'_>) -> Sequence<'a> {
    LcsOptions::default().lcs(deadline, x, y)
}

/// Lengths of the longest common prefix and suffix of `x` and `y`, see [`Sequence::common`]
pub fn common(x: &Sequence<'_>, y: &Sequence<'_>) -> (usize, usize) {
    x.common(y)
}

/// Strip `x` down to its common affixes with `y` when nothing in between can match, see
/// [`Sequence::reduce`]
pub fn reduce<'a>(x: &Sequence<'a>, y: &Sequence<'_>) -> Sequence<'a> {
    x.reduce(y)
}

// Fill `cur` from `prev`, the row above it, for the element `item` of `x`.
//
// Both rows start with the zero column, `b` may be longer than the rows.
fn fill_row(item: u64, b: &[u64], prev: &[u32], cur: &mut [u32]) {
    debug_assert_eq!(prev.len(), cur.len());

    cur[0] = 0;
    let mut left = 0;
    let diagonal_and_up = prev.iter().zip(&prev[1..]);
    for ((cell, &other), (&diagonal, &up)) in cur[1..].iter_mut().zip(b).zip(diagonal_and_up) {
        left = if item == other {
            diagonal + 1
        } else {
            cmp::max(up, left)
        };
        *cell = left;
    }
}

/// A single move of the walk back through the table
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Both elements match and are part of the subsequence
    Diagonal,
    /// The element of `x` is dropped
    Up,
    /// The element of `y` is dropped
    Left,
}

impl Step {
    fn choose(matched: bool, up: u32, left: u32) -> Self {
        if matched {
            Step::Diagonal
        } else if up >= left {
            Step::Up
        } else {
            Step::Left
        }
    }
}
