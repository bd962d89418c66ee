//! Table walk using only a subset of the rows.
//!
//! The forward pass keeps every `stride`-th row. Walking back, the rows between the current
//! position and the checkpoint below it are recomputed, restricted to the columns the walk can
//! still reach, and the walk continues through that block before moving to the next one. The
//! recomputed cells are the same values the full table holds, so both walks take the same path.

use super::{Cancelled, Deadline, Step, fill_row};
use alloc::{vec, vec::Vec};
use core::{cmp, mem};

pub(super) fn solve(deadline: &Deadline, a: &[u64], b: &[u64]) -> Result<Vec<usize>, Cancelled> {
    let cols = b.len() + 1;
    let stride = cmp::max(1, a.len().isqrt());

    // Row `k * stride` lives at `checkpoints[k * cols..(k + 1) * cols]`
    let mut checkpoints = vec![0u32; cols];
    let mut prev = vec![0u32; cols];
    let mut cur = vec![0u32; cols];
    for i in 1..=a.len() {
        deadline.check()?;
        fill_row(a[i - 1], b, &prev, &mut cur);
        if i % stride == 0 {
            checkpoints.extend_from_slice(&cur);
        }
        mem::swap(&mut prev, &mut cur);
    }
    drop(prev);
    drop(cur);

    let mut picked = Vec::new();
    let mut block = Vec::new();
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        let base = (i - 1) / stride * stride;
        let width = j + 1;

        let start = base / stride * cols;
        block.clear();
        block.extend_from_slice(&checkpoints[start..start + width]);
        for row in base + 1..=i {
            deadline.check()?;
            let offset = (row - base - 1) * width;
            block.resize(offset + 2 * width, 0);
            let (above, current) = block[offset..].split_at_mut(width);
            fill_row(a[row - 1], b, above, current);
        }

        while i > base && j > 0 {
            let up = block[(i - 1 - base) * width + j];
            let left = block[(i - base) * width + j - 1];
            match Step::choose(a[i - 1] == b[j - 1], up, left) {
                Step::Diagonal => {
                    picked.push(i - 1);
                    i -= 1;
                    j -= 1;
                }
                Step::Up => i -= 1,
                Step::Left => j -= 1,
            }
        }
    }

    picked.reverse();
    Ok(picked)
}
