use super::{Cancelled, Deadline, Step, checkpoint, fill_row};
use alloc::{vec, vec::Vec};

/// Fill the whole `(len(a) + 1) x (len(b) + 1)` table, then walk it back.
///
/// Returns the indices into `a` of the elements of the subsequence, in order.
pub(super) fn solve(deadline: &Deadline, a: &[u64], b: &[u64]) -> Result<Vec<usize>, Cancelled> {
    let cols = b.len() + 1;
    let Some(len) = cell_count(a.len(), b.len()) else {
        return checkpoint::solve(deadline, a, b);
    };
    let mut cells = vec![0u32; len];

    for i in 1..=a.len() {
        deadline.check()?;
        let (above, rest) = cells.split_at_mut(i * cols);
        fill_row(a[i - 1], b, &above[(i - 1) * cols..], &mut rest[..cols]);
    }

    let mut picked = Vec::new();
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        let up = cells[(i - 1) * cols + j];
        let left = cells[i * cols + j - 1];
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

    picked.reverse();
    Ok(picked)
}

// Number of cells in the table for `rows` by `cols` elements, `None` if it can't be addressed
fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_add(1)?.checked_mul(cols.checked_add(1)?)
}
