use core::{cmp, fmt::Debug, ops};

/// A borrowed window into a slice of elements, used while scanning two sequences side by side.
#[derive(Debug)]
pub struct Range<'a, T> {
    inner: &'a [T],
    offset: usize,
    len: usize,
}

impl<T> Copy for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Range<'a, T> {
    pub fn new(inner: &'a [T], bounds: impl RangeBounds) -> Self {
        let (offset, len) = bounds.index(inner.len());
        Range { inner, offset, len }
    }

    pub fn slice(&self, bounds: impl RangeBounds) -> Self {
        let (offset, len) = bounds.index(self.len);
        Range {
            inner: self.inner,
            offset: self.offset + offset,
            len,
        }
    }

    pub fn as_slice(&self) -> &'a [T] {
        &self.inner[self.offset..self.offset + self.len]
    }

    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<T> Range<'_, T>
where
    T: PartialEq,
{
    pub fn common_prefix_len(&self, other: Range<'_, T>) -> usize {
        for (i, (item1, item2)) in self.iter().zip(other.iter()).enumerate() {
            if item1 != item2 {
                return i;
            }
        }
        cmp::min(self.len, other.len)
    }

    pub fn common_suffix_len(&self, other: Range<'_, T>) -> usize {
        for (i, (item1, item2)) in self.iter().rev().zip(other.iter().rev()).enumerate() {
            if item1 != item2 {
                return i;
            }
        }
        cmp::min(self.len, other.len)
    }
}

/// Bounds accepted by [`Sequence::slice`](crate::Sequence::slice).
///
/// Implemented for `a..b`, `a..`, `..b` and `..`.
pub trait RangeBounds: Sized + Clone + Debug {
    /// Returns `(offset, len)` of the bounds within a sequence of length `len`, or `None` if they
    /// fall outside of it.
    fn try_index(self, len: usize) -> Option<(usize, usize)>;

    /// Like [`try_index`](RangeBounds::try_index) but panics on out of range bounds.
    fn index(self, len: usize) -> (usize, usize) {
        match self.clone().try_index(len) {
            Some(range) => range,
            None => panic!("index out of range, index={:?}, len={}", self, len),
        }
    }
}

impl RangeBounds for ops::Range<usize> {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        if self.start <= self.end && self.end <= len {
            Some((self.start, self.end - self.start))
        } else {
            None
        }
    }
}

impl RangeBounds for ops::RangeFrom<usize> {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        if self.start <= len {
            Some((self.start, len - self.start))
        } else {
            None
        }
    }
}

impl RangeBounds for ops::RangeTo<usize> {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        if self.end <= len {
            Some((0, self.end))
        } else {
            None
        }
    }
}

impl RangeBounds for ops::RangeFull {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        Some((0, len))
    }
}
