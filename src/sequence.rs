use crate::{
    format::SequenceFormatter,
    range::{Range, RangeBounds},
};
use alloc::{string::String, vec::Vec};
use core::{fmt, str::Utf8Error};
use hashbrown::HashSet;

/// How a [`Sequence`] split its text into elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Every element is a single Unicode code point
    Chars,
    /// Every element is a line, without its terminating `\n`
    Lines,
}

impl SequenceKind {
    /// The text placed between two elements when rebuilding the original text
    pub fn separator(self) -> &'static str {
        match self {
            SequenceKind::Chars => "",
            SequenceKind::Lines => "\n",
        }
    }
}

/// An immutable, ordered list of elements borrowed from a piece of text.
///
/// Elements are compared by value. Rebuilding the text with [`to_text`](Sequence::to_text) or
/// through `Display` yields exactly the text the sequence was built from.
///
/// ```
/// use subseq::Sequence;
///
/// let lines = Sequence::from_lines("a\n\nb\n");
/// assert_eq!(lines.len(), 4);
/// assert_eq!(lines.element_at(1), Some(""));
/// assert_eq!(lines.to_text(), "a\n\nb\n");
///
/// let chars = Sequence::from_chars("h\u{e9}llo");
/// assert_eq!(chars.element_at(1), Some("\u{e9}"));
/// assert_eq!(chars.slice(1..3).to_text(), "\u{e9}l");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<'a> {
    kind: SequenceKind,
    elements: Vec<&'a str>,
}

impl<'a> Sequence<'a> {
    /// Split `text` into its Unicode code points
    pub fn from_chars(text: &'a str) -> Self {
        let elements = text
            .char_indices()
            .map(|(idx, c)| &text[idx..idx + c.len_utf8()])
            .collect();

        Self::new(SequenceKind::Chars, elements)
    }

    /// Split `text` on every `\n`.
    ///
    /// Leading and trailing empty lines are kept, so `"a\n"` has the two elements `"a"` and `""`
    /// and the empty string has a single empty element.
    pub fn from_lines(text: &'a str) -> Self {
        Self::new(SequenceKind::Lines, text.split('\n').collect())
    }

    /// Like [`from_chars`](Sequence::from_chars) for a byte buffer which must be valid UTF-8
    pub fn chars_from_utf8(bytes: &'a [u8]) -> Result<Self, Utf8Error> {
        core::str::from_utf8(bytes).map(Self::from_chars)
    }

    /// Like [`from_lines`](Sequence::from_lines) for a byte buffer which must be valid UTF-8
    pub fn lines_from_utf8(bytes: &'a [u8]) -> Result<Self, Utf8Error> {
        core::str::from_utf8(bytes).map(Self::from_lines)
    }

    /// A sequence of `kind` without any elements
    pub fn empty(kind: SequenceKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub(crate) fn new(kind: SequenceKind, elements: Vec<&'a str>) -> Self {
        Self { kind, elements }
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `idx`, or `None` if out of bounds
    pub fn element_at(&self, idx: usize) -> Option<&'a str> {
        self.elements.get(idx).copied()
    }

    pub fn elements(&self) -> &[&'a str] {
        &self.elements
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'a str> + ExactSizeIterator + '_ {
        self.elements.iter().copied()
    }

    /// A new sequence of the same kind holding the elements within `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` fall outside of the sequence.
    pub fn slice(&self, bounds: impl RangeBounds) -> Self {
        let range = Range::new(&self.elements, bounds);
        Self::new(self.kind, range.as_slice().to_vec())
    }

    /// Rebuild the text this sequence describes
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.elements.iter().map(|e| e.len() + 1).sum());
        for (idx, element) in self.elements.iter().enumerate() {
            if idx > 0 {
                text.push_str(self.kind.separator());
            }
            text.push_str(element);
        }
        text
    }

    /// Lengths of the longest common prefix and suffix with `other`.
    ///
    /// The suffix is only searched for past the common prefix, so the two never overlap and their
    /// sum never exceeds the length of the shorter sequence.
    ///
    /// ```
    /// use subseq::Sequence;
    ///
    /// let x = Sequence::from_chars("abc");
    /// assert_eq!(x.common(&Sequence::from_chars("acbc")), (1, 2));
    /// assert_eq!(x.common(&Sequence::from_chars("abc")), (3, 0));
    /// ```
    pub fn common(&self, other: &Sequence<'_>) -> (usize, usize) {
        let x = Range::new(&self.elements, ..);
        let y = Range::new(&other.elements, ..);

        let prefix = x.common_prefix_len(y);
        let suffix = x.slice(prefix..).common_suffix_len(y.slice(prefix..));

        (prefix, suffix)
    }

    /// Shrink `self` to its common prefix and suffix with `other` when nothing in between can be
    /// part of a common subsequence, otherwise return `self` unchanged.
    ///
    /// When the result is shorter than `self` it is exactly the longest common subsequence of the
    /// two, so running the full engine can be skipped.
    ///
    /// ```
    /// use subseq::Sequence;
    ///
    /// let x = Sequence::from_chars("ac");
    /// assert_eq!(x.reduce(&Sequence::from_chars("bc")).to_text(), "c");
    /// assert_eq!(x.reduce(&Sequence::from_chars("ca")).to_text(), "ac");
    /// ```
    pub fn reduce(&self, other: &Sequence<'_>) -> Self {
        let (prefix, suffix) = self.common(other);
        let x_mid = &self.elements[prefix..self.len() - suffix];
        let y_mid = &other.elements[prefix..other.len() - suffix];

        if !disjoint(x_mid, y_mid) {
            return self.clone();
        }

        let mut elements = Vec::with_capacity(prefix + suffix);
        elements.extend_from_slice(&self.elements[..prefix]);
        elements.extend_from_slice(&self.elements[self.len() - suffix..]);
        Self::new(self.kind, elements)
    }
}

// Whether no element of `x` occurs anywhere in `y`
fn disjoint(x: &[&str], y: &[&str]) -> bool {
    if x.is_empty() || y.is_empty() {
        return true;
    }

    let seen: HashSet<&str> = y.iter().copied().collect();
    !x.iter().any(|element| seen.contains(element))
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SequenceFormatter::new().fmt_sequence(self))
    }
}

impl<'s, 'a> IntoIterator for &'s Sequence<'a> {
    type Item = &'a str;
    type IntoIter = core::iter::Copied<core::slice::Iter<'s, &'a str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter().copied()
    }
}
