//! Longest common subsequence diffing over character and line sequences.
//!
//! Text is split into a [`Sequence`] of elements, either code points ([`Sequence::from_chars`])
//! or lines ([`Sequence::from_lines`]). Two sequences can then be compared:
//!
//! * [`common`] measures their common prefix and suffix,
//! * [`reduce`] cheaply strips the left sequence down to those affixes when the rest of it can't
//!   match anything,
//! * [`lcs`] computes their longest common subsequence.
//!
//! The result is itself a [`Sequence`] borrowing from the left input, and turns back into text
//! with [`Sequence::to_text`] or its `Display` impl.
//!
//! ```
//! use subseq::{Deadline, Sequence, lcs};
//!
//! let old = Sequence::from_lines("one\ntwo\nthree\n");
//! let new = Sequence::from_lines("zero\none\nthree\nfour\n");
//!
//! let common = lcs(&Deadline::never(), &old, &new);
//! assert_eq!(common.to_text(), "one\nthree\n");
//! ```
//!
//! ## Cancellation
//!
//! Computing a longest common subsequence takes time proportional to the product of the two
//! lengths. Every computation takes a [`Deadline`], checked between rows of work; once it expires
//! [`lcs`] gives up and returns an empty sequence, while [`LcsOptions::try_lcs`] reports
//! [`Cancelled`].
//!
//! ## Features
//!
//! * `std` (default): deadlines based on [`std::time::Instant`]. Without it the crate is
//!   `no_std` and deadlines only carry a cancel flag.
//! * `color`: `SequenceFormatter::with_color` for styled terminal output.
//! * `tracing`: emit `tracing` events from the engine.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod format;
mod lcs;
mod range;
mod sequence;
mod tracing_macros;
mod utils;

pub use format::SequenceFormatter;
pub use lcs::{Cancelled, Deadline, LcsOptions, Strategy, common, lcs, reduce};
pub use range::RangeBounds;
pub use sequence::{Sequence, SequenceKind};
