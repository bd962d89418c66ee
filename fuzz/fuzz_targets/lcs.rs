#![no_main]

use libfuzzer_sys::fuzz_target;
use subseq::{Deadline, LcsOptions, Sequence, Strategy, lcs, reduce};

fn is_subsequence(needle: &[&str], haystack: &[&str]) -> bool {
    let mut haystack = haystack.iter();
    needle.iter().all(|n| haystack.any(|h| h == n))
}

fuzz_target!(|input: (bool, &str, &str)| {
    let (lines, x, y) = input;
    let (x, y) = if lines {
        (Sequence::from_lines(x), Sequence::from_lines(y))
    } else {
        (Sequence::from_chars(x), Sequence::from_chars(y))
    };

    let (prefix, suffix) = x.common(&y);
    assert!(prefix + suffix <= x.len().min(y.len()));

    let out = lcs(&Deadline::never(), &x, &y);
    assert!(is_subsequence(out.elements(), x.elements()));
    assert!(is_subsequence(out.elements(), y.elements()));

    let mut checkpointed = LcsOptions::new();
    checkpointed.set_strategy(Strategy::Checkpointed).set_reduce(false);
    assert_eq!(checkpointed.lcs(&Deadline::never(), &x, &y), out);

    let reduced = reduce(&x, &y);
    assert!(reduced.len() <= x.len());
    if reduced.len() < x.len() {
        assert_eq!(reduced, out);
    }
});
