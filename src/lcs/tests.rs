use super::*;
use crate::sequence::SequenceKind;
use alloc::{
    string::{String, ToString},
    sync::Arc,
    vec,
};
use core::sync::atomic::AtomicBool;

fn all_options() -> Vec<LcsOptions> {
    let mut options = Vec::new();
    for strategy in [Strategy::Auto, Strategy::FullTable, Strategy::Checkpointed] {
        for reduce in [true, false] {
            let mut opts = LcsOptions::new();
            opts.set_strategy(strategy).set_reduce(reduce);
            options.push(opts);
        }
    }
    options
}

// Small deterministic generator so failures are reproducible
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn string(&mut self, alphabet: &[u8], max_len: u64) -> String {
        let len = self.next() % (max_len + 1);
        (0..len)
            .map(|_| alphabet[(self.next() % alphabet.len() as u64) as usize] as char)
            .collect()
    }
}

fn is_subsequence(needle: &[&str], haystack: &[&str]) -> bool {
    let mut haystack = haystack.iter();
    needle.iter().all(|n| haystack.any(|h| h == n))
}

#[test]
fn lcs_string() {
    let eq = |x: &str, y: &str, expected: &str| {
        let x = Sequence::from_chars(x);
        let y = Sequence::from_chars(y);
        for opts in all_options() {
            let out = opts.lcs(&Deadline::never(), &x, &y);
            assert_eq!(out.to_text(), expected, "{x} {y} {opts:?}");
        }
    };

    eq("", "", "");
    eq("abc", "acb", "ab");
    eq("abc", "acbc", "abc");
    eq("abc", "xxx", "");
    eq("ac", "bc", "c");
    eq("gac", "agcat", "ga");
    eq("agcat", "gac", "ac");
    eq("abc", "", "");
    eq("", "abc", "");
    eq("\u{2603}a\u{2604}", "\u{2604}a\u{2603}", "\u{2603}");
}

#[test]
fn lcs_text() {
    let eq = |x: &str, y: &str, expected: &str| {
        let join = |s: &str| {
            let mut out = String::new();
            for (idx, c) in s.chars().enumerate() {
                if idx > 0 {
                    out.push('\n');
                }
                out.push(c);
            }
            out
        };
        let (x, y, expected) = (join(x), join(y), join(expected));

        let out = lcs(
            &Deadline::never(),
            &Sequence::from_lines(&x),
            &Sequence::from_lines(&y),
        );
        assert_eq!(out.kind(), SequenceKind::Lines);
        assert_eq!(out.to_text(), expected);
    };

    eq("", "", "");
    eq("abc", "acb", "ab");
    eq("abc", "acbc", "abc");
    eq("abc", "xxx", "");
}

#[test]
fn trailing_newline_is_an_element() {
    let x = Sequence::from_lines("a\nb\n");
    let y = Sequence::from_lines("b\n");
    let out = lcs(&Deadline::never(), &x, &y);
    assert_eq!(out.elements(), ["b", ""]);
    assert_eq!(out.to_text(), "b\n");
}

#[test]
fn mixed_kinds_take_the_left_kind() {
    let x = Sequence::from_chars("abc");
    let y = Sequence::from_lines("c\nb\nc");
    let out = lcs(&Deadline::never(), &x, &y);
    assert_eq!(out.kind(), SequenceKind::Chars);
    assert_eq!(out.to_text(), "bc");
}

#[test]
fn large_single_shared_element() {
    let mut x = vec![b'x'; 10_000];
    let mut y = vec![b'y'; 10_000];
    let mid = x.len() / 2;

    let check = |x: &[u8], y: &[u8], expected: &str| {
        let x = Sequence::chars_from_utf8(x).unwrap();
        let y = Sequence::chars_from_utf8(y).unwrap();
        let out = lcs(&Deadline::never(), &x, &y);
        assert_eq!(out.to_text(), expected);
    };

    check(&x, &y, "");

    x[mid] = b'a';
    y[mid] = b'a';
    check(&x, &y, "a");
}

#[test]
fn checkpointed_matches_full_table_on_large_input() {
    let mut rng = XorShift(0x2545_f491_4f6c_dd1d);
    let x = rng.string(b"abcdefgh", 600);
    let y = rng.string(b"abcdefgh", 600);
    let x = Sequence::from_chars(&x);
    let y = Sequence::from_chars(&y);

    let mut full = LcsOptions::new();
    full.set_strategy(Strategy::FullTable);
    let mut checkpointed = LcsOptions::new();
    checkpointed.set_strategy(Strategy::Checkpointed);
    let mut auto = LcsOptions::new();
    auto.set_table_limit(1024);

    let expected = full.lcs(&Deadline::never(), &x, &y);
    assert_eq!(checkpointed.lcs(&Deadline::never(), &x, &y), expected);
    assert_eq!(auto.lcs(&Deadline::never(), &x, &y), expected);
}

#[test]
fn options_never_change_the_result() {
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
    for _ in 0..500 {
        let x = rng.string(b"abcd", 16);
        let y = rng.string(b"abce", 16);
        let x = Sequence::from_chars(&x);
        let y = Sequence::from_chars(&y);

        let results: Vec<_> = all_options()
            .iter()
            .map(|opts| opts.lcs(&Deadline::never(), &x, &y))
            .collect();
        for out in &results[1..] {
            assert_eq!(out, &results[0], "{x} {y}");
        }
    }
}

#[test]
fn properties() {
    let mut rng = XorShift(0xdead_beef_cafe_f00d);
    for _ in 0..500 {
        let x = rng.string(b"abc", 12);
        let y = rng.string(b"abc", 12);
        let x = Sequence::from_chars(&x);
        let y = Sequence::from_chars(&y);

        let (prefix, suffix) = x.common(&y);
        assert!(prefix + suffix <= cmp::min(x.len(), y.len()));

        let out = lcs(&Deadline::never(), &x, &y);
        assert!(out.len() <= cmp::min(x.len(), y.len()));
        assert!(is_subsequence(out.elements(), x.elements()));
        assert!(is_subsequence(out.elements(), y.elements()));
        assert_eq!(
            LcsOptions::new().lcs_len(&Deadline::never(), &x, &y),
            Ok(out.len())
        );
        assert_eq!(
            LcsOptions::new().lcs_len(&Deadline::never(), &y, &x),
            Ok(out.len())
        );

        assert_eq!(lcs(&Deadline::never(), &x, &x), x);

        let reduced = reduce(&x, &y);
        assert!(reduced.len() <= x.len());
        if reduced.len() < x.len() {
            assert_eq!(reduced, out);
            assert_eq!(reduced.elements()[..prefix], x.elements()[..prefix]);
            assert_eq!(
                reduced.elements()[prefix..],
                x.elements()[x.len() - suffix..]
            );
        }
    }
}

#[test]
fn lcs_len() {
    let len = |x: &str, y: &str| {
        LcsOptions::new().lcs_len(
            &Deadline::never(),
            &Sequence::from_chars(x),
            &Sequence::from_chars(y),
        )
    };

    assert_eq!(len("", ""), Ok(0));
    assert_eq!(len("abc", "abc"), Ok(3));
    assert_eq!(len("gac", "agcat"), Ok(2));
    assert_eq!(len("abc", "xxx"), Ok(0));
}

#[test]
fn cancel_flag() {
    let flag = Arc::new(AtomicBool::new(true));
    let deadline = Deadline::never().with_cancel_flag(flag);
    let x = Sequence::from_chars("gac");
    let y = Sequence::from_chars("agcat");

    for opts in all_options() {
        assert_eq!(opts.try_lcs(&deadline, &x, &y), Err(Cancelled));
        assert!(opts.lcs(&deadline, &x, &y).is_empty());
        assert_eq!(opts.lcs(&deadline, &x, &y).kind(), SequenceKind::Chars);
    }
    assert_eq!(LcsOptions::new().lcs_len(&deadline, &x, &y), Err(Cancelled));
    assert_eq!(Cancelled.to_string(), "longest common subsequence computation cancelled");
}

#[test]
fn no_table_no_cancellation() {
    // Nothing is left to compare once the affixes are gone, so the deadline is never consulted
    let flag = Arc::new(AtomicBool::new(true));
    let deadline = Deadline::never().with_cancel_flag(flag);
    let x = Sequence::from_chars("abXcd");
    let y = Sequence::from_chars("abYcd");
    assert_eq!(lcs(&deadline, &x, &y).to_text(), "abcd");
}

#[cfg(feature = "std")]
#[test]
fn expired_deadline() {
    let deadline = Deadline::after(std::time::Duration::ZERO);
    let x = Sequence::from_chars("abc");
    let y = Sequence::from_chars("acb");
    assert!(lcs(&deadline, &x, &y).is_empty());
}

#[test]
fn step_ties_move_up() {
    assert_eq!(Step::choose(true, 0, 5), Step::Diagonal);
    assert_eq!(Step::choose(false, 2, 2), Step::Up);
    assert_eq!(Step::choose(false, 3, 2), Step::Up);
    assert_eq!(Step::choose(false, 1, 2), Step::Left);
}
