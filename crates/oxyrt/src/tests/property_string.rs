use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{arbitrary::NulFree, test_count};
use crate::{Diagnostic, NO_ERROR, OwnedString};

/// Property: a new string holds exactly the input bytes, terminated by a
/// single sentinel.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn create_round_trips(bytes: NulFree) -> bool {
    let s = OwnedString::new(&bytes.0);
    s.assert_invariants();
    let with_nul = s.as_bytes_with_nul();
    s.as_bytes() == bytes.0.as_slice()
        && s.len() == bytes.0.len()
        && with_nul.len() == bytes.0.len() + 1
        && with_nul.iter().filter(|&&b| b == 0).count() == 1
        && with_nul.last() == Some(&0)
}

/// Property: input is cut at its first sentinel.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn create_stops_at_sentinel(head: NulFree, tail: Vec<u8>) -> bool {
    let mut input = head.0.clone();
    input.push(0);
    input.extend_from_slice(&tail);
    OwnedString::new(&input) == head.0.as_slice()
}

/// Property: appending `a` then `b` equals appending `a ++ b`.
#[test]
fn append_composes_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: NulFree, a: NulFree, b: NulFree) -> bool {
        let mut stepwise = OwnedString::new(&s.0);
        stepwise.append(&a.0).append(&b.0);
        stepwise.assert_invariants();

        let mut joined = a.0.clone();
        joined.extend_from_slice(&b.0);
        let mut at_once = OwnedString::new(&s.0);
        at_once.append(&joined);

        let mut expected = s.0.clone();
        expected.extend_from_slice(&joined);

        stepwise == at_once && stepwise.len() == expected.len() && stepwise == expected.as_slice()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(NulFree, NulFree, NulFree) -> bool);
}

/// Property: `char_at(i)` succeeds with the i-th byte exactly when
/// `i < len`.
#[test]
fn char_at_bounds_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: NulFree, extra: u8) -> bool {
        let s = OwnedString::new(&bytes.0);
        let len = s.len();
        let in_bounds = (0..len).all(|i| {
            let r = s.char_at(i);
            r.diagnostic() == NO_ERROR && r.payload() == Some(&&bytes.0[i])
        });
        let out_of_bounds = (len..=len + usize::from(extra)).all(|index| {
            let r = s.char_at(index);
            r.diagnostic() == "IndexOutOfBounds"
                && r.payload().is_none()
                && r.error() == Some(&Diagnostic::IndexOutOfBounds { index, len })
        });
        in_bounds && out_of_bounds
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(NulFree, u8) -> bool);
}

/// Property: `equals` is true for the creating bytes and false for any
/// candidate differing in length or in any byte.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn equals_is_whole_content(x: NulFree, y: NulFree) -> bool {
    let s = OwnedString::new(&x.0);
    s.equals(&x.0) && s.equals(&y.0) == (x.0 == y.0)
}

/// Property: mutating a clone never affects the original.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn clones_are_independent(x: NulFree, suffix: NulFree) -> bool {
    let original = OwnedString::new(&x.0);
    let mut copy = original.clone();
    copy.append(&suffix.0);
    original == x.0.as_slice() && copy.len() == x.0.len() + suffix.0.len()
}
