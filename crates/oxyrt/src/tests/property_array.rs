use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{arbitrary::ArrayOp, test_count};
use crate::{ArrayOptions, DynArray, NotFound};

fn quiet(initial_capacity: usize) -> ArrayOptions {
    ArrayOptions {
        initial_capacity,
        report_missing_removals: false,
    }
}

/// Property: after N appends the array holds exactly the N handles in
/// order, however many times it had to grow.
#[test]
fn appends_preserve_order_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(handles: Vec<u32>, initial_capacity: u8) -> bool {
        let mut arr = DynArray::with_options(quiet(usize::from(initial_capacity % 8)));
        for &h in &handles {
            arr.append(h);
        }
        arr.len() == handles.len()
            && arr.capacity() >= arr.len()
            && (0..handles.len()).all(|i| arr.get(i) == Some(handles[i]))
            && arr.get(handles.len()).is_none()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u32>, u8) -> bool);
}

/// Property: the handles copied by all reallocations together never exceed
/// twice the number of appends, and capacity never shrinks.
#[test]
fn growth_is_amortized_quickcheck() {
    fn prop(n: u16, initial_capacity: u8) -> bool {
        let n = usize::from(n % 4096);
        let mut arr = DynArray::with_options(quiet(usize::from(initial_capacity % 8)));
        let mut copied = 0;
        let mut capacity = arr.capacity();
        for i in 0..n {
            let before = arr.len();
            arr.append(i);
            if arr.capacity() != capacity {
                if arr.capacity() < capacity {
                    return false;
                }
                copied += before;
                capacity = arr.capacity();
            }
        }
        copied <= 2 * n
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(u16, u8) -> bool);
}

/// Property: removing a present handle drops exactly its first occurrence
/// and keeps the relative order of the rest; removing an absent handle
/// changes nothing.
#[test]
fn remove_matches_vec_model_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(handles: Vec<u8>, target: u8) -> bool {
        let mut arr = DynArray::with_options(quiet(1));
        arr.extend(handles.iter().copied());
        let mut model = handles.clone();

        let capacity = arr.capacity();
        let expected = match model.iter().position(|&h| h == target) {
            Some(index) => {
                model.remove(index);
                Ok(index)
            }
            None => Err(NotFound),
        };

        arr.remove(target) == expected
            && arr.as_slice() == model.as_slice()
            && arr.capacity() == capacity
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}

/// Property: any sequence of operations leaves the array equal to a `Vec`
/// driven by the same operations, with `len <= capacity` throughout.
#[test]
fn operation_sequences_match_vec_model_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(ops: Vec<ArrayOp>) -> bool {
        let mut arr = DynArray::with_options(quiet(2));
        let mut model: Vec<u8> = Vec::new();
        let mut capacity = arr.capacity();

        for op in ops {
            match op {
                ArrayOp::Append(h) => {
                    arr.append(h);
                    model.push(h);
                }
                ArrayOp::Remove(h) => {
                    let removed = arr.remove(h).ok();
                    let index = model.iter().position(|&m| m == h);
                    if let Some(index) = index {
                        model.remove(index);
                    }
                    if removed != index {
                        return false;
                    }
                }
                ArrayOp::Clear => {
                    arr.clear();
                    model.clear();
                }
            }
            arr.assert_invariants();
            if arr.as_slice() != model.as_slice()
                || arr.len() > arr.capacity()
                || arr.capacity() < capacity
            {
                return false;
            }
            capacity = arr.capacity();
        }
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<ArrayOp>) -> bool);
}
