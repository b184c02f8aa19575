#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oxyrt::{ArrayOptions, DynArray};

#[derive(Arbitrary, Debug)]
enum Op {
    Append(u16),
    Remove(u16),
    Get(u16),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    initial_capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut arr = DynArray::with_options(ArrayOptions {
        initial_capacity: usize::from(input.initial_capacity),
        report_missing_removals: false,
    });
    let mut model: Vec<u16> = Vec::new();
    let mut capacity = arr.capacity();

    for op in input.ops {
        match op {
            Op::Append(h) => {
                arr.append(h);
                model.push(h);
            }
            Op::Remove(h) => {
                let expected = model.iter().position(|&m| m == h);
                if let Some(index) = expected {
                    model.remove(index);
                }
                assert_eq!(arr.remove(h).ok(), expected);
            }
            Op::Get(i) => {
                let i = usize::from(i);
                assert_eq!(arr.get(i), model.get(i).copied());
            }
            Op::Clear => {
                arr.clear();
                model.clear();
            }
        }
        arr.assert_invariants();
        assert!(arr.capacity() >= capacity, "capacity shrank");
        capacity = arr.capacity();
        assert_eq!(arr.as_slice(), model.as_slice());
    }
});
