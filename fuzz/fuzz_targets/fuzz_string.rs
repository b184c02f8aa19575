#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oxyrt::{NO_ERROR, OwnedString};

#[derive(Arbitrary, Debug)]
enum Op {
    Append(Vec<u8>),
    Assign(Vec<u8>),
    CharAt(u16),
    Equals(Vec<u8>),
    Clone,
}

/// Content stored for `bytes`: everything before the first `0`.
fn content(bytes: &[u8]) -> &[u8] {
    bytes.split(|&b| b == 0).next().unwrap_or_default()
}

fuzz_target!(|input: (Vec<u8>, Vec<Op>)| {
    let (initial, ops) = input;
    let mut s = OwnedString::new(&initial);
    let mut model = content(&initial).to_vec();

    for op in ops {
        match op {
            Op::Append(bytes) => {
                s.append(&bytes);
                model.extend_from_slice(content(&bytes));
            }
            Op::Assign(bytes) => {
                s.assign(&bytes);
                model = content(&bytes).to_vec();
            }
            Op::CharAt(i) => {
                let i = usize::from(i);
                let result = s.char_at(i);
                match model.get(i) {
                    Some(byte) => {
                        assert_eq!(result.diagnostic(), NO_ERROR);
                        assert_eq!(result.payload(), Some(&byte));
                    }
                    None => {
                        assert_eq!(result.diagnostic(), "IndexOutOfBounds");
                        assert!(result.payload().is_none());
                    }
                }
            }
            Op::Equals(bytes) => {
                assert_eq!(s.equals(&bytes), content(&bytes) == model.as_slice());
            }
            Op::Clone => {
                let copy = s.clone();
                s.append(b"#");
                model.push(b'#');
                assert_eq!(copy.len() + 1, s.len());
            }
        }
        s.assert_invariants();
        assert_eq!(s.as_bytes(), model.as_slice());
    }
});
