//! Console driver: builds an array and a few strings, mutates them, and
//! prints what it sees.
#![allow(missing_docs)]

use oxyrt::{DynArray, NO_ERROR, OwnedString, ReplacementNode, ReplacementTable};

fn main() {
    let mut v = DynArray::new();
    let test = 'a';
    v.append(&test);
    if let Some(first) = v.get(0) {
        println!("char == {first}");
        println!("(that == {})", u32::from(*first));
    }
    println!("we wanted {}", u32::from('a'));

    let (b, c) = ('b', 'c');
    v.append(&b);
    v.append(&c);
    if v.remove(&b).is_ok() {
        println!("after remove: {v:?} (len {})", v.len());
    }

    let outer = ReplacementNode::new("global", "test1", "testA");
    let inner = ReplacementNode::new("global", "test2", "testB");
    let mut names = ReplacementTable::new();
    names.register(&outer);
    names.register(&inner);
    for name in ["test1", "test2", "test3"] {
        match names.resolve("global", name) {
            Some(mangled) => println!("{name} -> {mangled}"),
            None => println!("{name} -> (unmangled)"),
        }
    }

    let mut test2 = OwnedString::new("hello");
    test2.assign("non-initializer constructor test");
    test2.append(" world!");
    println!("test.val == {test2}");

    let test3 = OwnedString::new("hi");
    println!("{test3}");

    let result = test2.char_at(6);
    let error = OwnedString::new(result.diagnostic());
    if error.equals(NO_ERROR) {
        if let Some(byte) = result.payload() {
            println!("test.charAt(6) == \"{}\"", char::from(**byte));
        }
    }

    let result = test3.char_at(test3.len());
    println!("test3.charAt({}) -> {}", test3.len(), result.diagnostic());
}
