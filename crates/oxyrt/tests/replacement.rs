#![allow(missing_docs)]

use oxyrt::{NotFound, ReplacementNode, ReplacementTable};

#[test]
fn inner_scope_shadows_then_restores() {
    let outer = ReplacementNode::new("global", "test1", "testA");
    let mut table = ReplacementTable::new();
    table.register(&outer);

    {
        let inner = ReplacementNode::new("global", "test1", "testB");
        let mut scoped = table.clone();
        scoped.register(&inner);
        assert_eq!(scoped.resolve("global", "test1").unwrap(), "testB");
        assert_eq!(scoped.unregister(&inner), Ok(1));
        assert_eq!(scoped.resolve("global", "test1").unwrap(), "testA");
    }

    assert_eq!(table.len(), 1);
    assert_eq!(table.resolve("global", "test1").unwrap(), "testA");
}

#[test]
fn names_are_copied_and_compared_as_bytes() {
    let context = String::from("global");
    let node = ReplacementNode::new(&context, b"test2\0junk", "testB");
    drop(context);

    let mut table = ReplacementTable::new();
    table.register(&node);
    assert_eq!(table.resolve("global", "test2").unwrap(), "testB");
    assert!(table.resolve("global", "test2\0junk").is_none());
    assert_eq!(table.unregister(&node), Ok(0));
    assert_eq!(table.unregister(&node), Err(NotFound));
}
