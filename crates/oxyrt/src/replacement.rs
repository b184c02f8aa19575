//! Name-mangling records.
//!
//! A [`ReplacementNode`] says that, inside `context`, the name `before` is
//! emitted as `after`. A [`ReplacementTable`] collects nodes by reference:
//! the nodes stay owned by the caller and the table only holds handles to
//! them, so a node can be registered for the duration of a scope and
//! unregistered when the scope ends.
use crate::{DynArray, NotFound, OwnedString};

/// One name replacement inside a context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplacementNode {
    context: OwnedString,
    before: OwnedString,
    after: OwnedString,
}

impl ReplacementNode {
    /// Copies the three names into a new node.
    #[must_use]
    pub fn new(
        context: impl AsRef<[u8]>,
        before: impl AsRef<[u8]>,
        after: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            context: OwnedString::new(context),
            before: OwnedString::new(before),
            after: OwnedString::new(after),
        }
    }

    /// The context the replacement applies in.
    #[must_use]
    pub fn context(&self) -> &OwnedString {
        &self.context
    }

    /// The name before mangling.
    #[must_use]
    pub fn before(&self) -> &OwnedString {
        &self.before
    }

    /// The name after mangling.
    #[must_use]
    pub fn after(&self) -> &OwnedString {
        &self.after
    }
}

/// Borrowed [`ReplacementNode`]s, looked up by context and name.
///
/// Later registrations shadow earlier ones with the same context and name.
///
/// ```rust
/// use oxyrt::{ReplacementNode, ReplacementTable};
///
/// let outer = ReplacementNode::new("global", "test1", "testA");
/// let inner = ReplacementNode::new("global", "test1", "testB");
///
/// let mut table = ReplacementTable::new();
/// table.register(&outer);
/// table.register(&inner);
/// assert_eq!(table.resolve("global", "test1").unwrap(), "testB");
///
/// table.unregister(&inner).unwrap();
/// assert_eq!(table.resolve("global", "test1").unwrap(), "testA");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable<'a> {
    nodes: DynArray<&'a ReplacementNode>,
}

impl<'a> ReplacementTable<'a> {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: DynArray::new(),
        }
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registers `node`.
    pub fn register(&mut self, node: &'a ReplacementNode) {
        self.nodes.append(node);
    }

    /// Unregisters `node`, identified by address.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if `node` is not registered.
    pub fn unregister(&mut self, node: &'a ReplacementNode) -> Result<usize, NotFound> {
        self.nodes.remove(node)
    }

    /// The mangled name registered most recently for `name` in `context`.
    #[must_use]
    pub fn resolve(
        &self,
        context: impl AsRef<[u8]>,
        name: impl AsRef<[u8]>,
    ) -> Option<&'a OwnedString> {
        let (context, name) = (context.as_ref(), name.as_ref());
        self.nodes
            .iter()
            .rev()
            .find(|node| node.context == context && node.before == name)
            .map(|node| &node.after)
    }
}
