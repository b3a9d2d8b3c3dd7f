use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// One unit of a stored word. A node is a word end iff `is_terminal` is set;
/// whether it has children says nothing about that (a word may be a strict
/// prefix of a longer one).
#[derive(Default)]
pub(crate) struct TrieNode {
    children: HashMap<char, Box<TrieNode>>,
    letter: char,
    path: String,
    is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn set_terminal(&mut self) {
        self.is_terminal = true;
    }

    pub(crate) fn clear_terminal(&mut self) {
        self.is_terminal = false;
    }

    /// The word spelled from the root down to this node.
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(|child| child.as_ref())
    }

    pub(crate) fn get_child_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&c).map(|child| child.as_mut())
    }

    /// Creates an empty non-terminal child for `c` if absent. Never clobbers
    /// an existing subtree.
    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        let path = &self.path;
        self.children
            .entry(c)
            .or_insert_with(|| {
                let mut path = path.clone();
                path.push(c);
                Box::new(TrieNode {
                    letter: c,
                    path,
                    ..Default::default()
                })
            })
            .as_mut()
    }

    /// Detaches and drops the whole subtree under `c`. No-op when absent.
    pub(crate) fn remove_child(&mut self, c: char) {
        self.children.remove(&c);
    }

    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &TrieNode> + '_ {
        self.children.values().map(|child| child.as_ref())
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("path", &self.path)
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field(
                "children",
                &self.children.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
