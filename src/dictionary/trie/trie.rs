use std::fmt::{Debug, Formatter};

use derive_new::new;

use crate::dictionary::trie::node::TrieNode;

/// Character trie over a dynamic word set. Words are sequences of Unicode
/// scalar values; segmentation and any normalization happen before words or
/// content reach the trie.
#[derive(new, Default)]
pub struct Trie {
    #[new(default)]
    pub(crate) root: TrieNode,
}

/// Outcome of the verification walk for a removal.
enum Removal {
    /// The word end is a shared prefix of longer words; only the flag goes.
    Unmark,
    /// Detach the child at this depth along the path; everything below it is
    /// unreachable once the word is gone.
    Detach(usize),
}

impl Trie {
    pub fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        current.set_terminal();
    }

    pub fn add_all<'f, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'f str>,
    {
        items.into_iter().for_each(|x| self.add(x));
    }

    /// Removes `word` if it is in the dictionary, pruning any chain of nodes
    /// no other word still needs. Absent words, bare prefixes, and the empty
    /// word leave the trie untouched.
    pub fn remove(&mut self, word: &str) {
        let units: Vec<char> = word.chars().collect();
        if units.is_empty() {
            return;
        }
        match self.removal_plan(&units) {
            None => {}
            Some(Removal::Unmark) => {
                if let Some(end) = self.node_mut(&units) {
                    end.clear_terminal();
                }
            }
            Some(Removal::Detach(depth)) => {
                if let Some(anchor) = self.node_mut(&units[..depth]) {
                    anchor.remove_child(units[depth]);
                }
            }
        }
    }

    pub fn remove_all<'f, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'f str>,
    {
        items.into_iter().for_each(|x| self.remove(x));
    }

    /// True when no word is stored below the root.
    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }

    /// Walks the whole path first, recording the deepest node that must
    /// survive: the root, any word end along the way, or any node with other
    /// children. Aborts (None) when the word was never stored. The mutation
    /// itself happens afterwards, in `remove`.
    fn removal_plan(&self, units: &[char]) -> Option<Removal> {
        let mut anchor = 0;
        let mut node = &self.root;
        for (depth, &c) in units.iter().enumerate() {
            node = node.get_child(c)?;
            let last = depth + 1 == units.len();
            if !last && (node.is_terminal() || node.child_count() > 1) {
                anchor = depth + 1;
            }
        }
        if !node.is_terminal() {
            return None;
        }
        if node.has_children() {
            Some(Removal::Unmark)
        } else {
            Some(Removal::Detach(anchor))
        }
    }

    fn node_mut(&mut self, units: &[char]) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for &c in units {
            node = node.get_child_mut(c)?;
        }
        Some(node)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(x);
            stack.extend(x.children());
        }
        l.finish()
    }
}
