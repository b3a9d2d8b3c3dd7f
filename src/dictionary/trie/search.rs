use std::collections::HashMap;

use maplit::hashmap;

use crate::dictionary::trie::node::TrieNode;
use crate::dictionary::trie::trie::Trie;

impl Trie {
    pub fn contains(&self, word: &str) -> bool {
        let units: Vec<char> = word.chars().collect();
        self.get_node(&units, Some(&self.root))
            .map(|x| x.is_terminal())
            .unwrap_or(false)
    }

    /// Counts every occurrence of every stored word inside `content`,
    /// overlapping ones included. The scan restarts the walk at each offset
    /// of the content, so a word and a longer word it prefixes are both
    /// counted at the same starting position. Deliberately the plain
    /// all-offsets scan, not an Aho-Corasick automaton.
    pub fn search(&self, content: &str) -> HashMap<String, usize> {
        let units: Vec<char> = content.chars().collect();
        let mut matched = hashmap! {};
        for start in 0..units.len() {
            let mut current = &self.root;
            for &c in &units[start..] {
                match current.get_child(c) {
                    None => break,
                    Some(child) => {
                        if child.is_terminal() {
                            *matched.entry(child.path().to_string()).or_insert(0) += 1;
                        }
                        current = child;
                    }
                }
            }
        }
        matched
    }

    fn get_node<'f>(
        &'f self,
        units: &[char],
        node: Option<&'f TrieNode>,
    ) -> Option<&'f TrieNode> {
        if units.is_empty() {
            return node;
        }
        self.get_node(&units[1..], node.and_then(|n| n.get_child(units[0])))
    }
}
