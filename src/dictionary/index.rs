use crate::dictionary::trie::trie::Trie;

/// Mutable word-set index. The trie is the only implementation here; the
/// trait marks the seam where another index could be swapped in.
pub trait Index {
    fn add(&mut self, word: &str);
    fn remove(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;

    fn add_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        items.into_iter().for_each(|x| self.add(x));
    }

    fn remove_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        items.into_iter().for_each(|x| self.remove(x));
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        Trie::add(self, word);
    }

    fn remove(&mut self, word: &str) {
        Trie::remove(self, word);
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

#[cfg(test)]
mod tests {
    use crate::dictionary::index::Index;
    use crate::dictionary::trie::trie::Trie;

    fn populate<I: Index>(index: &mut I) {
        index.add_all(vec!["he", "she", "hers"]);
        index.remove("she");
    }

    #[test]
    fn trie_works_through_the_index_seam() {
        let mut trie = Trie::new();
        populate(&mut trie);

        assert!(trie.contains("he"));
        assert!(trie.contains("hers"));
        assert!(!trie.contains("she"));
    }
}
