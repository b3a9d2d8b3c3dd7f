use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use delegate::delegate;
use derive_new::new;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::dictionary::trie::trie::Trie;

/// An explicitly owned dictionary instance wrapping the trie. Applications
/// construct, populate, and tear one down themselves; there is no shared
/// global.
#[derive(new, Default, Debug)]
pub struct Dictionary {
    #[new(default)]
    trie: Trie,
}

/// Shape of a dictionary file: one word per line, or delimited columns with
/// the word in `word_column`.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => {
                let columns = line.split(delimiter).collect::<Vec<_>>();
                columns.get(self.word_column.unwrap_or(0)).copied()
            }
        }
    }
}

impl Dictionary {
    /// Loads every word from `path` into the dictionary and returns how many
    /// were added. Words and content are matched per exact code point later;
    /// any normalization has to happen before the file is written.
    pub fn load_file(&mut self, path: impl AsRef<Path>, format: &FileFormat) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("opening dictionary file {}", path.display()))?;
        let reader = BufReader::new(file);

        let start = Instant::now();
        let mut count: usize = 0;
        for line in reader.lines() {
            let line = line.with_context(|| format!("reading {}", path.display()))?;
            if line.is_empty() {
                continue;
            }
            match format.parse_line(&line) {
                Some(word) if !word.is_empty() => {
                    self.trie.add(word);
                    count += 1;
                }
                _ => debug!(line = %line, "line has no word column, skipping"),
            }
        }
        info!(
            words = count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            path = %path.display(),
            "loaded dictionary"
        );
        Ok(count)
    }

    /// Reads `path` and counts every dictionary word occurring in it.
    pub fn scan_file(&self, path: impl AsRef<Path>) -> anyhow::Result<HashMap<String, usize>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading content file {}", path.display()))?;
        Ok(self.search(&content))
    }

    pub fn add_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.trie.add_all(items);
    }

    pub fn remove_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.trie.remove_all(items);
    }

    delegate! {
        to self.trie {
            pub fn add(&mut self, word: &str);
            pub fn remove(&mut self, word: &str);
            pub fn contains(&self, word: &str) -> bool;
            pub fn search(&self, content: &str) -> HashMap<String, usize>;
            pub fn is_empty(&self) -> bool;
        }
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use crate::dictionary::dictionary::{Dictionary, FileFormat};

    #[test]
    fn parses_plain_lines() {
        let format = FileFormat::builder().build();
        assert_eq!(format.parse_line("cat"), Some("cat"));
    }

    #[test]
    fn parses_delimited_lines() {
        let format = FileFormat::builder()
            .delimiter(Some(','))
            .word_column(Some(1))
            .build();
        assert_eq!(format.parse_line("42,cat,noun"), Some("cat"));
    }

    #[test]
    fn missing_column_parses_to_none() {
        let format = FileFormat::builder()
            .delimiter(Some(','))
            .word_column(Some(3))
            .build();
        assert_eq!(format.parse_line("42,cat"), None);
    }

    #[test]
    fn delegates_to_the_trie() {
        let mut dictionary = Dictionary::new();
        dictionary.add_all(vec!["ana", "banana"]);
        dictionary.remove("banana");

        assert!(dictionary.contains("ana"));
        assert!(!dictionary.contains("banana"));
        assert_eq!(
            dictionary.search("banana"),
            hashmap! {"ana".to_string() => 2}
        );
    }

    #[test]
    fn loads_and_scans_files() {
        let dir = std::env::temp_dir();
        let words_path = dir.join(format!("wordsieve-words-{}.txt", std::process::id()));
        let content_path = dir.join(format!("wordsieve-content-{}.txt", std::process::id()));
        std::fs::write(&words_path, "ana\ncat\n\n").unwrap();
        std::fs::write(&content_path, "a banana for the cat").unwrap();

        let mut dictionary = Dictionary::new();
        let loaded = dictionary
            .load_file(&words_path, &FileFormat::builder().build())
            .unwrap();
        assert_eq!(loaded, 2);

        assert_eq!(
            dictionary.scan_file(&content_path).unwrap(),
            hashmap! {
                "ana".to_string() => 2,
                "cat".to_string() => 1,
            }
        );

        std::fs::remove_file(&words_path).ok();
        std::fs::remove_file(&content_path).ok();
    }
}
