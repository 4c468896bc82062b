
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A prefix tree over the playable words. Each node carries the character
/// reaching it (the root carries none) and whether the path from the root
/// spells a complete word. Built once from a word list, then only read.
#[derive(Debug, Default)]
pub struct Trie {
    value: Option<char>,
    valid: bool,
    children: HashMap<char, Trie>,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Reads a word list, one word per line. Blank lines are skipped and
    /// every word is uppercased.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Trie::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut trie = Trie::new();
        let mut count = 0usize;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                trie.insert(word);
                count += 1;
            }
        }
        log::debug!("loaded {} words", count);
        Ok(trie)
    }

    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = self;
        for c in word.chars() {
            let c = c.to_ascii_uppercase();
            node = node.children.entry(c).or_insert_with(|| Trie {
                value: Some(c),
                valid: false,
                children: HashMap::new(),
            });
        }
        node.valid = true;
    }

    /// The node reached by walking `word` from here, None when the walk
    /// falls off the tree or the word is empty.
    pub fn find(&self, word: &str) -> Option<&Trie> {
        if word.is_empty() {
            return None;
        }
        let mut node = self;
        for c in word.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    pub fn child(&self, c: char) -> Option<&Trie> {
        self.children.get(&c.to_ascii_uppercase())
    }

    pub fn children(&self) -> &HashMap<char, Trie> {
        &self.children
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, |node| node.valid)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn value(&self) -> Option<char> {
        self.value
    }
}

#[test]
fn insert_and_lookup() {
    let mut trie = Trie::new();
    trie.insert("AVOCADO");
    trie.insert("AVOID");

    assert!(trie.contains("AVOCADO"));
    assert!(trie.contains("avocado"));
    assert!(trie.contains("AVOID"));
    assert!(!trie.contains("AVO"));
    assert!(!trie.contains("AVOCADOS"));
    assert!(!trie.contains(""));
}

#[test]
fn find_returns_inner_nodes() {
    let mut trie = Trie::new();
    trie.insert("MONKEY");

    assert!(trie.find("").is_none());
    assert!(trie.find("X").is_none());

    let node = trie.find("MON").unwrap();
    assert_eq!(node.value(), Some('N'));
    assert!(!node.is_valid());
    assert!(node.find("KEY").unwrap().is_valid());
    assert!(trie.child('M').is_some());
    assert_eq!(trie.children().len(), 1);
}

#[test]
fn prefix_of_an_earlier_word_is_a_word() {
    let mut trie = Trie::new();
    trie.insert("MONKEYS");
    trie.insert("MONKEY");

    assert!(trie.contains("MONKEY"));
    assert!(trie.contains("MONKEYS"));
    assert!(!trie.contains("MONKE"));
}

#[test]
fn repeated_insert_is_harmless() {
    let mut trie = Trie::new();
    trie.insert("ZOO");
    trie.insert("ZOO");
    trie.insert("");

    assert!(trie.contains("ZOO"));
    assert!(!trie.contains(""));
    assert_eq!(trie.children().len(), 1);
}

#[test]
fn reads_word_lists() {
    use std::io::Cursor;

    let trie = Trie::from_reader(Cursor::new("monkey\n\navocado\nzoo\n")).unwrap();
    assert!(trie.contains("MONKEY"));
    assert!(trie.contains("AVOCADO"));
    assert!(trie.contains("ZOO"));
    assert!(!trie.contains("MON"));
}
