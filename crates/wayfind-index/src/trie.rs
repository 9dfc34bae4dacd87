//! Character trie for exact and prefix lookups.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    end_of_word: bool,
}

impl TrieNode {
    /// Push every key ending at or below this node, spelled as `buf`
    /// followed by the path taken.
    fn collect(&self, buf: &mut String, out: &mut Vec<String>) {
        if self.end_of_word {
            out.push(buf.clone());
        }
        for (&c, child) in &self.children {
            buf.push(c);
            child.collect(buf, out);
            buf.pop();
        }
    }
}

/// A set of strings indexed by shared prefixes.
///
/// The enumeration order of [`keys_with_prefix`](Self::keys_with_prefix) is
/// unspecified.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no key has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `key`. Adding a key twice has no further effect.
    pub fn add(&mut self, key: &str) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.end_of_word {
            node.end_of_word = true;
            self.len += 1;
        }
    }

    /// Whether `key` itself was added (not merely a longer key through it).
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some_and(|n| n.end_of_word)
    }

    /// Every added key starting with `prefix`, including `prefix` itself.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            let mut buf = prefix.to_owned();
            node.collect(&mut buf, &mut out);
        }
        out
    }

    /// The longest leading run of `key` that exists as a path in the trie,
    /// regardless of whether it ends on an added key.
    pub fn longest_prefix_of(&self, key: &str) -> String {
        let mut node = &self.root;
        let mut end = 0;
        for (i, c) in key.char_indices() {
            match node.children.get(&c) {
                Some(child) => {
                    node = child;
                    end = i + c.len_utf8();
                }
                None => break,
            }
        }
        key[..end].to_owned()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
    }

    fn find(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.add(key.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(keys: Vec<String>) -> HashSet<String> {
        keys.into_iter().collect()
    }

    fn strs(keys: &[&str]) -> HashSet<String> {
        keys.iter().map(|s| s.to_string()).collect()
    }

    fn car_trie() -> Trie {
        let mut t = Trie::new();
        t.add("car");
        t.add("care");
        t.add("careful");
        t
    }

    #[test]
    fn prefix_queries() {
        let t = car_trie();
        assert_eq!(set(t.keys_with_prefix("car")), strs(&["car", "care", "careful"]));
        assert_eq!(set(t.keys_with_prefix("care")), strs(&["care", "careful"]));
        assert_eq!(set(t.keys_with_prefix("ca")), strs(&["car", "care", "careful"]));
        assert_eq!(t.keys_with_prefix("carb"), Vec::<String>::new());
        assert_eq!(t.keys_with_prefix("dog"), Vec::<String>::new());
        assert_eq!(t.keys_with_prefix("").len(), 3);
    }

    #[test]
    fn exact_membership() {
        let t = car_trie();
        assert!(t.contains("car"));
        assert!(t.contains("careful"));
        assert!(!t.contains("ca"));
        assert!(!t.contains("carefully"));
        assert!(!t.contains(""));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn longest_prefix() {
        let t = car_trie();
        assert_eq!(t.longest_prefix_of("caring"), "car");
        assert_eq!(t.longest_prefix_of("careless"), "care");
        assert_eq!(t.longest_prefix_of("carefully"), "careful");
        // Not an added key, but a path that exists.
        assert_eq!(t.longest_prefix_of("cab"), "ca");
        assert_eq!(t.longest_prefix_of("dog"), "");
        assert_eq!(t.longest_prefix_of(""), "");
    }

    #[test]
    fn duplicate_add_keeps_count() {
        let mut t = car_trie();
        t.add("car");
        assert_eq!(t.len(), 3);
        assert_eq!(t.keys_with_prefix("car").len(), 3);
    }

    #[test]
    fn clear_then_rebuild() {
        let mut t = car_trie();
        let before = set(t.keys_with_prefix("c"));

        t.clear();
        assert!(t.is_empty());
        assert!(!t.contains("car"));
        assert!(t.keys_with_prefix("c").is_empty());
        assert_eq!(t.longest_prefix_of("car"), "");

        t.extend(["car", "care", "careful"]);
        assert_eq!(set(t.keys_with_prefix("c")), before);
        assert!(t.contains("care"));
        assert!(!t.contains("ca"));
        assert_eq!(t.longest_prefix_of("caring"), "car");
    }

    #[test]
    fn multibyte_keys() {
        let t: Trie = ["café", "cafétéria", "über"].into_iter().collect();
        assert!(t.contains("café"));
        assert_eq!(set(t.keys_with_prefix("caf")), strs(&["café", "cafétéria"]));
        assert_eq!(t.longest_prefix_of("cafés"), "café");
        assert_eq!(t.longest_prefix_of("übel"), "übe");
        assert_eq!(t.longest_prefix_of("üx"), "ü");
    }

    #[test]
    fn empty_key() {
        let mut t = Trie::new();
        t.add("");
        assert!(t.contains(""));
        assert_eq!(t.keys_with_prefix(""), vec![String::new()]);
    }
}
