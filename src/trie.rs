/// Number of child slots per node, one per lowercase ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// Maps a letter to its child slot, or `None` when it is outside `a..=z`.
fn slot_of(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

/// A node in the prefix tree
#[derive(Debug, PartialEq, Eq)]
pub struct TrieNode {
    // The letter this node represents, `None` for the root
    letter: Option<char>,
    // Whether the path to this node spells an inserted word
    is_word: bool,
    // The children of this node, indexed by `letter - 'a'`
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    fn new(letter: Option<char>) -> Self {
        TrieNode {
            letter,
            is_word: false,
            children: [const { None }; ALPHABET_SIZE],
        }
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Returns the child reached by `letter`, if one exists.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children[slot_of(letter)?].as_deref()
    }

    /// Existing children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.iter().flatten().map(|child| &**child)
    }

    /// Depth-first search collecting at most `budget` words below this node.
    ///
    /// Walks with an explicit stack so the depth of the tree never touches the
    /// call stack. Children are pushed in reverse to pop alphabetically.
    fn dfs(&self, current_word: &mut String, budget: usize, result: &mut Vec<String>) {
        let base = current_word.len();
        let mut stack = vec![(self, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if result.len() >= budget {
                break;
            }
            if depth > 0 {
                // Letters are ASCII, one byte per level.
                current_word.truncate(base + depth - 1);
                current_word.extend(node.letter);
            }
            if node.is_word {
                result.push(current_word.clone());
            }
            for child in node.children.iter().rev().flatten() {
                stack.push((&**child, depth + 1));
            }
        }
    }

    fn count(&self, f: impl Fn(&TrieNode) -> bool) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += usize::from(f(node));
            stack.extend(node.children());
        }
        total
    }
}

// The derived drop would recurse once per level.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

/// The prefix tree data structure over the letters `a` to `z`.
///
/// Input is expected to be lowercased already. Any other character ends the
/// current insertion or lookup at that character without reporting an error.
#[derive(Debug, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates a new, empty prefix tree
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(None),
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the prefix tree. Inserting the same word again
    /// leaves the tree unchanged.
    ///
    /// Stops at the first letter outside `a..=z`; nodes made for the letters
    /// before it are kept.
    pub fn insert(&mut self, word: &str) {
        let mut current_node = &mut self.root;
        for letter in word.chars() {
            let Some(slot) = slot_of(letter) else {
                return;
            };
            current_node = &mut **current_node.children[slot]
                .get_or_insert_with(|| Box::new(TrieNode::new(Some(letter))));
        }
        if !word.is_empty() {
            current_node.is_word = true;
        }
    }

    /// Returns the node reached by following every letter of `prefix`.
    pub fn lookup_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        if prefix.is_empty() {
            return None;
        }
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// Collects up to `budget` words reachable from `start`, each spelled as
    /// `prefix` followed by the letters below `start`.
    ///
    /// Words come out in pre-order: a node's own word before its children,
    /// children in alphabetical order. Anything past the budget is dropped.
    pub fn enumerate(start: &TrieNode, prefix: &str, budget: usize) -> Vec<String> {
        let mut result = Vec::new();
        let mut current_word = prefix.to_owned();
        start.dfs(&mut current_word, budget, &mut result);
        result
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.root.count(|node| node.is_word)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count(|_| true)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().next().is_none()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(trie: &Trie, prefix: &str) -> Vec<String> {
        trie.lookup_prefix(prefix)
            .map(|node| Trie::enumerate(node, prefix, usize::MAX))
            .unwrap_or_default()
    }

    #[test]
    fn test_new_trie_is_empty() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.word_count(), 0);
        assert_eq!(trie.root().letter(), None);
        assert!(!trie.root().is_word());
    }

    #[test]
    fn test_insert_marks_terminal_nodes() {
        let trie: Trie = ["cat", "car", "cart", "dog"].into_iter().collect();

        assert_eq!(trie.word_count(), 4);
        // root, c, a, t, r, t, d, o, g
        assert_eq!(trie.node_count(), 9);

        let ca = trie.lookup_prefix("ca").unwrap();
        assert_eq!(ca.letter(), Some('a'));
        assert!(!ca.is_word());
        assert!(trie.lookup_prefix("car").unwrap().is_word());
        assert!(trie.lookup_prefix("cart").unwrap().is_word());
    }

    #[test]
    fn test_shorter_word_inserted_after_extension() {
        let mut trie = Trie::new();
        trie.insert("cart");
        assert!(!trie.lookup_prefix("car").unwrap().is_word());

        trie.insert("car");
        assert!(trie.lookup_prefix("car").unwrap().is_word());
        assert_eq!(words(&trie, "c"), vec!["car", "cart"]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let once: Trie = ["apple", "app", "banana"].into_iter().collect();
        let twice: Trie = ["apple", "app", "banana", "apple", "app", "banana"]
            .into_iter()
            .collect();

        assert_eq!(once, twice);
        assert_eq!(twice.word_count(), 3);
    }

    #[test]
    fn test_every_prefix_of_a_word_is_found() {
        let dictionary = ["prediction", "predict", "trie", "tree", "z"];
        let trie: Trie = dictionary.into_iter().collect();

        for word in dictionary {
            for end in 1..=word.len() {
                assert!(
                    trie.lookup_prefix(&word[..end]).is_some(),
                    "missing prefix {:?}",
                    &word[..end]
                );
            }
        }
    }

    #[test]
    fn test_lookup_prefix_misses() {
        let trie: Trie = ["cat"].into_iter().collect();

        assert!(trie.lookup_prefix("").is_none());
        assert!(trie.lookup_prefix("d").is_none());
        assert!(trie.lookup_prefix("cats").is_none());
        assert!(trie.lookup_prefix("c4").is_none());
        assert!(trie.lookup_prefix("Cat").is_none());
    }

    #[test]
    fn test_invalid_letter_keeps_valid_prefix() {
        let mut trie = Trie::new();
        trie.insert("ab3cd");

        let ab = trie.lookup_prefix("ab").unwrap();
        assert!(!ab.is_word());
        assert_eq!(ab.children().count(), 0);
        assert_eq!(trie.word_count(), 0);
        assert!(trie.lookup_prefix("abc").is_none());
    }

    #[test]
    fn test_uppercase_and_non_ascii_are_dropped() {
        let mut trie = Trie::new();
        trie.insert("Cat");
        trie.insert("é");
        trie.insert("");

        assert!(trie.is_empty());
    }

    #[test]
    fn test_enumerate_order() {
        let trie: Trie = ["dog", "cat", "cart", "car", "ca"].into_iter().collect();

        assert_eq!(words(&trie, "ca"), vec!["ca", "car", "cart", "cat"]);
        assert_eq!(
            Trie::enumerate(trie.root(), "", usize::MAX),
            vec!["ca", "car", "cart", "cat", "dog"]
        );
    }

    #[test]
    fn test_very_long_word() {
        let word = "ab".repeat(50_000);
        let mut trie = Trie::new();
        trie.insert(&word);
        trie.insert(&word[..10]);

        assert!(trie.lookup_prefix(&word).unwrap().is_word());
        assert_eq!(trie.word_count(), 2);
        assert_eq!(trie.node_count(), word.len() + 1);
        assert_eq!(
            Trie::enumerate(trie.root(), "", usize::MAX),
            vec![word[..10].to_owned(), word.clone()]
        );
        drop(trie);
    }

    #[test]
    fn test_enumerate_resumes_after_deep_branch() {
        let trie: Trie = ["abcde", "abx", "ac", "b"].into_iter().collect();

        assert_eq!(
            Trie::enumerate(trie.root(), "", usize::MAX),
            vec!["abcde", "abx", "ac", "b"]
        );
        assert_eq!(words(&trie, "ab"), vec!["abcde", "abx"]);
    }

    #[test]
    fn test_enumerate_respects_budget() {
        let trie: Trie = ["a", "ab", "abc", "abd", "b"].into_iter().collect();

        assert_eq!(Trie::enumerate(trie.root(), "", 2), vec!["a", "ab"]);
        assert_eq!(Trie::enumerate(trie.root(), "", 4), vec!["a", "ab", "abc", "abd"]);
        assert!(Trie::enumerate(trie.root(), "", 0).is_empty());
    }
}
