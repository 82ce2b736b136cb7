use std::collections::HashMap;
use std::hash::Hash;
use std::path::{Component, Path, PathBuf};

/// Set of repository paths a history query is restricted to
///
/// Paths are stored as a trie of components. A configured path matches
/// itself and everything beneath it. An empty set matches every path.
#[derive(Debug, Clone)]
pub struct PathFilter {
    path_trie: Trie<String>,
    root_path: PathBuf,
}

impl PathFilter {
    /// Filter letting every path through
    pub fn empty() -> Self {
        Self {
            path_trie: Trie::with_matching(true),
            root_path: PathBuf::new(),
        }
    }

    pub fn new(paths: Vec<PathBuf>) -> Self {
        let mut trie = Trie::new();
        for path in &paths {
            let components = Self::normalize(path);
            trie.insert(&components);
        }

        if paths.is_empty() {
            return Self::empty();
        }

        Self {
            path_trie: trie,
            root_path: PathBuf::new(),
        }
    }

    /// `.` components and leading or trailing separators carry no meaning
    fn normalize(path: &Path) -> Vec<String> {
        path.components()
            .filter_map(|comp| match comp {
                Component::Normal(part) => Some(part.to_string_lossy().to_string()),
                _ => None,
            })
            .collect()
    }

    /// True when no path restriction applies below the current directory
    pub fn is_pass_through(&self) -> bool {
        self.path_trie.is_matching
    }

    /// Directory this filter has been narrowed to
    pub fn path(&self) -> &Path {
        &self.root_path
    }

    /// The entry `name` of the current directory is, or lies under, a configured path
    pub fn matches_name(&self, name: &String) -> bool {
        self.path_trie.is_matching
            || self
                .path_trie
                .children
                .get(name)
                .is_some_and(|child| child.is_matching)
    }

    pub fn filter_matching_entries<'e, Entry: 'e>(
        &self,
        entries: impl Iterator<Item = (&'e String, &'e Entry)>,
    ) -> impl Iterator<Item = (&'e String, &'e Entry)> {
        entries.filter(move |(path_str, _)| self.path_trie.contains_single(path_str))
    }

    /// Narrow the filter to the entries of the subdirectory `path_part`
    pub fn subpath_filter(&self, path_part: &String) -> Self {
        Self {
            path_trie: if self.path_trie.is_matching {
                Trie::with_matching(true)
            } else {
                self.path_trie
                    .children
                    .get(path_part)
                    .cloned()
                    .unwrap_or_else(Trie::new)
            },
            root_path: self.root_path.join(path_part),
        }
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<T: Hash + Eq + Clone> {
    is_matching: bool,
    children: HashMap<T, Trie<T>>,
}

impl<T: Hash + Eq + Clone> Trie<T> {
    pub fn new() -> Self {
        Trie {
            is_matching: false,
            children: HashMap::new(),
        }
    }

    pub fn with_matching(is_matching: bool) -> Self {
        Trie {
            is_matching,
            children: HashMap::new(),
        }
    }

    pub fn insert(&mut self, path: &[T]) {
        let mut node = self;
        for part in path {
            node = node.children.entry(part.clone()).or_insert_with(Trie::new);
        }
        node.is_matching = true;
    }

    pub fn contains_single(&self, path_part: &T) -> bool {
        if self.is_matching {
            return true;
        }

        self.children.contains_key(path_part)
    }
}

impl<T: Hash + Eq + Clone> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}
