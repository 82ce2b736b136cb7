use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::PathBuf;

/// Expansions an ancestry check may spend before it gives up and keeps the edge
pub const DEFAULT_ANCESTRY_STEP_LIMIT: usize = 10_000;

/// Parameters of one revision walk
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RevListOptions {
    /// Commits the walk starts from
    pub start_points: Vec<ObjectId>,
    /// Commits whose ancestry is hidden, `^rev` in a range
    #[new(default)]
    pub excluded: Vec<ObjectId>,
    /// Paths commits must touch; empty means every commit
    #[new(default)]
    pub paths: Vec<PathBuf>,
    #[new(default)]
    pub max_count: Option<usize>,
    /// Follow only the first parent of every commit
    #[new(default)]
    pub first_parent: bool,
    /// Emit irrelevant merges that keep more than one effective parent
    #[new(value = "true")]
    pub show_structural_merges: bool,
    #[new(value = "DEFAULT_ANCESTRY_STEP_LIMIT")]
    pub ancestry_step_limit: usize,
}

impl RevListOptions {
    pub fn with_excluded(mut self, excluded: Vec<ObjectId>) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn with_first_parent(mut self, first_parent: bool) -> Self {
        self.first_parent = first_parent;
        self
    }

    pub fn with_structural_merges(mut self, show_structural_merges: bool) -> Self {
        self.show_structural_merges = show_structural_merges;
        self
    }

    pub fn with_ancestry_step_limit(mut self, ancestry_step_limit: usize) -> Self {
        self.ancestry_step_limit = ancestry_step_limit;
        self
    }
}
