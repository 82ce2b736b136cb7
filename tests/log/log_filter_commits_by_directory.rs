use crate::common::command::{git_commit_with_timestamp, git_log, open_graph, repository_dir, walk};
use assert_fs::TempDir;
use bit_history::artifacts::log::walk_options::RevListOptions;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
#[case("src")]
#[case("src/")]
#[case("./src")]
fn log_filter_commits_by_directory(
    repository_dir: TempDir,
    #[case] path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // This test verifies that a directory path selects commits that modified any file within it
    let dir = repository_dir.path();

    git_commit_with_timestamp(dir, &[("src/main.rs", "fn main() {}\n")], "Add src/main.rs", "2024-01-01 10:00:00 +0000")?;
    git_commit_with_timestamp(dir, &[("docs/README.md", "# Docs\n")], "Add docs/README.md", "2024-01-01 11:00:00 +0000")?;
    git_commit_with_timestamp(dir, &[("src/nested/lib.rs", "// lib\n")], "Add src/nested/lib.rs", "2024-01-01 12:00:00 +0000")?;
    git_commit_with_timestamp(dir, &[("docs/README.md", "# Updated Docs\n")], "Update docs/README.md", "2024-01-01 13:00:00 +0000")?;
    let head = git_commit_with_timestamp(dir, &[("srcfile.txt", "not in src\n")], "Add srcfile.txt", "2024-01-01 14:00:00 +0000")?;

    let graph = open_graph(dir);
    let options = RevListOptions::new(vec![head]).with_paths(vec![PathBuf::from(path)]);
    let commits = walk(&graph, options)?;

    assert_eq!(commits, git_log(dir, &["main", "--", "src"])?);
    assert_eq!(commits.len(), 2);

    Ok(())
}
