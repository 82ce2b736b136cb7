use crate::common::command::{git_commit_with_timestamp, open_graph, repository_dir, walk};
use assert_fs::TempDir;
use bit_history::artifacts::log::walk_options::RevListOptions;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn log_filter_commits_by_single_file(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    let first = git_commit_with_timestamp(
        dir,
        &[("tracked.txt", "v1\n"), ("other.txt", "x\n")],
        "Add tracked.txt",
        "2024-01-01 10:00:00 +0000",
    )?;
    git_commit_with_timestamp(dir, &[("other.txt", "y\n")], "Touch other.txt", "2024-01-01 11:00:00 +0000")?;
    let third = git_commit_with_timestamp(
        dir,
        &[("tracked.txt", "v2\n")],
        "Update tracked.txt",
        "2024-01-01 12:00:00 +0000",
    )?;
    let head = git_commit_with_timestamp(dir, &[("notes.md", "n\n")], "Add notes", "2024-01-01 13:00:00 +0000")?;

    let graph = open_graph(dir);
    let options = RevListOptions::new(vec![head]).with_paths(vec![PathBuf::from("tracked.txt")]);
    let commits = walk(&graph, options)?;

    assert_eq!(commits, vec![third, first]);

    Ok(())
}
