/// Commits reachable via multiple paths appear only once
///
/// History:
/// ```
///       A
///      / \
///     B   C
///      \ /
///       D (merge)
/// ```
///
/// Expected: D, C, B, A with and without a path filter covering every change
use crate::common::command::{
    git_commit_with_timestamp, git_merge_with_timestamp, open_graph, repository_dir,
    run_git_command, walk,
};
use assert_fs::TempDir;
use bit_history::artifacts::log::walk_options::RevListOptions;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
#[case(vec![])]
#[case(vec![PathBuf::from("base.txt"), PathBuf::from("left.txt"), PathBuf::from("right.txt")])]
fn log_merge_traversal_diamond_deduplication(
    repository_dir: TempDir,
    #[case] paths: Vec<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    let a = git_commit_with_timestamp(dir, &[("base.txt", "base\n")], "A", "2024-01-01 10:00:00 +0000")?;
    run_git_command(dir, &["branch", "right"]).assert().success();
    let b = git_commit_with_timestamp(dir, &[("left.txt", "left\n")], "B", "2024-01-01 11:00:00 +0000")?;
    run_git_command(dir, &["checkout", "-q", "right"]).assert().success();
    let c = git_commit_with_timestamp(dir, &[("right.txt", "right\n")], "C", "2024-01-01 12:00:00 +0000")?;
    run_git_command(dir, &["checkout", "-q", "main"]).assert().success();
    let d = git_merge_with_timestamp(dir, "right", "D", "2024-01-01 13:00:00 +0000")?;

    let graph = open_graph(dir);
    let commits = walk(&graph, RevListOptions::new(vec![d.clone()]).with_paths(paths))?;

    assert_eq!(commits, vec![d, c, b, a]);

    Ok(())
}
