/// `base..topic` hides everything reachable from `base`
///
/// History:
/// ```
/// A - B - C (main)
///      \
///       D - E (topic)
/// ```
///
/// Expected: E, D, same as `git log main..topic`
use crate::common::command::{
    git_commit_with_timestamp, git_log, open_graph, repository_dir, run_git_command, walk,
};
use assert_fs::TempDir;
use bit_history::artifacts::log::walk_options::RevListOptions;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_excluded_revision_hides_ancestry(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    git_commit_with_timestamp(dir, &[("a.txt", "a\n")], "A", "2024-01-01 10:00:00 +0000")?;
    git_commit_with_timestamp(dir, &[("b.txt", "b\n")], "B", "2024-01-01 11:00:00 +0000")?;
    run_git_command(dir, &["branch", "topic"]).assert().success();
    let c = git_commit_with_timestamp(dir, &[("c.txt", "c\n")], "C", "2024-01-01 12:00:00 +0000")?;
    run_git_command(dir, &["checkout", "-q", "topic"]).assert().success();
    let d = git_commit_with_timestamp(dir, &[("d.txt", "d\n")], "D", "2024-01-01 13:00:00 +0000")?;
    let e = git_commit_with_timestamp(dir, &[("e.txt", "e\n")], "E", "2024-01-01 14:00:00 +0000")?;

    let graph = open_graph(dir);
    let commits = walk(&graph, RevListOptions::new(vec![e.clone()]).with_excluded(vec![c]))?;

    assert_eq!(commits, vec![e, d]);
    assert_eq!(commits, git_log(dir, &["main..topic"])?);

    Ok(())
}
