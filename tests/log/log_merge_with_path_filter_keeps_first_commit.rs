/// A path-limited log across a merge must still reach the first commit
///
/// History:
/// ```
/// M1 - M2 ------- X - M4
///        \       /
///         S1 ---
/// ```
///
/// - M1, M2, M4 modify pom.xml on main
/// - S1 adds added_file.txt on a branch off M2
/// - X merges the branch back with `--no-ff`
///
/// X is relevant against M2 only. S1 is kept as a parent because nothing
/// proves it is an ancestor of M2, and M2 keeps its own parent, so M1 is
/// reached and reported.
use crate::common::command::{
    git_commit_with_timestamp, git_merge_with_timestamp, open_graph, repository_dir,
    run_git_command, walk,
};
use assert_fs::TempDir;
use bit_history::artifacts::log::rev_list::RevList;
use bit_history::artifacts::log::walk_options::RevListOptions;
use bit_history::errors::RevWalkResult;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

const MAX_COUNT: usize = 10;

#[rstest]
fn log_merge_with_path_filter_keeps_first_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    let m1 = git_commit_with_timestamp(dir, &[("pom.xml", "<project/>\n")], "Initial pom", "2024-01-01 10:00:00 +0000")?;
    let m2 = git_commit_with_timestamp(
        dir,
        &[("pom.xml", "<project><version>2</version></project>\n")],
        "Bump version",
        "2024-01-01 11:00:00 +0000",
    )?;
    run_git_command(dir, &["checkout", "-q", "-b", "treeWalkIssue"])
        .assert()
        .success();
    let s1 = git_commit_with_timestamp(dir, &[("added_file.txt", "new\n")], "Add file", "2024-01-01 12:00:00 +0000")?;
    run_git_command(dir, &["checkout", "-q", "main"]).assert().success();
    let x = git_merge_with_timestamp(dir, "treeWalkIssue", "Merge treeWalkIssue", "2024-01-01 13:00:00 +0000")?;
    let m4 = git_commit_with_timestamp(
        dir,
        &[("pom.xml", "<project><version>3</version></project>\n")],
        "Bump version again",
        "2024-01-01 14:00:00 +0000",
    )?;

    let graph = open_graph(dir);

    let unfiltered = walk(&graph, RevListOptions::new(vec![m4.clone()]).with_max_count(MAX_COUNT))?;
    assert_eq!(
        unfiltered,
        vec![m4.clone(), x.clone(), s1.clone(), m2.clone(), m1.clone()]
    );

    let options = RevListOptions::new(vec![m4.clone()])
        .with_max_count(MAX_COUNT)
        .with_paths(vec![PathBuf::from("pom.xml"), PathBuf::from("added_file.txt")]);
    let mut commits = RevList::new(&graph, options).into_iter()?;
    let filtered = commits
        .by_ref()
        .map(|commit| commit.map(|commit| commit.oid().clone()))
        .collect::<RevWalkResult<Vec<_>>>()?;

    assert_eq!(filtered, vec![m4, x.clone(), s1.clone(), m2.clone(), m1.clone()]);
    assert_eq!(commits.effective_parents(&x), Some(&[m2.clone(), s1][..]));
    assert_eq!(commits.effective_parents(&m2), Some(&[m1][..]));

    Ok(())
}
