use crate::common::file::{FileSpec, write_file};
use crate::common::init_tracing;
use assert_cmd::Command;
use assert_fs::TempDir;
use bit_history::areas::commit_graph::CommitGraph;
use bit_history::areas::database::Database;
use bit_history::artifacts::log::rev_list::RevList;
use bit_history::artifacts::log::walk_options::RevListOptions;
use bit_history::artifacts::objects::object_id::ObjectId;
use bit_history::errors::RevWalkResult;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    run_git_command(dir.path(), &["init", "-q", "-b", "main"])
        .assert()
        .success();
    dir
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.args([
        "-c",
        "user.name=fake_user",
        "-c",
        "user.email=fake_email@email.com",
        "-c",
        "commit.gpgsign=false",
        "-c",
        "gc.auto=0",
    ]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

fn with_timestamp(mut cmd: Command, timestamp: &str) -> Command {
    // %Y-%m-%d %H:%M:%S %z
    cmd.envs(vec![
        ("GIT_AUTHOR_DATE", timestamp),
        ("GIT_COMMITTER_DATE", timestamp),
    ]);
    cmd
}

/// Write `files`, stage everything and commit at `timestamp`
pub fn git_commit_with_timestamp(
    dir: &Path,
    files: &[(&str, &str)],
    message: &str,
    timestamp: &str,
) -> Result<ObjectId, Box<dyn std::error::Error>> {
    for (path, content) in files {
        write_file(FileSpec::new(dir.join(path), content.to_string()));
    }
    run_git_command(dir, &["add", "."]).assert().success();
    with_timestamp(
        run_git_command(dir, &["commit", "-q", "--allow-empty", "-m", message]),
        timestamp,
    )
    .assert()
    .success();

    rev_parse(dir, "HEAD")
}

/// Commit with a message given as raw bytes in `encoding`
pub fn git_commit_encoded_with_timestamp(
    dir: &Path,
    files: &[(&str, &str)],
    message: &[u8],
    encoding: &str,
    timestamp: &str,
) -> Result<ObjectId, Box<dyn std::error::Error>> {
    for (path, content) in files {
        write_file(FileSpec::new(dir.join(path), content.to_string()));
    }
    let message_path = dir.join(".git").join("ENCODED_MSG");
    std::fs::write(&message_path, message)?;
    let encoding = format!("i18n.commitEncoding={encoding}");

    run_git_command(dir, &["add", "."]).assert().success();
    with_timestamp(
        run_git_command(
            dir,
            &["-c", &encoding, "commit", "-q", "-F", &message_path.to_string_lossy()],
        ),
        timestamp,
    )
    .assert()
    .success();

    rev_parse(dir, "HEAD")
}

/// Merge `branch` into the current branch with a merge commit
pub fn git_merge_with_timestamp(
    dir: &Path,
    branch: &str,
    message: &str,
    timestamp: &str,
) -> Result<ObjectId, Box<dyn std::error::Error>> {
    with_timestamp(
        run_git_command(dir, &["merge", "-q", "--no-ff", "-m", message, branch]),
        timestamp,
    )
    .assert()
    .success();

    rev_parse(dir, "HEAD")
}

pub fn rev_parse(dir: &Path, revision: &str) -> Result<ObjectId, Box<dyn std::error::Error>> {
    let output = run_git_command(dir, &["rev-parse", revision]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    Ok(ObjectId::try_parse(stdout.trim().to_string())?)
}

/// Commit ids `git log` prints for `args`, newest first
pub fn git_log(dir: &Path, args: &[&str]) -> Result<Vec<ObjectId>, Box<dyn std::error::Error>> {
    let mut log_args = vec!["log", "--format=%H"];
    log_args.extend_from_slice(args);
    let output = run_git_command(dir, &log_args).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    Ok(stdout
        .lines()
        .map(|line| ObjectId::try_parse(line.to_string()))
        .collect::<anyhow::Result<Vec<_>>>()?)
}

pub fn open_graph(dir: &Path) -> CommitGraph<Database> {
    CommitGraph::new(Database::open(dir.join(".git")))
}

/// Run a walk to completion and collect the emitted ids
pub fn walk(
    graph: &CommitGraph<Database>,
    options: RevListOptions,
) -> RevWalkResult<Vec<ObjectId>> {
    RevList::new(graph, options)
        .into_iter()?
        .map(|commit| commit.map(|commit| commit.oid().clone()))
        .collect()
}
