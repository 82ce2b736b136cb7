mod log_excluded_revision_hides_ancestry;
mod log_filter_commits_by_directory;
mod log_filter_commits_by_single_file;
mod log_merge_traversal_diamond_deduplication;
mod log_merge_with_path_filter_keeps_first_commit;
