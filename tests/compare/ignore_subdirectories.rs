use crate::common::command::{baseline_dir, candidate_dir, run_dirdiff_command};
use crate::common::file::{FileSpec, create_directory, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn ignore_subdirectories(
    baseline_dir: TempDir,
    candidate_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        baseline_dir.path().join("a").join("nested.txt"),
        "only in baseline".to_string(),
    ));
    create_directory(&candidate_dir.path().join("b"));
    write_file(FileSpec::new(
        candidate_dir.path().join("b").join("deeper").join("x.txt"),
        "only in candidate".to_string(),
    ));

    run_dirdiff_command(baseline_dir.path(), candidate_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
