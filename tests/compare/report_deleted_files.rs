use crate::common::command::{baseline_dir, candidate_dir, run_dirdiff_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_deleted_files(
    baseline_dir: TempDir,
    candidate_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        baseline_dir.path().join("only.txt"),
        "present only in the baseline".to_string(),
    ));

    run_dirdiff_command(baseline_dir.path(), candidate_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::eq("D\tonly.txt\n"));

    Ok(())
}

#[rstest]
fn report_every_file_as_added_against_an_empty_baseline(
    baseline_dir: TempDir,
    candidate_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        candidate_dir.path().join("Fresh.md"),
        "new".to_string(),
    ));

    run_dirdiff_command(baseline_dir.path(), candidate_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::eq("A\tFresh.md\n"));

    Ok(())
}
