use crate::common::command::{baseline_dir, run_dirdiff_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_on_missing_baseline_directory(
    baseline_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing = baseline_dir.path().join("nonexistent");

    run_dirdiff_command(&missing, baseline_dir.path(), &[])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(missing.display().to_string()));

    Ok(())
}

#[rstest]
fn fail_on_missing_candidate_directory(
    baseline_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(baseline_dir.path().join("a.txt"), "a")?;
    let missing = baseline_dir.path().join("nonexistent");

    run_dirdiff_command(baseline_dir.path(), &missing, &[])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(missing.display().to_string()));

    Ok(())
}
