use crate::common::command::{baseline_dir, candidate_dir, run_dirdiff_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn warn_on_malformed_pattern(
    baseline_dir: TempDir,
    candidate_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(baseline_dir.path().join("a.txt"), "a".to_string()));
    write_file(FileSpec::new(candidate_dir.path().join("b.txt"), "b".to_string()));

    run_dirdiff_command(baseline_dir.path(), candidate_dir.path(), &["-i", "[a-"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid pattern"));

    Ok(())
}
