use crate::common::command::{baseline_dir, candidate_dir, run_dirdiff_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use filetime::FileTime;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_nothing_if_a_file_is_touched(
    baseline_dir: TempDir,
    candidate_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let baseline_file = FileSpec::new(baseline_dir.path().join("1.txt"), "one".to_string());
    let candidate_file = FileSpec::new(candidate_dir.path().join("1.txt"), "one".to_string());
    write_file(baseline_file.clone());
    write_file(candidate_file.clone());

    filetime::set_file_mtime(&baseline_file.path, FileTime::from_unix_time(1_000_000_000, 0))?;
    filetime::set_file_mtime(&candidate_file.path, FileTime::from_unix_time(1_700_000_000, 0))?;

    run_dirdiff_command(baseline_dir.path(), candidate_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
