use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_compare_smoke_test() -> Result<(), Box<dyn std::error::Error>> {
    // Create a temporary directory for the output
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("results");

    // Prepare the command
    let mut cmd = Command::cargo_bin(assert_cmd::pkg_name!())?;
    cmd.arg("--bound")
        .arg("10000") // Small enough to run quickly
        .arg("--compare")
        .arg("--samples")
        .arg("1")
        .arg("--output-dir")
        .arg(output_dir.to_str().unwrap())
        .arg("--web-report");

    // Run the command and assert success
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report generated"));

    // Assert that the output files were created
    assert!(output_dir.exists());
    assert!(output_dir.join("timings.csv").exists());
    assert!(output_dir.join("summary.json").exists());
    assert!(output_dir.join("report.html").exists());

    // Clean up the temporary directory
    temp_dir.close()?;

    Ok(())
}

#[test]
fn test_cli_single_strategy_with_verification() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("results");

    let mut cmd = Command::cargo_bin(assert_cmd::pkg_name!())?;
    cmd.arg("--bound")
        .arg("18")
        .arg("--strategy")
        .arg("fanout")
        .arg("--verify")
        .arg("--print")
        .arg("--output-dir")
        .arg(output_dir.to_str().unwrap());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 7 primes"))
        .stdout(predicate::str::contains(
            "matches the sequential reference",
        ))
        .stdout(predicate::str::contains("17"));

    assert!(output_dir.join("summary.json").exists());

    temp_dir.close()?;

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_bound() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(assert_cmd::pkg_name!())?;
    cmd.arg("--bound").arg("0").arg("--strategy").arg("fanout");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid bound"));

    Ok(())
}
