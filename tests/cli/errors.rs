use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_parse_error_aborts_by_default() -> Result<()> {
    let test = CliTest::with_file("good.py", "import os\nos.getenv('GOOD')\n")?;
    test.write_file("pkg/bad.py", "def broken(:\n    pass\n")?;

    insta::with_settings!({
        filters => vec![(r"line \d+, column \d+", "line [LINE], column [COL]")]
    }, {
        assert_cmd_snapshot!(test.command(), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to parse ./pkg/bad.py: invalid syntax at line [LINE], column [COL]
        ");
    });

    assert!(!test.root().join(".env.sample").exists());

    Ok(())
}

#[test]
fn test_parse_error_skip_policy() -> Result<()> {
    let test = CliTest::with_file("good.py", "import os\nos.getenv('GOOD')\n")?;
    test.write_file("pkg/bad.py", "def broken(:\n    pass\n")?;

    assert_cmd_snapshot!(test.command().args(["--on-parse-error", "skip"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 1 entries to .env.sample

    ----- stderr -----
    warning: 1 file(s) could not be parsed (use -v for details)
    ");

    assert_eq!(test.read_file(".env.sample")?, "GOOD=\n");

    Ok(())
}

#[test]
fn test_parse_error_skip_policy_verbose() -> Result<()> {
    let test = CliTest::with_file("good.py", "import os\nos.getenv('GOOD')\n")?;
    test.write_file("pkg/bad.py", "def broken(:\n    pass\n")?;

    let output = test
        .command()
        .args(["--on-parse-error", "skip", "-v"])
        .output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert!(
        stderr.contains("warning: pkg/bad.py could not be parsed: invalid syntax at line"),
        "{}",
        stderr
    );
    assert!(!stderr.contains("use -v for details"), "{}", stderr);

    Ok(())
}

#[test]
fn test_missing_project_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("does-not-exist").output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr.starts_with("Error: Cannot access project root: does-not-exist"),
        "{}",
        stderr
    );

    Ok(())
}

#[test]
fn test_project_dir_is_file() -> Result<()> {
    let test = CliTest::with_file("app.py", "import os\n")?;

    let output = test.command().arg("app.py").output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr.contains("Project root is not a directory: app.py"),
        "{}",
        stderr
    );

    Ok(())
}

#[test]
fn test_unwritable_output() -> Result<()> {
    let test = CliTest::with_file("app.py", "import os\nos.getenv('A')\n")?;

    let output = test.command().args(["-o", "missing/out.env"]).output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr.starts_with("Error: Failed to write output file: missing/out.env"),
        "{}",
        stderr
    );

    Ok(())
}

#[test]
fn test_invalid_policy_value() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["--on-parse-error", "ignore"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}
