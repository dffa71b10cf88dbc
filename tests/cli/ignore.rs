use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_gitignore_excludes_dirs_and_files() -> Result<()> {
    let test = CliTest::with_file(".gitignore", "ignored_dir/\nignored_file.py\n")?;
    test.write_file(
        "ignored_dir/ignored.py",
        "import os\nos.getenv('SHOULD_NOT_BE_FOUND')\n",
    )?;
    test.write_file(
        "ignored_file.py",
        "import os\nos.getenv('ALSO_NOT_FOUND')\n",
    )?;
    test.write_file(
        "included.py",
        "import os\nos.getenv('SHOULD_BE_FOUND')\n",
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 1 entries to .env.sample

    ----- stderr -----
    ");

    assert_eq!(test.read_file(".env.sample")?, "SHOULD_BE_FOUND=\n");

    Ok(())
}

#[test]
fn test_ignored_broken_file_is_not_parsed() -> Result<()> {
    let test = CliTest::with_file(".gitignore", "# generated\nbuild/\n\n")?;
    test.write_file("build/broken.py", "def broken(:\n")?;
    test.write_file("app.py", "import os\nos.getenv('APP')\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.sample")?, "APP=\n");

    Ok(())
}

#[test]
fn test_custom_ignore_file() -> Result<()> {
    let test = CliTest::with_file(".sampleignore", "vendor/\n")?;
    test.write_file(".gitignore", "app.py\n")?;
    test.write_file("vendor/lib.py", "import os\nos.getenv('VENDORED')\n")?;
    test.write_file("app.py", "import os\nos.getenv('APP')\n")?;

    assert_cmd_snapshot!(test.command().args(["--ignore-file", ".sampleignore"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 1 entries to .env.sample

    ----- stderr -----
    ");

    assert_eq!(test.read_file(".env.sample")?, "APP=\n");

    Ok(())
}

#[test]
fn test_rooted_patterns_exclude_nothing() -> Result<()> {
    let test = CliTest::with_file(".gitignore", "/app.py\n/lib/\n")?;
    test.write_file("app.py", "import os\nos.getenv('APP')\n")?;
    test.write_file("lib/util.py", "import os\nos.getenv('LIB')\n")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 2 entries to .env.sample

    ----- stderr -----
    ");

    assert_eq!(test.read_file(".env.sample")?, "APP=\nLIB=\n");

    Ok(())
}
