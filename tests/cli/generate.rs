use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_generate_from_nested_files() -> Result<()> {
    let test = CliTest::with_file(
        "a.py",
        r#"
import os

DEBUG = os.getenv("ONE")
"#,
    )?;
    test.write_file(
        "dir2/b.py",
        r#"
from os import environ

secret = environ.get("TWO")
"#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 2 entries to .env.sample

    ----- stderr -----
    ");

    assert_eq!(test.read_file(".env.sample")?, "ONE=\nTWO=\n");

    Ok(())
}

#[test]
fn test_generate_all_idioms_sorted() -> Result<()> {
    let test = CliTest::with_file(
        "settings.py",
        r#"
import os
from os import environ, getenv

DATABASE_URL = os.environ["DATABASE_URL"]
ZED = os.getenv("ZED", "default")
ALPHA = environ.get("ALPHA")
# bare getenv is not an os attribute call
bare = getenv("BARE")
CACHE = os.environ.get("CACHE")
again = os.getenv("ALPHA")
dynamic = os.getenv(name)
"#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 4 entries to .env.sample

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file(".env.sample")?,
        "ALPHA=\nCACHE=\nDATABASE_URL=\nZED=\n"
    );

    Ok(())
}

#[test]
fn test_generate_custom_output() -> Result<()> {
    let test = CliTest::with_file("app.py", "import os\nos.getenv('PORT')\n")?;

    assert_cmd_snapshot!(test.command().args(["-o", ".env.example"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 1 entries to .env.example

    ----- stderr -----
    ");

    assert_eq!(test.read_file(".env.example")?, "PORT=\n");
    assert!(!test.root().join(".env.sample").exists());

    Ok(())
}

#[test]
fn test_generate_project_dir_argument() -> Result<()> {
    let test = CliTest::with_file("service/app.py", "import os\nos.environ['TOKEN']\n")?;

    assert_cmd_snapshot!(test.command().arg("service"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 1 entries to .env.sample

    ----- stderr -----
    ");

    // Output is resolved against the working directory, not the project dir.
    assert_eq!(test.read_file(".env.sample")?, "TOKEN=\n");
    assert!(!test.root().join("service/.env.sample").exists());

    Ok(())
}

#[test]
fn test_generate_overwrites_existing_output() -> Result<()> {
    let test = CliTest::with_file("app.py", "import os\nos.getenv('NEW')\n")?;
    test.write_file(".env.sample", "OLD=value\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.sample")?, "NEW=\n");

    Ok(())
}

#[test]
fn test_nothing_found() -> Result<()> {
    let test = CliTest::with_file("README.md", "os.getenv('NOT_PYTHON')\n")?;
    test.write_file("app.py", "print('hello')\n")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [!] No environment variables found.

    ----- stderr -----
    ");

    assert!(!test.root().join(".env.sample").exists());

    Ok(())
}

#[test]
fn test_nothing_found_keeps_existing_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".env.sample", "KEEP=\n")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(".env.sample")?, "KEEP=\n");

    Ok(())
}

#[test]
fn test_import_bindings_mode() -> Result<()> {
    let test = CliTest::with_file("a.py", "import os as o\no.getenv('ALIASED')\n")?;
    test.write_file("b.py", "os.getenv('UNBOUND')\n")?;

    assert_cmd_snapshot!(test.command().args(["--bindings", "imports"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 1 entries to .env.sample

    ----- stderr -----
    ");

    assert_eq!(test.read_file(".env.sample")?, "ALIASED=\n");

    Ok(())
}

#[test]
fn test_verbose_reports_scanned_files() -> Result<()> {
    let test = CliTest::with_file("a.py", "import os\nos.getenv('ONE')\n")?;
    test.write_file("pkg/b.py", "print('no env here')\n")?;

    assert_cmd_snapshot!(test.command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    [✓] Wrote 1 entries to .env.sample

    ----- stderr -----
    Scanned 2 source files
    ");

    Ok(())
}
