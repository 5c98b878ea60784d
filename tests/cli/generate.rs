use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_generate_two_files_with_duplicate_pool() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("xtest_math.c", "XTEST_DEFINE_POOL(math_suite)\n")?;
    test.write_file(
        "xtest_io.c",
        "XTEST_DEFINE_POOL(io_suite)\nXTEST_DEFINE_POOL(io_suite)\n",
    )?;

    let output = test.generate_command().args(["--dialects", "c"]).output()?;
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let runner = test.read_file("xunit_runner.c")?;
    assert_eq!(runner.matches("XTEST_EXTERN_POOL(io_suite);").count(), 1);
    assert_eq!(runner.matches("XTEST_EXTERN_POOL(math_suite);").count(), 1);
    assert_eq!(runner.matches("XTEST_IMPORT_POOL(io_suite);").count(), 1);
    assert_eq!(runner.matches("XTEST_IMPORT_POOL(math_suite);").count(), 1);
    assert!(runner.contains("#include <fossil/xtest.h>"));

    // Only the requested dialect is generated.
    assert!(!test.root().join("xunit_runner.cpp").exists());
    assert!(!test.root().join("xunit_runner.m").exists());
    assert!(!test.root().join("xunit_runner.mm").exists());

    Ok(())
}

#[test]
fn test_generate_all_dialects_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("xtest_core.c", "XTEST_DEFINE_POOL(core_suite)\n")?;
    test.write_file("xtest_ui.m", "XTEST_DEFINE_POOL(ui_suite)\n")?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    for ext in ["c", "cpp", "m", "mm"] {
        assert!(
            test.root().join(format!("xunit_runner.{}", ext)).exists(),
            "missing runner for dialect {}",
            ext
        );
    }

    let c_runner = test.read_file("xunit_runner.c")?;
    assert!(c_runner.contains("XTEST_IMPORT_POOL(core_suite);"));
    assert!(!c_runner.contains("ui_suite"));

    let m_runner = test.read_file("xunit_runner.m")?;
    assert!(m_runner.contains("#import <fossil/xtest.h>"));
    assert!(m_runner.contains("XTEST_IMPORT_POOL(ui_suite);"));
    assert!(!m_runner.contains("core_suite"));

    // The cpp tree is empty but still gets a valid skeleton.
    let cpp_runner = test.read_file("xunit_runner.cpp")?;
    assert!(cpp_runner.contains("int main(int argc, char **argv) {"));
    assert!(!cpp_runner.contains("XTEST_IMPORT_POOL"));

    Ok(())
}

#[test]
fn test_generate_empty_tree_emits_skeleton() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().args(["--dialects", "c"]).output()?;
    assert!(output.status.success());

    let runner = test.read_file("xunit_runner.c")?;
    assert!(runner.contains("#include <fossil/xtest.h>"));
    assert!(runner.contains("XTEST_CREATE(argc, argv);"));
    assert!(runner.contains("return XTEST_ERASE();"));
    assert!(!runner.contains("XTEST_EXTERN_POOL"));
    assert!(!runner.contains("XTEST_IMPORT_POOL"));

    Ok(())
}

#[test]
fn test_generate_finds_nested_files_and_comment_markers() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "suites/unit/xtest_parser.c",
        "// XTEST_DEFINE_POOL(parser_suite)\n",
    )?;

    let output = test.generate_command().args(["--dialects", "c"]).output()?;
    assert!(output.status.success());

    // Lexical extraction: the commented-out marker still registers.
    let runner = test.read_file("xunit_runner.c")?;
    assert!(runner.contains("XTEST_EXTERN_POOL(parser_suite);"));

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("xtest_a.c", "XTEST_DEFINE_POOL(alpha)\n")?;

    let output = test.generate_command().args(["--dialects", "c"]).output()?;
    assert!(output.status.success());
    let first = test.read_file("xunit_runner.c")?;

    let output = test.generate_command().args(["--dialects", "c"]).output()?;
    assert!(output.status.success());
    let second = test.read_file("xunit_runner.c")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_generate_overwrites_existing_runner() -> Result<()> {
    let test = CliTest::with_file("xtest_a.c", "XTEST_DEFINE_POOL(alpha)\n")?;
    test.write_file("xunit_runner.c", "hand-written junk\n")?;

    let output = test.generate_command().args(["--dialects", "c"]).output()?;
    assert!(output.status.success());

    let runner = test.read_file("xunit_runner.c")?;
    assert!(!runner.contains("junk"));
    assert!(runner.contains("XTEST_IMPORT_POOL(alpha);"));

    Ok(())
}

#[test]
fn test_generate_check_reports_stale_then_fresh() -> Result<()> {
    let test = CliTest::with_file("xtest_a.c", "XTEST_DEFINE_POOL(alpha)\n")?;

    // No runner on disk yet: check fails without writing anything.
    let output = test
        .generate_command()
        .args(["--dialects", "c", "--check"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(!test.root().join("xunit_runner.c").exists());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("xunit_runner.c is out of date"));

    let output = test.generate_command().args(["--dialects", "c"]).output()?;
    assert!(output.status.success());

    let output = test
        .generate_command()
        .args(["--dialects", "c", "--check"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("xunit_runner.c is up to date"));

    // A new pool makes the runner stale again.
    test.write_file("xtest_b.c", "XTEST_DEFINE_POOL(beta)\n")?;
    let output = test
        .generate_command()
        .args(["--dialects", "c", "--check"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_generate_respects_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".xgenrc.json",
        r#"{ "dialects": ["c"], "testFilePrefix": "spec_" }"#,
    )?;
    test.write_file("spec_net.c", "XTEST_DEFINE_POOL(net_suite)\n")?;
    test.write_file("xtest_ignored.c", "XTEST_DEFINE_POOL(wrong_prefix)\n")?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    let runner = test.read_file("xunit_runner.c")?;
    assert!(runner.contains("XTEST_EXTERN_POOL(net_suite);"));
    assert!(!runner.contains("wrong_prefix"));
    assert!(!test.root().join("xunit_runner.cpp").exists());

    Ok(())
}

#[test]
fn test_generate_with_source_and_output_roots() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tests/xtest_a.c", "XTEST_DEFINE_POOL(alpha)\n")?;
    test.write_file("build/.keep", "")?;

    let output = test
        .generate_command()
        .args([
            "--dialects",
            "c",
            "--source-root",
            "tests",
            "--output-root",
            "build",
        ])
        .output()?;
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(!test.root().join("xunit_runner.c").exists());
    let runner = test.read_file("build/xunit_runner.c")?;
    assert!(runner.contains("XTEST_IMPORT_POOL(alpha);"));

    Ok(())
}

#[test]
fn test_generate_fails_on_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .generate_command()
        .args(["--dialects", "c", "--source-root", "nonexistent"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(stderr.contains("Error:"));

    Ok(())
}
