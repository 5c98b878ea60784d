use std::collections::BTreeSet;
use std::fmt::Write;

use super::dialect::Dialect;

/// Banner prepended to every generated runner, before the dialect's header
/// directive.
const BANNER: &str = "\
/*
==============================================================================
Generated Fossil Logic test runner.

This file is regenerated from the discovered test sources on every run.
Any manual edits will be overwritten.
==============================================================================
*/
";

/// File name of the generated runner for one dialect.
pub fn runner_file_name(base_name: &str, dialect: Dialect) -> String {
    format!("{}.{}", base_name, dialect.extension())
}

/// Render the full runner document for one dialect.
///
/// Every pool appears exactly once in the extern block and once in the
/// import block; both blocks iterate the same ordered set, so they cannot
/// disagree. An empty set still yields a complete, compilable skeleton.
pub fn render_runner(dialect: Dialect, pools: &BTreeSet<String>) -> String {
    let mut out = String::from(BANNER);
    out.push_str(dialect.header_directive());
    out.push_str("\n\n");

    out.push_str("//\n// XUNIT-GROUP: list of test groups for the runner\n//\n");
    for pool in pools {
        let _ = writeln!(out, "XTEST_EXTERN_POOL({});", pool);
    }
    out.push('\n');

    out.push_str("//\n// XUNIT-TEST RUNNER\n//\n");
    out.push_str("int main(int argc, char **argv) {\n");
    out.push_str("    XTEST_CREATE(argc, argv);\n");
    out.push('\n');
    for pool in pools {
        let _ = writeln!(out, "    XTEST_IMPORT_POOL({});", pool);
    }
    if !pools.is_empty() {
        out.push('\n');
    }
    out.push_str("    return XTEST_ERASE();\n");
    out.push_str("} // end of func\n");

    out
}
