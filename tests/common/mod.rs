// Test utility module for methodloc integration tests
#![allow(dead_code)]

use methodloc::{analyze_tree, CSharpParser, LocAggregator, LocReport, MethodKeyMode};
use std::path::{Path, PathBuf};
use std::process::Command;

/// SDK-style project file that compiles every `.cs` file below it
pub const SDK_PROJECT: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
</Project>
"#;

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Write `contents` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("path has a parent"))
        .expect("Failed to create directories");
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// Create `root/dir/name.csproj` with the given sources next to it
pub fn create_project(root: &Path, dir: &str, name: &str, sources: &[(&str, &str)]) -> PathBuf {
    let project = write_file(root, &format!("{dir}/{name}.csproj"), SDK_PROJECT);
    for (file, source) in sources {
        write_file(root, &format!("{dir}/{file}"), source);
    }
    project
}

/// Analyze a single in-memory document
pub fn analyze_source(source: &str) -> LocReport {
    analyze_source_with(source, MethodKeyMode::Signature)
}

pub fn analyze_source_with(source: &str, mode: MethodKeyMode) -> LocReport {
    let mut parser = CSharpParser::new().expect("C# grammar loads");
    let tree = parser.parse(source, "Test.cs").expect("source parses");
    let mut aggregator = LocAggregator::new(mode);
    aggregator.add_classes(analyze_tree(&tree, Path::new("Test.csproj")));
    aggregator.finish()
}

/// LOC of `method` in `class`, panicking when either is missing
pub fn method_loc(report: &LocReport, class: &str, method: &str) -> usize {
    report
        .class(class)
        .and_then(|c| c.method(method))
        .map(|m| m.loc)
        .unwrap_or_else(|| panic!("{class}.{method} not in report: {report:?}"))
}

/// Wrap statements in `class Foo { void Bar() { ... } }` with conventional layout
pub fn method_with_body(body_lines: &[&str]) -> String {
    let mut source = String::from("class Foo\n{\n    void Bar()\n    {\n");
    for line in body_lines {
        if line.is_empty() {
            source.push('\n');
        } else {
            source.push_str("        ");
            source.push_str(line);
            source.push('\n');
        }
    }
    source.push_str("    }\n}\n");
    source
}

/// Run the methodloc binary from `cwd`
pub fn run_methodloc(cwd: &Path, args: &[&str]) -> BinaryResult {
    let output = Command::new(env!("CARGO_BIN_EXE_methodloc"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("METHODLOC_CONFIG")
        .output()
        .expect("Failed to run methodloc");

    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}
