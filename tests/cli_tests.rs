//! CLI integration tests using the real fib binary

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn fib_cmd(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("fib").unwrap();
    cmd.current_dir(&project.path);
    cmd
}

#[test]
fn test_help_output() {
    let project = TestProject::new();
    fib_cmd(&project)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("create-rsp"));
}

#[test]
fn test_bundle_help_lists_options() {
    let project = TestProject::new();
    fib_cmd(&project)
        .args(["bundle", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--remove-empty-lines"))
        .stdout(predicate::str::contains("--author"));
}

#[test]
fn test_bundle_selects_language_and_skips_excluded_dirs() {
    let project = TestProject::new();
    project.write_file("src/a.py", "print('a')\nprint('b')\n");
    project.write_file("src/b.java", "class B {}\n");
    project.write_file("src/sub/node_modules/c.py", "print('c')\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "bundle.txt", "-l", "python", "--sort", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding file:"))
        .stdout(predicate::str::contains("a.py"))
        .stdout(predicate::str::contains("c.py").not())
        .stdout(predicate::str::contains("Bundled files written to:"));

    assert_eq!(project.read_file("bundle.txt"), "print('a')\nprint('b')\n");
}

#[test]
fn test_bundle_defaults_to_current_directory() {
    let project = TestProject::new();
    project.write_file("main.go", "package main\n");

    fib_cmd(&project)
        .args(["bundle", "-o", "out.bundle", "-l", "go"])
        .assert()
        .success();

    assert_eq!(project.read_file("out.bundle"), "package main\n");
}

#[test]
fn test_bundle_sort_by_type() {
    let project = TestProject::new();
    project.write_file("src/b.py", "b.py\n");
    project.write_file("src/a.py", "a.py\n");
    project.write_file("src/z.java", "z.java\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "out.txt", "-l", "python,java", "-t", "type"])
        .assert()
        .success();

    assert_eq!(project.read_file("out.txt"), "z.java\na.py\nb.py\n");
}

#[test]
fn test_bundle_author_header() {
    let project = TestProject::new();
    project.write_file("src/a.py", "x = 1\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "out.txt", "-l", "python", "--author", "Jane"])
        .assert()
        .success();

    let output = project.read_file("out.txt");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "// Bundle created by: Jane");
    assert!(lines[1].starts_with("// Creation date: "));
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "x = 1");
}

#[test]
fn test_bundle_without_author_has_no_header() {
    let project = TestProject::new();
    project.write_file("src/a.py", "x = 1\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "out.txt", "-l", "python"])
        .assert()
        .success();

    assert_eq!(project.read_file("out.txt"), "x = 1\n");
}

#[test]
fn test_bundle_note_writes_provenance() {
    let project = TestProject::new();
    project.write_file("proj/docs/readme.txt", "read me\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "proj", "-o", "out.txt", "-l", "text", "--note"])
        .assert()
        .success();

    let absolute = project.canonical().join("proj").join("docs").join("readme.txt");
    let expected = format!(
        "// Source: docs/readme.txt\n// Absolute path: {}\n\nread me\n",
        absolute.display()
    );
    assert_eq!(project.read_file("out.txt"), expected);
}

#[test]
fn test_bundle_remove_empty_lines() {
    let project = TestProject::new();
    project.write_file("src/a.py", "a = 1\n\n    \nb = 2\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "out.txt", "-l", "python", "-r"])
        .assert()
        .success();

    assert_eq!(project.read_file("out.txt"), "a = 1\nb = 2\n");
}

#[test]
fn test_bundle_no_matching_files_succeeds() {
    let project = TestProject::new();
    project.write_file("src/a.py", "x\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "out.txt", "-l", "ruby"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching files found."));
}

#[test]
fn test_bundle_verbose_reports_skips() {
    let project = TestProject::new();
    project.write_file("src/a.cs", "class A {}\n");
    project.write_file("src/A.Designer.cs", "partial class A {}\n");
    project.write_file("src/obj/gen.cs", "class G {}\n");

    fib_cmd(&project)
        .args(["-v", "bundle", "-s", "src", "-o", "out.txt", "-l", "c#"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping excluded directory obj"))
        .stdout(predicate::str::contains("Skipping excluded file A.Designer.cs"));

    assert_eq!(project.read_file("out.txt"), "class A {}\n");
}

#[test]
fn test_unknown_language_is_rejected_before_work() {
    let project = TestProject::new();
    project.write_file("src/a.py", "x\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "out.txt", "-l", "python,cobol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language: cobol"));

    assert!(!project.file_exists("out.txt"));
}

#[test]
fn test_invalid_sort_is_rejected() {
    let project = TestProject::new();
    fib_cmd(&project)
        .args(["bundle", "-o", "out.txt", "-l", "python", "--sort", "size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'name' or 'type'"));
}

#[test]
fn test_missing_source_is_rejected() {
    let project = TestProject::new();
    fib_cmd(&project)
        .args(["bundle", "-s", "nope", "-o", "out.txt", "-l", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source directory does not exist"));

    assert!(!project.file_exists("out.txt"));
}

#[test]
fn test_missing_output_is_rejected() {
    let project = TestProject::new();
    fib_cmd(&project)
        .args(["bundle", "-l", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_unwritable_output_reports_error() {
    let project = TestProject::new();
    project.write_file("src/a.py", "x\n");

    fib_cmd(&project)
        .args(["bundle", "-s", "src", "-o", "missing/dir/out.txt", "-l", "python"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to write file"));
}

#[test]
fn test_response_file_replay() {
    let project = TestProject::new();
    project.write_file("my src/a.py", "x = 1\n\ny = 2\n");
    project.write_file(
        "command.rsp",
        "bundle --source \"my src\" --output \"out file.txt\" --language \"python\" --sort name --remove-empty-lines\n",
    );

    fib_cmd(&project).arg("@command.rsp").assert().success();

    assert_eq!(project.read_file("out file.txt"), "x = 1\ny = 2\n");
}

#[test]
fn test_response_file_combined_with_extra_args() {
    let project = TestProject::new();
    project.write_file("src/a.py", "x = 1\n");
    project.write_file("base.rsp", "bundle -s src -o out.txt");

    fib_cmd(&project)
        .args(["@base.rsp", "-l", "python", "--author", "Jane"])
        .assert()
        .success();

    assert!(project.read_file("out.txt").starts_with("// Bundle created by: Jane\n"));
}

#[test]
fn test_missing_response_file_reports_error() {
    let project = TestProject::new();
    fib_cmd(&project)
        .arg("@nothing.rsp")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read response file: nothing.rsp"));
}

#[test]
fn test_completions_bash() {
    let project = TestProject::new();
    fib_cmd(&project)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fib"));
}
