use super::helpers::{stderr, stdout, TestProject};

const LICENSE_CLASSIFIER: &str = r#"[project]
name = "hello-world"
classifiers = [
    "Development Status :: 4 - Beta",
    "License :: OSI Approved :: MIT License",
    "Typing :: Typed",
]
"#;

const CLEAN_PROJECT: &str = r#"[project]
name = "hello-world"
classifiers = ["Typing :: Typed"]
license-files = ["LICEN[CS]E*", "AUTHORS.md"]
"#;

#[test]
fn test_no_arguments_is_noop() {
    let project = TestProject::new();

    for command in ["classifiers", "glob-resolve", "glob-syntax", "all"] {
        let output = project.run(&[command]);
        assert!(output.status.success(), "{}", command);
        assert!(stdout(&output).is_empty(), "{}", command);
    }
}

#[test]
fn test_clean_project_passes_every_check() {
    let project = TestProject::new();
    project.write("pyproject.toml", CLEAN_PROJECT);
    project.write("LICENSE", "MIT");
    project.write("AUTHORS.md", "me");

    let output = project.run(&["all", "pyproject.toml"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_classifier_violation() {
    let project = TestProject::new();
    project.write("pyproject.toml", LICENSE_CLASSIFIER);

    let output = project.run(&["classifiers", "pyproject.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "pyproject.toml: License classifier found in project metadata\n"
    );
}

#[test]
fn test_unmatched_glob_resolved_next_to_pyproject() {
    let project = TestProject::new();
    project.write("pkg/pyproject.toml", "[project]\nlicense-files = [\"LICENSE\", \"NOTICE\"]\n");
    project.write("pkg/LICENSE", "MIT");
    // Present in the working directory but not next to the pyproject
    project.write("NOTICE", "");

    let output = project.run(&["glob-resolve", "pkg/pyproject.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "pkg/pyproject.toml\n    Unmatched glob: 'NOTICE'\n");
}

#[test]
fn test_glob_syntax_violation() {
    let project = TestProject::new();
    project.write(
        "pyproject.toml",
        "[project]\nlicense-files = ['AUTHORS*', '..\\LICENSE']\n",
    );

    let output = project.run(&["glob-syntax", "pyproject.toml"]);
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("Forward slash character in glob: '..\\LICENSE'"));
    assert!(out.contains("Parent directory indicator in glob: '..\\LICENSE'"));
    assert!(!out.contains("AUTHORS*"));
}

#[test]
fn test_only_offending_files_are_reported_in_order() {
    let project = TestProject::new();
    project.write("a/pyproject.toml", LICENSE_CLASSIFIER);
    project.write("b/pyproject.toml", CLEAN_PROJECT);
    project.write("c/pyproject.toml", "[tool.poetry]\nclassifiers = [\"License :: Other\"]\n");

    let output = project.run(&[
        "classifiers",
        "a/pyproject.toml",
        "b/pyproject.toml",
        "c/pyproject.toml",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "a/pyproject.toml: License classifier found in project metadata\n\
         c/pyproject.toml: License classifier found in project metadata\n"
    );
}

#[test]
fn test_unsupported_metadata_table_passes() {
    let project = TestProject::new();
    project.write(
        "pyproject.toml",
        "[tool.dingdong]\nclassifiers = [\"License :: Other\"]\nlicense-files = [\"../NOPE\"]\n",
    );

    let output = project.run(&["all", "pyproject.toml"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unreadable_file_does_not_stop_the_run() {
    let project = TestProject::new();
    project.write("broken/pyproject.toml", "[project\n");
    project.write("bad/pyproject.toml", LICENSE_CLASSIFIER);

    let output = project.run(&[
        "classifiers",
        "missing/pyproject.toml",
        "broken/pyproject.toml",
        "bad/pyproject.toml",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "bad/pyproject.toml: License classifier found in project metadata\n"
    );

    let err = stderr(&output);
    assert!(err.contains("missing/pyproject.toml"));
    assert!(err.contains("broken/pyproject.toml"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let project = TestProject::new();
    project.write("pyproject.toml", "[project]\nlicense-files = [\"LICENSE\", \"../x\"]\n");
    assert!(project.path().join("pyproject.toml").exists());

    let first = project.run(&["all", "pyproject.toml"]);
    let second = project.run(&["all", "pyproject.toml"]);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_all_reports_remaining_checks_when_one_field_is_malformed() {
    let project = TestProject::new();
    project.write(
        "pyproject.toml",
        "[project]\nclassifiers = \"MIT\"\nlicense-files = [\"../NO_SUCH_LICENSE\"]\n",
    );

    let output = project.run(&["all", "pyproject.toml"]);
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("    Unmatched glob: '../NO_SUCH_LICENSE'\n"));
    assert!(out.contains("    Parent directory indicator in glob: '../NO_SUCH_LICENSE'\n"));
    assert!(stderr(&output).contains("classifiers"));
}

#[test]
fn test_leading_current_dir_is_normalized_in_output() {
    let project = TestProject::new();
    project.write("pyproject.toml", LICENSE_CLASSIFIER);

    let output = project.run(&["classifiers", "./pyproject.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "pyproject.toml: License classifier found in project metadata\n"
    );
}
