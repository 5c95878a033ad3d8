//! End-to-end tests for the generate workflow.

use super::common::{extract_literals, Fixture};
use litsplit::build::{run_build, BuildOptions, BuildOutcome, FailureReason, RunGuard};
use litsplit::codec::unescape_jvm;
use litsplit::{BuildError, GenerateError, ShapeError};

const MANIFEST: &str = r#"{
    "version": 1,
    "package": "com.example.assets",
    "limits": {"maxLength": 8, "maxBytes": 16},
    "declarations": [
        {"interface": "com.example.Readme", "member": "String text()", "path": "docs/README.md"},
        {"interface": "com.example.Short", "member": "String text()", "path": "short.txt"}
    ]
}"#;

#[test]
fn test_run_build_e2e_basic() {
    let fixture = Fixture::new(
        MANIFEST,
        &[
            ("docs/README.md", "# Title\n\nSome \"quoted\" text.\n"),
            ("short.txt", "hi"),
        ],
    );

    let report = fixture.build(fixture.options());

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(
        report.output_path,
        fixture.output().join("com/example/assets/Embedded.java")
    );
    assert!(report.output_path.exists(), "container should be written");

    let readme = &report.generated[0];
    assert_eq!(readme.type_name, "Readme");
    assert!(readme.chunked);
    assert_eq!(readme.fragments, 4);
    assert!(!report.generated[1].chunked);
    assert_eq!(report.total_fragments(), 5);
}

#[test]
fn test_generated_literals_decode_to_inputs() {
    let readme = "# Title\n\nSome \"quoted\" text.\n";
    let fixture = Fixture::new(MANIFEST, &[("docs/README.md", readme), ("short.txt", "hi")]);
    fixture.build(fixture.options());

    let source = fixture.read("com/example/assets/Embedded.java");
    let decoded: Vec<String> = extract_literals(&source)
        .iter()
        .map(|literal| unescape_jvm(literal).unwrap())
        .collect();

    // Chunked literals first, then the direct one, in declaration order.
    let (readme_parts, short) = decoded.split_at(decoded.len() - 1);
    assert_eq!(readme_parts.concat(), readme);
    assert_eq!(short, ["hi".to_string()]);
}

#[test]
fn test_missing_file_still_writes_container() {
    let fixture = Fixture::new(MANIFEST, &[("short.txt", "hi")]);

    let report = fixture.build(fixture.options());

    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "com.example.Readme");
    assert!(matches!(
        report.failures[0].reason,
        FailureReason::Generate(GenerateError::Load(_))
    ));

    let source = fixture.read("com/example/assets/Embedded.java");
    assert!(source.contains("class Short implements com.example.Short"));
    assert!(!source.contains("Readme"));
}

#[test]
fn test_oversized_code_point_fails_only_that_declaration() {
    let fixture = Fixture::new(
        r#"{
            "version": 1,
            "limits": {"maxLength": 8, "maxBytes": 3},
            "declarations": [
                {"interface": "demo.Emoji", "member": "String text()", "path": "emoji.txt"},
                {"interface": "demo.Plain", "member": "String text()", "path": "plain.txt"}
            ]
        }"#,
        &[("emoji.txt", "ok 😀"), ("plain.txt", "plain")],
    );

    let report = fixture.build(fixture.options());

    assert_eq!(report.generated.len(), 1);
    assert_eq!(report.generated[0].type_name, "Plain");
    assert!(matches!(
        report.failures[0].reason,
        FailureReason::Generate(GenerateError::Codec(_))
    ));
    // Default package: the container sits directly in the output directory.
    assert!(fixture.output().join("Embedded.java").exists());
}

#[test]
fn test_shape_rejection_is_reported() {
    let fixture = Fixture::new(
        r#"{
            "version": 1,
            "declarations": [
                {"interface": "demo.Good", "member": "String text()", "path": "a.txt"},
                {"interface": "demo.Bad", "member": "int size()", "path": "a.txt"}
            ]
        }"#,
        &[("a.txt", "abc")],
    );

    let report = fixture.build(fixture.options());

    assert_eq!(report.generated.len(), 1);
    assert_eq!(report.failures[0].name, "demo.Bad");
    assert!(matches!(report.failures[0].reason, FailureReason::Shape(_)));
}

#[test]
fn test_interface_without_package_is_rejected() {
    let fixture = Fixture::new(
        r#"{
            "version": 1,
            "declarations": [
                {"interface": "License", "member": "String text()", "path": "a.txt"},
                {"interface": "legal.Notice", "member": "String text()", "path": "a.txt"}
            ]
        }"#,
        &[("a.txt", "MIT")],
    );

    let report = fixture.build(fixture.options());

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "License");
    assert!(matches!(
        report.failures[0].reason,
        FailureReason::Shape(ShapeError::UnpackagedInterface(_))
    ));

    let source = fixture.read("Embedded.java");
    assert!(!source.contains("implements License"));
    assert!(source.contains("public static final class Notice implements legal.Notice {"));
}

#[test]
fn test_dollar_member_is_rejected_for_kotlin() {
    let fixture = Fixture::new(
        r#"{
            "version": 1,
            "target": "kotlin",
            "declarations": [
                {"interface": "demo.Money", "member": "fun text$2(): String", "path": "a.txt"}
            ]
        }"#,
        &[("a.txt", "$5")],
    );

    let report = fixture.build(fixture.options());

    assert!(report.generated.is_empty());
    assert!(matches!(
        report.failures[0].reason,
        FailureReason::Shape(ShapeError::InvalidIdentifier(_))
    ));
    assert!(!fixture.read("Embedded.kt").contains("text$2"));
}

#[test]
fn test_verify_flag_passes_on_real_output() {
    let text = "naïve café 東京 😀 \"q\" \\ $x\n".repeat(50);
    let fixture = Fixture::new(MANIFEST, &[("docs/README.md", &text), ("short.txt", "")]);

    let report = fixture.build(fixture.options().with_verify(true));

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(report.generated[1].chars, 0);
}

#[test]
fn test_guard_skips_second_run() {
    let fixture = Fixture::new(MANIFEST, &[("docs/README.md", "x"), ("short.txt", "y")]);
    let options = fixture.options();
    let mut guard = RunGuard::new();

    let first = run_build(&mut guard, &options).unwrap();
    assert!(matches!(first, BuildOutcome::Completed(_)));
    assert!(guard.has_run());

    std::fs::remove_dir_all(fixture.output()).unwrap();
    let second = run_build(&mut guard, &options).unwrap();
    assert!(matches!(second, BuildOutcome::Skipped));
    assert!(!fixture.output().exists(), "skipped run must not write");
}

#[test]
fn test_missing_manifest_is_fatal() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let options = BuildOptions::new(temp_dir.path().join("manifest.json"), temp_dir.path().join("out"));

    let result = run_build(&mut RunGuard::new(), &options);

    assert!(matches!(result, Err(BuildError::ReadManifest { .. })));
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_invalid_container_override_is_fatal() {
    let fixture = Fixture::new(MANIFEST, &[("short.txt", "hi")]);
    let options = fixture.options().with_container("not-valid");

    let result = run_build(&mut RunGuard::new(), &options);

    assert!(matches!(result, Err(BuildError::InvalidName { .. })));
}
