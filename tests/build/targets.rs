//! Output shape for each target language.

use super::common::{extract_literals, Fixture};
use litsplit::codec::{Escaper, KotlinEscaper};
use litsplit::emit::Target;

const TEXT: &str = "price: $5 ${total}\n\"done\"\n";

fn manifest(target: &str) -> String {
    format!(
        r#"{{
            "version": 1,
            "target": "{}",
            "package": "demo",
            "limits": {{"maxLength": 10, "maxBytes": 100}},
            "declarations": [
                {{"interface": "demo.api.Template", "member": "fun body(): String", "path": "t.txt"}}
            ]
        }}"#,
        target
    )
}

#[test]
fn test_kotlin_target_writes_object() {
    let fixture = Fixture::new(&manifest("kotlin"), &[("t.txt", TEXT)]);

    let report = fixture.build(fixture.options());

    assert_eq!(report.target, Target::Kotlin);
    assert_eq!(report.output_path, fixture.output().join("demo/Embedded.kt"));

    let source = fixture.read("demo/Embedded.kt");
    assert!(source.starts_with("// Generated by litsplit. Do not edit.\n"));
    assert!(source.contains("package demo\n"));
    assert!(source.contains("object Embedded {"));
    assert!(source.contains("class Template : demo.api.Template {"));
    assert!(source.contains("private fun __body0(): String = \""));
    assert!(source.contains("override fun body(): String = __body0() + __body1() + __body2()"));
    assert!(!source.contains(';'), "Kotlin output needs no semicolons");
}

#[test]
fn test_kotlin_literals_escape_templates() {
    let fixture = Fixture::new(&manifest("kotlin"), &[("t.txt", TEXT)]);
    fixture.build(fixture.options());

    let literals = extract_literals(&fixture.read("demo/Embedded.kt"));
    assert_eq!(literals.len(), 3);
    assert!(literals[0].starts_with("price: \\$5"));

    let decoded: String = literals
        .iter()
        .map(|l| KotlinEscaper.unescape(l).unwrap())
        .collect();
    assert_eq!(decoded, TEXT);
}

#[test]
fn test_cli_target_overrides_manifest() {
    let fixture = Fixture::new(&manifest("kotlin"), &[("t.txt", TEXT)]);

    let report = fixture.build(fixture.options().with_target(Target::Java));

    assert_eq!(report.output_path, fixture.output().join("demo/Embedded.java"));
    let source = fixture.read("demo/Embedded.java");
    assert!(source.contains("package demo;"));
    assert!(source.contains("public static final class Template implements demo.api.Template {"));
    assert!(source.contains("return __body0() + __body1() + __body2();"));
    // Java leaves `$` alone.
    assert!(source.contains("\"price: $5 "));
}

#[test]
fn test_container_override_renames_file_and_class() {
    let fixture = Fixture::new(&manifest("java"), &[("t.txt", TEXT)]);

    let report = fixture.build(fixture.options().with_container("Resources"));

    assert_eq!(report.output_path, fixture.output().join("demo/Resources.java"));
    let source = fixture.read("demo/Resources.java");
    assert!(source.contains("public final class Resources {"));
    assert!(source.contains("private Resources() {"));
}

#[test]
fn test_empty_manifest_writes_empty_container() {
    let fixture = Fixture::new(r#"{"version": 1, "declarations": []}"#, &[]);

    let report = fixture.build(fixture.options());

    assert!(report.is_success());
    assert!(report.generated.is_empty());
    let source = fixture.read("Embedded.java");
    assert!(source.contains("public final class Embedded {"));
}
