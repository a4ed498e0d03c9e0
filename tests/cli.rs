//! Integration tests for the `exam` binary

use assert_cmd::Command;
use exam::exam::Document;
use predicates::prelude::*;
use std::io::Write;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn exam() -> Command {
    Command::cargo_bin("exam").expect("exam binary to be built")
}

#[test]
fn parse_prints_treeviz_by_default() {
    exam()
        .args(["parse", &fixture("sample.tex")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ Document\n"))
        .stdout(predicate::str::contains("│ └─ § Subsect 1.2"))
        .stdout(predicate::str::contains("└─ § Sect 2"));
}

#[test]
fn parse_prints_json() {
    let output = exam()
        .args(["parse", &fixture("sample.tex"), "--format", "json"])
        .output()
        .expect("exam to run");

    assert!(output.status.success());
    let doc: Document = serde_json::from_slice(&output.stdout).expect("valid JSON document");
    assert_eq!(doc.question_count(), 6);
    assert_eq!(doc.topic.subtopics[0].title, "Sect 1");
}

#[test]
fn parse_reads_stdin() {
    exam()
        .args(["parse", "-", "--format", "latex"])
        .write_stdin("% h\n\\begin{document}\n\\section{S}\n\\end{document}\n")
        .assert()
        .success()
        .stdout("% h\n\\begin{document}\n\\section{S}\n\\end{document}\n");
}

#[test]
fn parse_reports_end_of_input() {
    exam()
        .args(["parse", &fixture("truncated.tex")])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Line 6: Unexpected end of input.",
        ));
}

#[test]
fn parse_reports_orphan_subsection() {
    exam()
        .args(["parse", &fixture("orphan_subsection.tex")])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Line 6: Subsection must be under section.",
        ));
}

#[test]
fn parse_reports_missing_file() {
    exam()
        .args(["parse", &fixture("missing.tex")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn parse_rejects_unknown_format() {
    exam()
        .args(["parse", &fixture("sample.tex"), "--format", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format 'nope' not found"))
        .stderr(predicate::str::contains("json, latex, treeviz, yaml"));
}

#[test]
fn config_file_selects_format() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[output]\nformat = \"yaml\"").expect("write config");

    exam()
        .args(["--config"])
        .arg(config.path())
        .args(["parse", &fixture("sample.tex")])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Sect 1"));
}

#[test]
fn list_formats() {
    exam()
        .arg("list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("treeviz"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("yaml"))
        .stdout(predicate::str::contains("latex"));
}
