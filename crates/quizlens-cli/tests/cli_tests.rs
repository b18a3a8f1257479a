//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizlens() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizlens").unwrap()
}

/// A well-formed CSV export, headers pre-normalization as the upstream
/// export produces them.
const SAMPLE_CSV: &str = "\
User ID,Question No,Quiz Question ID,Selected Option,Is Correct,Attempts,Score,Total Score
1,1,101,A,True,1,1,8
1,2,102,B,False,2,0,8
2,1,101,A,True,1,1,9
2,2,102,C,True,1,1,9
";

fn write_csv(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn analyze_local_csv_prints_summary() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "quiz.csv", SAMPLE_CSV);

    quizlens()
        .arg("analyze")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean Score"))
        .stdout(predicate::str::contains("Accuracy Rate"))
        .stdout(predicate::str::contains("75.00%"))
        .stdout(predicate::str::contains("Score Range"));
}

#[test]
fn analyze_writes_json_export() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "quiz.csv", SAMPLE_CSV);
    let out = dir.path().join("results");

    quizlens()
        .arg("analyze")
        .arg(&csv)
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stderr(predicate::str::contains("JSON export"));

    let exports: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .collect();
    assert_eq!(exports.len(), 1);

    let content = std::fs::read_to_string(exports[0].path()).unwrap();
    assert!(content.contains("\"accuracy_rate\": 75.0"));
}

#[test]
fn analyze_writes_html_and_markdown_with_all() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "quiz.csv", SAMPLE_CSV);
    let out = dir.path().join("results");

    quizlens()
        .arg("analyze")
        .arg(&csv)
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("all")
        .assert()
        .success();

    let mut extensions: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            e.path()
                .extension()
                .map(|ext| ext.to_string_lossy().to_string())
        })
        .collect();
    extensions.sort();
    assert_eq!(extensions, vec!["html", "json", "md"]);
}

#[test]
fn analyze_empty_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "empty.csv",
        "User ID,Question No,Quiz Question ID,Selected Option,Is Correct,Attempts,Score,Total Score\n",
    );

    quizlens()
        .arg("analyze")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty record set"));
}

#[test]
fn analyze_nonexistent_file_fails() {
    quizlens()
        .arg("analyze")
        .arg("no_such_file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_complete_schema() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "quiz.csv", SAMPLE_CSV);

    quizlens()
        .arg("validate")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("All 8 required columns present"));
}

#[test]
fn validate_reports_every_missing_column() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "partial.csv", "User ID,Score\n1,5\n");

    quizlens()
        .arg("validate")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns"))
        .stderr(predicate::str::contains("is_correct"))
        .stderr(predicate::str::contains("quiz_question_id"));
}

#[test]
fn help_output() {
    quizlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz-attempt analytics engine"));
}

#[test]
fn version_output() {
    quizlens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizlens"));
}
