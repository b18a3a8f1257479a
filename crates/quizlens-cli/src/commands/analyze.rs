//! The `quizlens analyze` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizlens_core::engine::analyze_table;
use quizlens_core::report::AnalyticsReport;
use quizlens_report::html::write_html_report;
use quizlens_report::markdown::to_markdown;
use quizlens_source::source_for;

pub async fn execute(
    source_spec: String,
    label: Option<String>,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let source = source_for(&source_spec);
    let label = label.unwrap_or_else(|| source.label().to_string());

    tracing::debug!(source = %source.label(), "fetching table");
    let table = source
        .fetch_table()
        .await
        .with_context(|| format!("failed to load data from {source_spec}"))?;
    eprintln!(
        "Loaded {} rows x {} columns from {}",
        table.rows.len(),
        table.columns.len(),
        source.label()
    );

    let report = analyze_table(&label, &table).context("report generation failed")?;

    print_summary(&report);

    if !report.warnings.is_empty() {
        eprintln!(
            "\n{} data-quality warning(s); affected rows excluded per metric",
            report.warnings.len()
        );
    }

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html", "markdown"]
    } else {
        format.split(',').collect()
    };

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    for fmt in &formats {
        match *fmt {
            // The summary tables above are the text rendering.
            "text" => {}
            "json" => {
                std::fs::create_dir_all(&output)?;
                let path = output.join(format!("report-{timestamp}.json"));
                std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
                eprintln!("JSON export: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "markdown" | "md" => {
                std::fs::create_dir_all(&output)?;
                let path = output.join(format!("report-{timestamp}.md"));
                std::fs::write(&path, to_markdown(&report))?;
                eprintln!("Markdown summary: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_summary(report: &AnalyticsReport) {
    use comfy_table::{Cell, Table};

    let mut summary = Table::new();
    summary.set_header(vec!["Metric", "Value"]);
    summary.add_row(vec![
        Cell::new("Mean Score"),
        Cell::new(format!("{:.2}", report.overall.mean_score)),
    ]);
    summary.add_row(vec![
        Cell::new("Accuracy Rate"),
        Cell::new(format!("{:.2}%", report.overall.accuracy_rate)),
    ]);
    summary.add_row(vec![
        Cell::new("Users Got All Correct"),
        Cell::new(report.overall.users_all_correct),
    ]);
    summary.add_row(vec![
        Cell::new("Highest Scoring Question"),
        Cell::new(report.overall.best_question.question_no),
    ]);
    summary.add_row(vec![
        Cell::new("Lowest Scoring Question"),
        Cell::new(report.overall.worst_question.question_no),
    ]);
    summary.add_row(vec![
        Cell::new("Users Completed All"),
        Cell::new(report.attempts.users_completed_all),
    ]);
    summary.add_row(vec![
        Cell::new("Correct On First Attempt"),
        Cell::new(report.attempts.first_attempt_correct_users),
    ]);
    summary.add_row(vec![
        Cell::new("Users With >1 Attempt"),
        Cell::new(report.attempts.retry_users),
    ]);
    summary.add_row(vec![
        Cell::new("All Wrong Users"),
        Cell::new(report.attempts.all_wrong_users),
    ]);
    summary.add_row(vec![
        Cell::new("Repeated Wrong Answers"),
        Cell::new(report.mistakes.repeated_wrong_patterns),
    ]);
    println!("{summary}");

    if !report.questions.most_attempted.is_empty() {
        let mut questions = Table::new();
        questions.set_header(vec!["Question", "Rows", "Correct", "Wrong"]);
        for q in &report.questions.most_attempted {
            let correct = report
                .questions
                .most_correct
                .iter()
                .find(|c| c.question_no == q.question_no)
                .map(|c| c.count)
                .unwrap_or(0);
            let wrong = report
                .questions
                .most_wrong
                .iter()
                .find(|w| w.question_no == q.question_no)
                .map(|w| w.count)
                .unwrap_or(0);
            questions.add_row(vec![
                Cell::new(q.question_no),
                Cell::new(q.count),
                Cell::new(correct),
                Cell::new(wrong),
            ]);
        }
        println!("{questions}");
    }

    let mut ranges = Table::new();
    ranges.set_header(vec!["Score Range", "Count"]);
    for range in &report.trends.score_ranges {
        ranges.add_row(vec![Cell::new(&range.label), Cell::new(range.count)]);
    }
    println!("{ranges}");
}
