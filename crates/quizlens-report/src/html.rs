//! HTML dashboard generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use quizlens_core::report::AnalyticsReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML dashboard from an analytics report.
pub fn generate_html(report: &AnalyticsReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>quizlens report — {}</title>\n",
        html_escape(&report.dataset.label)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>quizlens report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Source: <strong>{}</strong> | {} rows | {} users | {} questions | {}</p>\n",
        html_escape(&report.dataset.label),
        report.dataset.row_count,
        report.dataset.user_count,
        report.dataset.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Overall performance
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Overall Performance</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Metric</th><th>Value</th></tr></thead>\n<tbody>\n");
    for (name, value) in [
        ("Mean Score", format!("{:.2}", report.overall.mean_score)),
        (
            "Accuracy Rate",
            format!("{:.2}%", report.overall.accuracy_rate),
        ),
        (
            "Users Got All Correct",
            report.overall.users_all_correct.to_string(),
        ),
        (
            "Highest Scoring Question",
            format!(
                "{} ({:.2})",
                report.overall.best_question.question_no,
                report.overall.best_question.mean_score
            ),
        ),
        (
            "Lowest Scoring Question",
            format!(
                "{} ({:.2})",
                report.overall.worst_question.question_no,
                report.overall.worst_question.mean_score
            ),
        ),
        (
            "Users Completed All",
            report.attempts.users_completed_all.to_string(),
        ),
        (
            "Correct On First Attempt",
            report.attempts.first_attempt_correct_users.to_string(),
        ),
        (
            "Users With >1 Attempt",
            report.attempts.retry_users.to_string(),
        ),
        (
            "All Wrong Users",
            report.attempts.all_wrong_users.to_string(),
        ),
        (
            "Repeated Wrong Answers",
            report.mistakes.repeated_wrong_patterns.to_string(),
        ),
    ] {
        html.push_str(&format!(
            "<tr><td>{name}</td><td>{}</td></tr>\n",
            html_escape(&value)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Question-level charts
    html.push_str("<section class=\"charts\">\n");
    html.push_str("<h2>Question-Level Analysis</h2>\n");
    html.push_str(&bar_chart(
        "Most Attempted Questions",
        &report
            .questions
            .most_attempted
            .iter()
            .map(|q| (format!("Q{}", q.question_no), q.count))
            .collect::<Vec<_>>(),
    ));
    html.push_str(&bar_chart(
        "Most Correct Answers",
        &report
            .questions
            .most_correct
            .iter()
            .map(|q| (format!("Q{}", q.question_no), q.count))
            .collect::<Vec<_>>(),
    ));
    html.push_str(&bar_chart(
        "Most Wrong Answers",
        &report
            .questions
            .most_wrong
            .iter()
            .map(|q| (format!("Q{}", q.question_no), q.count))
            .collect::<Vec<_>>(),
    ));
    html.push_str(&bar_chart(
        "Correct vs Incorrect",
        &[
            (
                "Correct".to_string(),
                report.questions.outcome_totals.correct,
            ),
            (
                "Incorrect".to_string(),
                report.questions.outcome_totals.incorrect,
            ),
        ],
    ));
    html.push_str("</section>\n");

    // Attempt patterns
    html.push_str("<section class=\"charts\">\n");
    html.push_str("<h2>Attempt Patterns</h2>\n");
    html.push_str(&bar_chart(
        "Attempt Distribution",
        &report
            .attempts
            .attempt_distribution
            .iter()
            .map(|a| (format!("{} attempt(s)", a.attempts), a.count))
            .collect::<Vec<_>>(),
    ));
    html.push_str(&bar_chart(
        "Top Wrong Options",
        &report
            .mistakes
            .top_wrong_options
            .iter()
            .map(|o| (o.selected_option.clone(), o.count))
            .collect::<Vec<_>>(),
    ));
    html.push_str(&bar_chart(
        "Score Distribution Ranges",
        &report
            .trends
            .score_ranges
            .iter()
            .map(|r| (r.label.clone(), r.count))
            .collect::<Vec<_>>(),
    ));
    html.push_str("</section>\n");

    // Per-question score range
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Score Range Per Question</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"ranges\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Question</th><th onclick=\"sortTable(1)\">Min</th><th onclick=\"sortTable(2)\">Max</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for range in &report.trends.per_question_range {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td></tr>\n",
            range.question_no, range.min, range.max
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Data-quality warnings
    if !report.warnings.is_empty() {
        html.push_str("<section class=\"warnings\">\n");
        html.push_str("<h2>Data Quality Warnings</h2>\n<ul>\n");
        for warning in &report.warnings {
            let row = warning
                .row
                .map(|r| format!("row {r}: "))
                .unwrap_or_default();
            html.push_str(&format!(
                "<li>{}{}</li>\n",
                row,
                html_escape(&warning.message)
            ));
        }
        html.push_str("</ul>\n</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML dashboard to a file.
pub fn write_html_report(report: &AnalyticsReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn bar_chart(title: &str, rows: &[(String, usize)]) -> String {
    let bar_height = 24;
    let max_width = 400;
    let padding = 8;
    let label_width = 180;

    let mut svg = format!("<h3>{}</h3>\n", html_escape(title));
    if rows.is_empty() {
        svg.push_str("<p class=\"meta\">no data</p>\n");
        return svg;
    }

    let max_count = rows.iter().map(|(_, count)| *count).max().unwrap_or(1).max(1);
    let total_height = rows.len() * (bar_height + padding) + padding;

    svg.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    ));

    for (i, (label, count)) in rows.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = count * max_width / max_count;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#3b82f6\" rx=\"4\"/>\n",
            label_width, y, width, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            count
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --warn: #fef3c7; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --warn: #78350f; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.warnings ul { background: var(--warn); padding: 1rem 2rem; border-radius: 8px; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('ranges');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = parseFloat(a.cells[col].textContent);
    const vb = parseFloat(b.cells[col].textContent);
    return asc ? va - vb : vb - va;
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
